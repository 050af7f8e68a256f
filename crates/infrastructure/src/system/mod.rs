pub mod host_info;

pub use host_info::SystemHostInfo;
