mod classifier;
mod deduplication;
mod domain;
mod event_type;
mod manager;
mod query_type;

pub use classifier::EventTypeClassifier;
pub use deduplication::DeduplicationFilter;
pub use domain::DomainFilter;
pub use event_type::EventTypeFilter;
pub use manager::{FilterManager, FilterVerdict};
pub use query_type::QueryTypeFilter;
