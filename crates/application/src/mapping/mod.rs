mod flags;
mod schema_mapper;

pub use schema_mapper::SchemaMapper;
