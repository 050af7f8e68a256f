//! ASIM DNS Application Layer
//!
//! The filtering and normalization engine: classifier cache, the ordered
//! filter chain, and the schema mapper that turns surviving raw events
//! into canonical records.
pub mod fields;
pub mod filtering;
pub mod mapping;
pub mod ports;

pub use filtering::{
    DeduplicationFilter, DomainFilter, EventTypeClassifier, EventTypeFilter, FilterManager,
    FilterVerdict, QueryTypeFilter,
};
pub use mapping::SchemaMapper;
