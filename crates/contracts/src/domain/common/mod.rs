//! Common types and traits for all aggregates

pub mod address;
pub mod aggregate_root;
pub mod canonical;
pub mod entity_ref;
pub mod lenient;
pub mod record;

// Re-exports
pub use address::{Address, Company};
pub use aggregate_root::AggregateRoot;
pub use canonical::{remove_by_id, upsert_canonical};
pub use entity_ref::EntityRef;
pub use record::{decode_record, normalize_id};
