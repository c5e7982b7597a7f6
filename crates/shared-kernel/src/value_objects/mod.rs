// crates/shared-kernel/src/value_objects/mod.rs
pub mod occurrence;

pub use occurrence::OccurrenceCount;
