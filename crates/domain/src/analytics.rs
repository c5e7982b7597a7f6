// crates/domain/src/analytics.rs
pub mod sort;
pub mod tally;

pub use sort::SortedFrequency;
pub use tally::FrequencyTally;
