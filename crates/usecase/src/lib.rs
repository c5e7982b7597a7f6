//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters:
//!
//! - [`orchestrator`]: Drives the decode port and builds the aggregate text
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::AggregateOutput;
pub use orchestrator::BuildAggregate;
