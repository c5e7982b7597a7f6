// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
