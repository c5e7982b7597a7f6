// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod error;
pub mod logger;
pub mod options;
pub mod presentation;
