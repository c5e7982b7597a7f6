//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines the traits that abstract external concerns:
//!
//! - [`decoding`]: Reading line-encoded files and decoding them to text
//!
//! The port allows the domain and application layers to remain independent
//! of the concrete filesystem and base64 implementation.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoding;
