//! Core types and configuration for the curator layout engine.
//!
//! This crate provides the foundational types used across the other curator
//! crates:
//! - Wall, frame, and furniture value types
//! - Hanging hardware descriptions and computed frame positions
//! - Template and slot types for fixed arrangements
//! - The layout configuration record and its validation errors

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
