//! Batch layout computation for curator gallery walls.
//!
//! This crate turns a [`curator_core::LayoutConfig`] into one
//! [`curator_core::FramePosition`] per frame:
//!
//! 1. **Row building**: manual bucketing or greedy width-wrapping
//! 2. **Distribution**: per-gap spacing along a row
//! 3. **Anchoring**: placing the arrangement's bounding box on the wall,
//!    optionally relative to a furniture piece
//! 4. **Templates**: mapping frames onto a named arrangement's slots
//!
//! The engine is a pure function of the configuration: no I/O, no retained
//! state, identical output for identical input.

pub mod anchor;
pub mod compute;
pub mod distribution;
pub mod geometry;
pub mod rows;
pub mod template;

pub use compute::compute_layout;
pub use distribution::{solve as solve_distribution, Spacing};
pub use geometry::Rect;
pub use rows::Row;
