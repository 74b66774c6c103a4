//! Error types for the curator engine.
//!
//! The layout and snap engines themselves are total functions with no
//! failure modes; errors exist only at the configuration validation
//! boundary, before the engines run.

use thiserror::Error;

use crate::types::FrameId;

/// Errors found while validating a layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Duplicate frame id {0:?}")]
    DuplicateFrameId(FrameId),

    #[error("Invalid {what} dimension: {value}")]
    InvalidDimension { what: String, value: f64 },

    #[error("Hook inset {inset} too large for frame {id:?} of width {width}")]
    HookInsetTooLarge { id: FrameId, inset: f64, width: f64 },

    #[error("Slot assignment references unknown frame {id:?}")]
    UnknownFrame { id: FrameId },

    #[error("Frame {id:?} is assigned to more than one slot")]
    FrameAssignedTwice { id: FrameId },

    #[error("Slot assignment index {index} out of range for template with {slot_count} slots")]
    SlotOutOfRange { index: usize, slot_count: usize },

    #[error("Template slot {index} has coordinates outside [0, 1]")]
    SlotCoordinatesOutOfRange { index: usize },
}
