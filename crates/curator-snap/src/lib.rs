//! Interactive snapping and collision resolution.
//!
//! Runs once per pointer-move during a drag gesture:
//!
//! 1. **Snap**: clamp the dragged frame to the wall, then snap each axis
//!    independently to nearby wall/furniture/frame alignments, emitting
//!    alignment guides for the renderer
//! 2. **Collision resolution**: when the chosen position still overlaps a
//!    neighbor, search a bounded candidate set and take the valid position
//!    nearest the pointer
//! 3. **Group drag**: co-selected frames follow by the same resolved
//!    delta, each clamped to the wall on its own
//!
//! Everything here is a pure function of the caller's frame snapshot; the
//! caller commits the final position on drag-end.

pub mod collision;
pub mod drag;
pub mod resolve;
pub mod snap;

pub use collision::collides_any;
pub use drag::{commit_drag, drag_position, DragInput, DragOutcome, MovedFrame};
pub use resolve::{resolve_collision, ResolveInput};
pub use snap::{
    snap_position, AlignmentGuide, GuideKind, SnapInput, SnapResult, DEFAULT_SNAP_THRESHOLD,
};
