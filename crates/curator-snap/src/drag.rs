//! Drag-gesture orchestration: snap, resolve, group motion, commit.
//!
//! The caller owns the before/after snapshots. `drag_position` runs per
//! pointer-move; `commit_drag` applies the final outcome on drag-end and
//! is the only path that replaces stored positions.

use curator_core::{FrameId, FramePosition, Furniture, Wall};
use curator_layout::Rect;
use glam::DVec2;
use smallvec::SmallVec;

use crate::collision::collides_any;
use crate::resolve::{resolve_collision, ResolveInput};
use crate::snap::{snap_position, AlignmentGuide, SnapInput};

/// Input to one drag update.
#[derive(Debug, Clone, Copy)]
pub struct DragInput<'a> {
    pub wall: &'a Wall,
    pub frames: &'a [FramePosition],
    pub active: FrameId,
    /// Frames moving together with the active one.
    pub co_selected: &'a [FrameId],
    /// Pointer-derived desired top-left for the active frame.
    pub desired: DVec2,
    pub gap: f64,
    pub threshold: f64,
    pub furniture: Option<&'a Furniture>,
}

/// A co-dragged frame's live preview position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovedFrame {
    pub id: FrameId,
    pub x: f64,
    pub y: f64,
}

/// The corrected position for the active frame plus previews for the
/// rest of the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub active: FrameId,
    pub x: f64,
    pub y: f64,
    /// Guides to draw; empty when the collision resolver had to take
    /// over.
    pub guides: SmallVec<[AlignmentGuide; 2]>,
    pub moved: Vec<MovedFrame>,
}

/// Compute the outcome of one pointer move.
pub fn drag_position(input: &DragInput) -> DragOutcome {
    let mut exclude: Vec<FrameId> = Vec::with_capacity(1 + input.co_selected.len());
    exclude.push(input.active);
    exclude.extend_from_slice(input.co_selected);

    let snapped = snap_position(&SnapInput {
        wall: input.wall,
        frames: input.frames,
        active: input.active,
        desired: input.desired,
        gap: input.gap,
        threshold: input.threshold,
        furniture: input.furniture,
        exclude: &exclude,
    });

    let active = input.frames.iter().find(|f| f.id == input.active);
    let (mut x, mut y, mut guides) = (snapped.x, snapped.y, snapped.guides);

    if let Some(active) = active {
        let rect = Rect::new(x, y, active.width, active.height);
        if collides_any(&rect, input.frames, &exclude, input.gap) {
            // Independent axis choices combined into an overlap; hand the
            // position to the resolver and drop the guides.
            let resolved = resolve_collision(&ResolveInput {
                wall: input.wall,
                frames: input.frames,
                active: input.active,
                desired: DVec2::new(x, y),
                prior: DVec2::new(active.x, active.y),
                gap: input.gap,
                exclude: &exclude,
            });
            x = resolved.x;
            y = resolved.y;
            guides = SmallVec::new();
        }
    }

    // Co-selected frames follow by the same resolved delta, each clamped
    // to the wall on its own.
    let delta = match active {
        Some(a) => DVec2::new(x - a.x, y - a.y),
        None => DVec2::ZERO,
    };
    let moved = input
        .co_selected
        .iter()
        .filter_map(|id| input.frames.iter().find(|f| f.id == *id))
        .map(|f| MovedFrame {
            id: f.id,
            x: (f.x + delta.x).clamp(0.0, (input.wall.width - f.width).max(0.0)),
            y: (f.y + delta.y).clamp(0.0, (input.wall.height - f.height).max(0.0)),
        })
        .collect();

    DragOutcome { active: input.active, x, y, guides, moved }
}

/// Apply a drag outcome to a frame-position snapshot, replacing only the
/// moved frames' coordinates and recomputing their derived fields.
pub fn commit_drag(
    frames: &[FramePosition],
    outcome: &DragOutcome,
    wall: &Wall,
) -> Vec<FramePosition> {
    frames
        .iter()
        .map(|f| {
            if f.id == outcome.active {
                f.moved_to(outcome.x, outcome.y, wall)
            } else if let Some(m) = outcome.moved.iter().find(|m| m.id == f.id) {
                f.moved_to(m.x, m.y, wall)
            } else {
                f.clone()
            }
        })
        .collect()
}
