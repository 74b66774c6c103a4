//! Snap candidate generation for the actively dragged frame.
//!
//! Candidates come from the wall's edges and center, the furniture's
//! edges, center, and gap-above plane, and every other frame's edges,
//! center, and gap-adjacency positions. Each axis snaps independently to
//! the nearest candidate within the threshold whose resulting position
//! does not collide.

use curator_core::{FrameId, FramePosition, Furniture, Wall};
use curator_layout::Rect;
use glam::DVec2;
use smallvec::SmallVec;

use crate::collision::collides_any;

/// Default snap threshold in canonical units.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 18.0;

/// What kind of alignment a guide line marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// A vertical line through aligned left/right edges.
    EdgeVertical,
    /// A horizontal line through aligned top/bottom edges.
    EdgeHorizontal,
    /// A vertical line through aligned horizontal centers.
    CenterVertical,
    /// A horizontal line through aligned vertical centers.
    CenterHorizontal,
}

/// A transient line descriptor shown during drag. Purely a rendering
/// hint; carries no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentGuide {
    pub kind: GuideKind,
    /// The aligned coordinate (x for vertical guides, y for horizontal).
    pub position: f64,
    /// Extent of the guide line along its own axis.
    pub start: f64,
    pub end: f64,
}

/// Input to one snap computation.
#[derive(Debug, Clone, Copy)]
pub struct SnapInput<'a> {
    pub wall: &'a Wall,
    /// The current frame set, including the dragged frame's stored
    /// position.
    pub frames: &'a [FramePosition],
    pub active: FrameId,
    /// Pointer-derived desired top-left for the dragged frame.
    pub desired: DVec2,
    /// Configured minimum gap between frames.
    pub gap: f64,
    pub threshold: f64,
    pub furniture: Option<&'a Furniture>,
    /// Frames ignored for candidates and collisions (the drag selection).
    pub exclude: &'a [FrameId],
}

/// A snapped position plus the guides to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: SmallVec<[AlignmentGuide; 2]>,
}

struct Candidate {
    /// Top-left coordinate of the dragged frame along the snap axis.
    value: f64,
    distance: f64,
    guide: AlignmentGuide,
}

/// Snap the dragged frame's desired position.
///
/// The desired point is clamped to the wall first; each axis then takes
/// the nearest non-colliding candidate within the threshold, or keeps its
/// clamped value. The combined position may still collide when the two
/// axis choices interact; callers detect that and fall through to the
/// collision resolver.
pub fn snap_position(input: &SnapInput) -> SnapResult {
    let Some(active) = input.frames.iter().find(|f| f.id == input.active) else {
        return SnapResult {
            x: input.desired.x,
            y: input.desired.y,
            guides: SmallVec::new(),
        };
    };
    let (w, h) = (active.width, active.height);
    let wall = input.wall;

    let clamped_x = input.desired.x.clamp(0.0, (wall.width - w).max(0.0));
    let clamped_y = input.desired.y.clamp(0.0, (wall.height - h).max(0.0));

    let mut guides: SmallVec<[AlignmentGuide; 2]> = SmallVec::new();

    let x = {
        let mut candidates = x_candidates(input, active, clamped_x, clamped_y);
        candidates.retain(|c| c.distance <= input.threshold);
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let chosen = candidates.into_iter().find(|c| {
            let rect = Rect::new(c.value, clamped_y, w, h);
            !collides_any(&rect, input.frames, input.exclude, input.gap)
        });
        match chosen {
            Some(c) => {
                guides.push(c.guide);
                c.value
            }
            None => clamped_x,
        }
    };

    let y = {
        let mut candidates = y_candidates(input, active, x, clamped_y);
        candidates.retain(|c| c.distance <= input.threshold);
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let chosen = candidates.into_iter().find(|c| {
            let rect = Rect::new(x, c.value, w, h);
            !collides_any(&rect, input.frames, input.exclude, input.gap)
        });
        match chosen {
            Some(c) => {
                guides.push(c.guide);
                c.value
            }
            None => clamped_y,
        }
    };

    SnapResult { x, y, guides }
}

fn x_candidates(
    input: &SnapInput,
    active: &FramePosition,
    from_x: f64,
    current_y: f64,
) -> Vec<Candidate> {
    let wall = input.wall;
    let (w, h) = (active.width, active.height);
    let mut out = Vec::new();

    let mut push = |value: f64, plane: f64, kind: GuideKind, start: f64, end: f64| {
        out.push(Candidate {
            value,
            distance: (value - from_x).abs(),
            guide: AlignmentGuide { kind, position: plane, start, end },
        });
    };

    // Wall edges and center; guides span the full wall height.
    push(0.0, 0.0, GuideKind::EdgeVertical, 0.0, wall.height);
    push(
        wall.width - w,
        wall.width,
        GuideKind::EdgeVertical,
        0.0,
        wall.height,
    );
    push(
        (wall.width - w) / 2.0,
        wall.width / 2.0,
        GuideKind::CenterVertical,
        0.0,
        wall.height,
    );

    if let Some(f) = input.furniture {
        let left = f.left(wall);
        let top = f.top(wall);
        let start = current_y.min(top);
        push(left, left, GuideKind::EdgeVertical, start, wall.height);
        push(
            left + f.width - w,
            left + f.width,
            GuideKind::EdgeVertical,
            start,
            wall.height,
        );
        push(
            left + (f.width - w) / 2.0,
            left + f.width / 2.0,
            GuideKind::CenterVertical,
            start,
            wall.height,
        );
    }

    for other in input.frames {
        if other.id == input.active || input.exclude.contains(&other.id) {
            continue;
        }
        let o = Rect::of_position(other);
        let start = o.y.min(current_y);
        let end = o.bottom().max(current_y + h);

        // Edge and center alignment.
        push(o.x, o.x, GuideKind::EdgeVertical, start, end);
        push(o.right() - w, o.right(), GuideKind::EdgeVertical, start, end);
        push(
            o.center_x() - w / 2.0,
            o.center_x(),
            GuideKind::CenterVertical,
            start,
            end,
        );
        // Adjacency: exactly one gap to the right/left of the neighbor.
        // The guide marks the dragged frame's touching edge.
        push(
            o.right() + input.gap,
            o.right() + input.gap,
            GuideKind::EdgeVertical,
            start,
            end,
        );
        push(
            o.x - input.gap - w,
            o.x - input.gap,
            GuideKind::EdgeVertical,
            start,
            end,
        );
    }

    out
}

fn y_candidates(
    input: &SnapInput,
    active: &FramePosition,
    current_x: f64,
    from_y: f64,
) -> Vec<Candidate> {
    let wall = input.wall;
    let (w, h) = (active.width, active.height);
    let mut out = Vec::new();

    let mut push = |value: f64, plane: f64, kind: GuideKind, start: f64, end: f64| {
        out.push(Candidate {
            value,
            distance: (value - from_y).abs(),
            guide: AlignmentGuide { kind, position: plane, start, end },
        });
    };

    push(0.0, 0.0, GuideKind::EdgeHorizontal, 0.0, wall.width);
    push(
        wall.height - h,
        wall.height,
        GuideKind::EdgeHorizontal,
        0.0,
        wall.width,
    );
    push(
        (wall.height - h) / 2.0,
        wall.height / 2.0,
        GuideKind::CenterHorizontal,
        0.0,
        wall.width,
    );

    if let Some(f) = input.furniture {
        let left = f.left(wall);
        let top = f.top(wall);
        let start = current_x.min(left);
        let end = (current_x + w).max(left + f.width);
        // Furniture top plane, and the gap-above plane that leaves one
        // configured gap between frame bottom and furniture top.
        push(top - h, top, GuideKind::EdgeHorizontal, start, end);
        push(top - input.gap - h, top - input.gap, GuideKind::EdgeHorizontal, start, end);
    }

    for other in input.frames {
        if other.id == input.active || input.exclude.contains(&other.id) {
            continue;
        }
        let o = Rect::of_position(other);
        let start = o.x.min(current_x);
        let end = o.right().max(current_x + w);

        push(o.y, o.y, GuideKind::EdgeHorizontal, start, end);
        push(o.bottom() - h, o.bottom(), GuideKind::EdgeHorizontal, start, end);
        push(
            o.center_y() - h / 2.0,
            o.center_y(),
            GuideKind::CenterHorizontal,
            start,
            end,
        );
        push(
            o.bottom() + input.gap,
            o.bottom() + input.gap,
            GuideKind::EdgeHorizontal,
            start,
            end,
        );
        push(
            o.y - input.gap - h,
            o.y - input.gap,
            GuideKind::EdgeHorizontal,
            start,
            end,
        );
    }

    out
}
