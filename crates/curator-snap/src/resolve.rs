//! Collision-resolution search.
//!
//! When a desired or snapped position still collides, a bounded candidate
//! set is generated, filtered for validity, scored by distance to the
//! desired point, and the best candidate wins. An empty candidate set
//! (pathological over-crowding) returns the frame's prior position; that
//! is the documented degenerate case, not a failure.

use curator_core::{FrameId, FramePosition, Wall};
use curator_layout::Rect;
use glam::DVec2;

use crate::collision::collides_any;

/// Input to one resolution search.
#[derive(Debug, Clone, Copy)]
pub struct ResolveInput<'a> {
    pub wall: &'a Wall,
    pub frames: &'a [FramePosition],
    pub active: FrameId,
    /// Where the user wants the frame.
    pub desired: DVec2,
    /// The frame's last known-good position, the fallback of last resort.
    pub prior: DVec2,
    pub gap: f64,
    pub exclude: &'a [FrameId],
}

/// Find the valid position nearest to the desired point.
pub fn resolve_collision(input: &ResolveInput) -> DVec2 {
    let Some(active) = input.frames.iter().find(|f| f.id == input.active) else {
        return input.desired;
    };
    let (w, h) = (active.width, active.height);
    let wall_rect = Rect::new(0.0, 0.0, input.wall.width, input.wall.height);

    let valid = |p: DVec2| {
        let rect = Rect::new(p.x, p.y, w, h);
        rect.within(&wall_rect) && !collides_any(&rect, input.frames, input.exclude, input.gap)
    };

    if valid(input.desired) {
        return input.desired;
    }

    let mut candidates: Vec<DVec2> = Vec::new();

    // Adjacent to each other frame on four sides, three alignments each.
    for other in input.frames {
        if other.id == input.active || input.exclude.contains(&other.id) {
            continue;
        }
        let o = Rect::of_position(other);
        let right = o.right() + input.gap;
        let left = o.x - input.gap - w;
        let below = o.bottom() + input.gap;
        let above = o.y - input.gap - h;

        for y in [o.y, o.bottom() - h, input.desired.y] {
            candidates.push(DVec2::new(right, y));
            candidates.push(DVec2::new(left, y));
        }
        for x in [o.x, o.right() - w, input.desired.x] {
            candidates.push(DVec2::new(x, below));
            candidates.push(DVec2::new(x, above));
        }
    }

    // Wall corner and edge-midpoint fallbacks.
    let max_x = input.wall.width - w;
    let max_y = input.wall.height - h;
    let mid_x = max_x / 2.0;
    let mid_y = max_y / 2.0;
    candidates.extend([
        DVec2::new(0.0, 0.0),
        DVec2::new(max_x, 0.0),
        DVec2::new(0.0, max_y),
        DVec2::new(max_x, max_y),
        DVec2::new(mid_x, 0.0),
        DVec2::new(mid_x, max_y),
        DVec2::new(0.0, mid_y),
        DVec2::new(max_x, mid_y),
    ]);

    candidates
        .into_iter()
        .filter(|&p| valid(p))
        .min_by(|a, b| {
            a.distance(input.desired).total_cmp(&b.distance(input.desired))
        })
        .unwrap_or(input.prior)
}
