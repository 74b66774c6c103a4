//! Collision detection against the current frame set.

use curator_core::{FrameId, FramePosition};
use curator_layout::Rect;

/// Whether `rect` overlaps any frame not in `exclude`, keeping at least
/// `gap` between facing edges.
///
/// The dragged frame always excludes itself; a group drag excludes the
/// whole selection.
pub fn collides_any(
    rect: &Rect,
    frames: &[FramePosition],
    exclude: &[FrameId],
    gap: f64,
) -> bool {
    frames
        .iter()
        .filter(|f| !exclude.contains(&f.id))
        .any(|f| rect.overlaps_with_gap(&Rect::of_position(f), gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{Frame, Wall};

    fn position(id: u64, x: f64, y: f64) -> FramePosition {
        let wall = Wall::new(200.0, 200.0);
        FramePosition::of(&Frame::new(FrameId(id), 20.0, 20.0), x, y, &wall)
    }

    #[test]
    fn test_self_is_excluded() {
        let frames = vec![position(1, 10.0, 10.0)];
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(!collides_any(&rect, &frames, &[FrameId(1)], 2.0));
        assert!(collides_any(&rect, &frames, &[], 2.0));
    }

    #[test]
    fn test_gap_buffer() {
        let frames = vec![position(1, 0.0, 0.0)];
        // 1 unit to the right of the frame's edge: inside a 2-unit gap.
        let near = Rect::new(21.0, 0.0, 20.0, 20.0);
        assert!(collides_any(&near, &frames, &[], 2.0));
        // Exactly at the gap: clear.
        let clear = Rect::new(22.0, 0.0, 20.0, 20.0);
        assert!(!collides_any(&clear, &frames, &[], 2.0));
    }

    #[test]
    fn test_group_exclusion() {
        let frames = vec![position(1, 0.0, 0.0), position(2, 50.0, 0.0)];
        let rect = Rect::new(50.0, 0.0, 20.0, 20.0);
        assert!(collides_any(&rect, &frames, &[FrameId(1)], 0.0));
        assert!(!collides_any(&rect, &frames, &[FrameId(1), FrameId(2)], 0.0));
    }
}
