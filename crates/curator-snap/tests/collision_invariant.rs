//! Property test: after a drag update, no two frames overlap.

use curator_core::{Frame, FrameId, FramePosition, Wall};
use curator_layout::Rect;
use curator_snap::{commit_drag, drag_position, DragInput, DEFAULT_SNAP_THRESHOLD};
use glam::DVec2;
use proptest::prelude::*;

const WALL: Wall = Wall { width: 300.0, height: 300.0 };

/// Non-overlapping starting grid: 20x20 frames on 30-unit centers.
fn grid(count: usize) -> Vec<FramePosition> {
    (0..count)
        .map(|i| {
            let col = (i % 9) as f64;
            let row = (i / 9) as f64;
            FramePosition::of(
                &Frame::new(FrameId(i as u64), 20.0, 20.0),
                col * 30.0,
                row * 30.0,
                &WALL,
            )
        })
        .collect()
}

proptest! {
    /// Dragging one frame anywhere never leaves it overlapping another,
    /// whichever of the snap, resolver, or prior-position paths fired.
    #[test]
    fn drag_never_creates_overlap(
        count in 2usize..18,
        desired_x in 0.0f64..280.0,
        desired_y in 0.0f64..280.0,
        gap in 0.0f64..8.0,
    ) {
        let frames = grid(count);
        let outcome = drag_position(&DragInput {
            wall: &WALL,
            frames: &frames,
            active: FrameId(0),
            co_selected: &[],
            desired: DVec2::new(desired_x, desired_y),
            gap,
            threshold: DEFAULT_SNAP_THRESHOLD,
            furniture: None,
        });
        let committed = commit_drag(&frames, &outcome, &WALL);

        for (i, a) in committed.iter().enumerate() {
            for b in committed.iter().skip(i + 1) {
                let ra = Rect::of_position(a);
                let rb = Rect::of_position(b);
                prop_assert!(
                    !ra.overlaps_with_gap(&rb, gap),
                    "frames {:?} and {:?} overlap after drag",
                    a.id,
                    b.id
                );
            }
        }
    }
}
