//! Property tests for the distribution solver and batch engine.

use curator_core::{Distribution, Frame, FrameId, LayoutConfig, Wall};
use curator_layout::{compute_layout, solve_distribution};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn fill_modes() -> impl Strategy<Value = Distribution> {
    prop_oneof![
        Just(Distribution::SpaceBetween),
        Just(Distribution::SpaceEvenly),
        Just(Distribution::SpaceAround),
    ]
}

proptest! {
    /// Items distributed by any fill mode stay inside the container.
    #[test]
    fn distribution_stays_in_container(
        count in 1usize..8,
        item in 1.0f64..20.0,
        slack in 0.0f64..100.0,
        mode in fill_modes(),
    ) {
        let item_span = item * count as f64;
        let container = item_span + slack;
        let spacing = solve_distribution(count, item_span, container, 0.0, mode);

        let mut x = spacing.start_offset;
        for _ in 0..count {
            prop_assert!(x >= -EPS);
            prop_assert!(x + item <= container + EPS);
            x += item + spacing.gap;
        }
    }

    /// The batch engine is a pure function: identical input, identical
    /// output.
    #[test]
    fn batch_engine_is_idempotent(
        sizes in prop::collection::vec((5.0f64..40.0, 5.0f64..40.0), 1..12),
    ) {
        let frames: Vec<Frame> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Frame::new(FrameId(i as u64), w, h))
            .collect();
        let config = LayoutConfig::new(Wall::new(120.0, 96.0), frames);

        let a = compute_layout(&config);
        let b = compute_layout(&config);
        prop_assert_eq!(a, b);
    }

    /// Output always has one position per frame, in input order.
    #[test]
    fn one_position_per_frame_in_order(
        sizes in prop::collection::vec((5.0f64..40.0, 5.0f64..40.0), 0..12),
    ) {
        let frames: Vec<Frame> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Frame::new(FrameId(i as u64), w, h))
            .collect();
        let config = LayoutConfig::new(Wall::new(120.0, 96.0), frames);

        let positions = compute_layout(&config);
        prop_assert_eq!(positions.len(), sizes.len());
        for (i, p) in positions.iter().enumerate() {
            prop_assert_eq!(p.id, FrameId(i as u64));
        }
    }

    /// Frames in the same auto-wrapped row keep the fixed gap between
    /// them.
    #[test]
    fn fixed_gap_is_respected(
        sizes in prop::collection::vec(5.0f64..30.0, 2..10),
        gap in 1.0f64..8.0,
    ) {
        let frames: Vec<Frame> = sizes
            .iter()
            .enumerate()
            .map(|(i, &w)| Frame::new(FrameId(i as u64), w, 20.0))
            .collect();
        let mut config = LayoutConfig::new(Wall::new(150.0, 96.0), frames);
        config.h_spacing = gap;

        let positions = compute_layout(&config);
        for pair in positions.windows(2) {
            // Same row iff same vertical band.
            if (pair[0].y - pair[1].y).abs() < EPS {
                let measured = pair[1].x - (pair[0].x + pair[0].width);
                prop_assert!((measured - gap).abs() < EPS);
            }
        }
    }
}
