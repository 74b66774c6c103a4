//! Distribution solver: per-gap spacing and first-item offset along one
//! axis.

use curator_core::Distribution;

/// Solved spacing for a run of items along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Offset of the first item from the container's start.
    pub start_offset: f64,
    /// Gap between consecutive items.
    pub gap: f64,
}

/// Solve for spacing given a fixed set of same-row items.
///
/// `item_span` is the sum of item sizes along the axis, `container_span`
/// the space they distribute into. For [`Distribution::Fixed`] the offset
/// is `0`; placing the run is the anchor resolver's job, not the
/// solver's. Counts of zero or one never divide by zero.
pub fn solve(
    count: usize,
    item_span: f64,
    container_span: f64,
    fixed_gap: f64,
    mode: Distribution,
) -> Spacing {
    let available = container_span - item_span;
    match mode {
        Distribution::Fixed => Spacing { start_offset: 0.0, gap: fixed_gap },
        Distribution::SpaceBetween => {
            if count > 1 {
                Spacing {
                    start_offset: 0.0,
                    gap: available / (count - 1) as f64,
                }
            } else {
                Spacing { start_offset: 0.0, gap: 0.0 }
            }
        }
        Distribution::SpaceEvenly => {
            let gap = available / (count + 1) as f64;
            Spacing { start_offset: gap, gap }
        }
        Distribution::SpaceAround => {
            if count > 0 {
                let gap = available / count as f64;
                Spacing { start_offset: gap / 2.0, gap }
            } else {
                Spacing { start_offset: 0.0, gap: 0.0 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_between_three_items() {
        // Wall 100, 3 frames of width 20: positions 0, 40, 80.
        let s = solve(3, 60.0, 100.0, 0.0, Distribution::SpaceBetween);
        assert!((s.start_offset - 0.0).abs() < 0.001);
        assert!((s.gap - 20.0).abs() < 0.001);

        let xs: Vec<f64> = (0..3)
            .scan(s.start_offset, |x, _| {
                let here = *x;
                *x += 20.0 + s.gap;
                Some(here)
            })
            .collect();
        assert!((xs[0] - 0.0).abs() < 0.001);
        assert!((xs[1] - 40.0).abs() < 0.001);
        assert!((xs[2] - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_space_between_single_item_no_division() {
        let s = solve(1, 20.0, 100.0, 0.0, Distribution::SpaceBetween);
        assert!((s.start_offset - 0.0).abs() < 0.001);
        assert!((s.gap - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_space_evenly() {
        let s = solve(3, 90.0, 180.0, 0.0, Distribution::SpaceEvenly);
        assert!((s.gap - 22.5).abs() < 0.001);
        assert!((s.start_offset - 22.5).abs() < 0.001);
    }

    #[test]
    fn test_space_around() {
        let s = solve(2, 100.0, 200.0, 0.0, Distribution::SpaceAround);
        assert!((s.gap - 50.0).abs() < 0.001);
        assert!((s.start_offset - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_fixed_gap_passthrough() {
        let s = solve(4, 80.0, 200.0, 5.0, Distribution::Fixed);
        assert!((s.gap - 5.0).abs() < 0.001);
        assert!((s.start_offset - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_count_degenerates() {
        for mode in [
            Distribution::Fixed,
            Distribution::SpaceBetween,
            Distribution::SpaceEvenly,
            Distribution::SpaceAround,
        ] {
            let s = solve(0, 0.0, 100.0, 2.0, mode);
            assert!(s.gap.is_finite());
            assert!(s.start_offset.is_finite());
        }
    }
}
