//! Layout orchestration: configuration in, frame positions out.

use curator_core::{
    Distribution, FrameId, FramePosition, FurnitureAlign, LayoutConfig, LayoutMode, Template,
    VerticalAnchor,
};
use indexmap::IndexMap;

use crate::anchor;
use crate::distribution;
use crate::rows;
use crate::template;

/// Compute one [`FramePosition`] per configured frame.
///
/// Pure and total: identical input yields identical output, zero frames
/// yield an empty list, and out-of-wall placement is surfaced through the
/// advisory `is_out_of_bounds` flag rather than treated as an error.
/// Output order always matches the input frame order.
pub fn compute_layout(config: &LayoutConfig) -> Vec<FramePosition> {
    match &config.mode {
        LayoutMode::Template { template, assignments } => {
            compute_template(config, template, assignments)
        }
        _ => compute_rows(config),
    }
}

fn compute_rows(config: &LayoutConfig) -> Vec<FramePosition> {
    let rows = rows::build(config);
    if rows.is_empty() {
        return Vec::new();
    }

    let wall = &config.wall;
    let total_height = rows::stacked_height(&rows, config.v_spacing);
    // Furniture governs horizontal placement only while the group is
    // anchored to it vertically.
    let furniture_relative = match config.vertical_anchor {
        VerticalAnchor::Furniture => config.furniture.as_ref(),
        _ => None,
    };
    let y0 = anchor::resolve_vertical(
        total_height,
        wall,
        config.vertical_anchor,
        config.furniture.as_ref(),
    );

    // Slots indexed by original frame position so the output preserves
    // input order regardless of row processing order.
    let mut out: Vec<Option<FramePosition>> = vec![None; config.frames.len()];
    let mut row_top = y0;

    for row in &rows {
        let count = row.members.len();
        let item_span = row.item_span(&config.frames);

        let (start_x, gap) = if let Some(furniture) = furniture_relative {
            let fixed_gap = furniture.frame_gap.unwrap_or(row.settings.h_spacing);
            match furniture.horizontal {
                FurnitureAlign::Span => {
                    let spacing = distribution::solve(
                        count,
                        item_span,
                        furniture.width,
                        fixed_gap,
                        row.settings.h_distribution,
                    );
                    (furniture.left(wall) + spacing.start_offset, spacing.gap)
                }
                _ => {
                    let width = item_span + fixed_gap * count.saturating_sub(1) as f64;
                    (
                        anchor::resolve_furniture_horizontal(width, wall, furniture),
                        fixed_gap,
                    )
                }
            }
        } else {
            match row.settings.h_distribution {
                Distribution::Fixed => (
                    anchor::resolve_horizontal(row.width, wall, config.horizontal_anchor),
                    row.settings.h_spacing,
                ),
                mode => {
                    let spacing =
                        distribution::solve(count, item_span, wall.width, row.settings.h_spacing, mode);
                    (spacing.start_offset, spacing.gap)
                }
            }
        };

        let mut x = start_x;
        for &i in &row.members {
            let frame = &config.frames[i];
            let y = row_top + row.align_offset(frame.height);
            out[i] = Some(FramePosition::of(frame, x, y, wall));
            x += frame.width + gap;
        }
        row_top += row.height + config.v_spacing;
    }

    out.into_iter().flatten().collect()
}

fn compute_template(
    config: &LayoutConfig,
    template: &Template,
    assignments: &IndexMap<usize, FrameId>,
) -> Vec<FramePosition> {
    let mut placements = template::map_slots(config, template, assignments);
    placements.sort_by_key(|p| p.frame);
    placements
        .into_iter()
        .map(|p| FramePosition::of(&config.frames[p.frame], p.x, p.y, &config.wall))
        .collect()
}
