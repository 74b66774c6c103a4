//! Row building: partitioning the ordered frame list into rows.
//!
//! Manual mode buckets frames by their explicit row index. Auto mode
//! wraps greedily on width. Either way a row holds at least one frame;
//! a single frame wider than the limit still gets its own row rather
//! than being split.

use curator_core::{Frame, LayoutConfig, LayoutMode, RowSettings, VerticalAlign};

/// One horizontal band of frames, with aggregates and resolved settings.
#[derive(Debug, Clone)]
pub struct Row {
    /// Indices into the configuration's frame list, in row order.
    pub members: Vec<usize>,
    /// Sum of member widths plus fixed inter-frame gaps.
    pub width: f64,
    /// Max member height.
    pub height: f64,
    pub settings: RowSettings,
}

impl Row {
    /// Sum of member widths without gaps (the solver's `item_span`).
    pub fn item_span(&self, frames: &[Frame]) -> f64 {
        self.members.iter().map(|&i| frames[i].width).sum()
    }

    /// Vertical offset of a member within the row's height band.
    pub fn align_offset(&self, frame_height: f64) -> f64 {
        match self.settings.v_align {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Center => (self.height - frame_height) / 2.0,
            VerticalAlign::Bottom => self.height - frame_height,
        }
    }
}

/// Partition the configured frames into rows.
///
/// Only meaningful for the freeform modes; the template mapper ignores
/// rows entirely. Empty input yields no rows.
pub fn build(config: &LayoutConfig) -> Vec<Row> {
    if config.frames.is_empty() {
        return Vec::new();
    }
    match &config.mode {
        LayoutMode::ManualRows => build_manual(config),
        LayoutMode::Auto { max_row_width } => {
            build_auto(config, max_row_width.unwrap_or(config.wall.width))
        }
        LayoutMode::Template { .. } => build_auto(config, config.wall.width),
    }
}

/// Total bounding-box height of stacked rows: row heights plus inter-row
/// spacing. This is what the vertical anchor resolver receives.
pub fn stacked_height(rows: &[Row], v_spacing: f64) -> f64 {
    let heights: f64 = rows.iter().map(|r| r.height).sum();
    heights + v_spacing * rows.len().saturating_sub(1) as f64
}

fn build_manual(config: &LayoutConfig) -> Vec<Row> {
    let defaults = config.default_row_settings();

    // Bucket by row index, keeping frame order within each bucket.
    let mut buckets: Vec<(u32, Vec<usize>)> = Vec::new();
    for (i, frame) in config.frames.iter().enumerate() {
        let row = frame.row.unwrap_or(0);
        match buckets.iter_mut().find(|(r, _)| *r == row) {
            Some((_, members)) => members.push(i),
            None => buckets.push((row, vec![i])),
        }
    }
    buckets.sort_by_key(|(row, _)| *row);

    buckets
        .into_iter()
        .map(|(row, members)| {
            let settings = config.row_overrides.resolve(row, defaults);
            finish_row(config, members, settings)
        })
        .collect()
}

fn build_auto(config: &LayoutConfig, max_row_width: f64) -> Vec<Row> {
    let defaults = config.default_row_settings();
    let mut rows: Vec<Row> = Vec::new();
    let mut members: Vec<usize> = Vec::new();
    let mut width = 0.0_f64;
    let mut settings = config.row_overrides.resolve(0, defaults);

    for (i, frame) in config.frames.iter().enumerate() {
        let added = if members.is_empty() {
            frame.width
        } else {
            settings.h_spacing + frame.width
        };
        if !members.is_empty() && width + added > max_row_width {
            rows.push(finish_row(config, std::mem::take(&mut members), settings));
            settings = config.row_overrides.resolve(rows.len() as u32, defaults);
            width = frame.width;
        } else {
            width += added;
        }
        members.push(i);
    }
    if !members.is_empty() {
        rows.push(finish_row(config, members, settings));
    }
    rows
}

fn finish_row(config: &LayoutConfig, members: Vec<usize>, settings: RowSettings) -> Row {
    let width: f64 = members.iter().map(|&i| config.frames[i].width).sum::<f64>()
        + settings.h_spacing * members.len().saturating_sub(1) as f64;
    let height = members
        .iter()
        .map(|&i| config.frames[i].height)
        .fold(0.0_f64, f64::max);
    Row { members, width, height, settings }
}
