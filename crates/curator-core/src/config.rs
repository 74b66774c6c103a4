//! Layout configuration.
//!
//! The configuration is an explicit immutable parameter record passed by
//! reference into the engines. There is no ambient state: every
//! recomputation receives the whole configuration and returns fresh
//! positions.

use indexmap::IndexMap;

use crate::errors::ConfigError;
use crate::types::{
    Distribution, Frame, FrameId, Furniture, HangingType, HorizontalAnchor, Template,
    VerticalAlign, VerticalAnchor, Wall,
};

/// Which layout algorithm arranges the frames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Greedy width-wrapping: frames flow into rows, wrapping when the
    /// next frame would exceed the max row width (wall width if `None`).
    Auto { max_row_width: Option<f64> },
    /// Frames are bucketed into rows by their explicit `row` index.
    ManualRows,
    /// Frames are mapped onto a named template's slots.
    Template {
        template: Template,
        /// Explicit slot-to-frame pairs; unassigned slots take the next
        /// unassigned frame in order.
        assignments: IndexMap<usize, FrameId>,
    },
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Auto { max_row_width: None }
    }
}

/// Per-row overrides of the global spacing settings.
///
/// Absent fields mean "use the global default"; the distinction between
/// unset and explicitly-set is carried by `Option`, never by sentinel
/// values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowOverride {
    pub h_spacing: Option<f64>,
    pub v_align: Option<VerticalAlign>,
    pub h_distribution: Option<Distribution>,
}

/// Fully resolved settings for one row, after fallback-merging overrides
/// over the global defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSettings {
    pub h_spacing: f64,
    pub v_align: VerticalAlign,
    pub h_distribution: Distribution,
}

/// Map from row index to its override record.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowOverrides(pub IndexMap<u32, RowOverride>);

impl RowOverrides {
    /// Resolve the settings for a row: overrides win field-by-field,
    /// everything else falls back to the defaults.
    pub fn resolve(&self, row: u32, defaults: RowSettings) -> RowSettings {
        match self.0.get(&row) {
            Some(o) => RowSettings {
                h_spacing: o.h_spacing.unwrap_or(defaults.h_spacing),
                v_align: o.v_align.unwrap_or(defaults.v_align),
                h_distribution: o.h_distribution.unwrap_or(defaults.h_distribution),
            },
            None => defaults,
        }
    }
}

/// The complete input to the batch layout engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub wall: Wall,
    /// Ordered frame list. Output positions preserve this order.
    pub frames: Vec<Frame>,
    pub mode: LayoutMode,
    /// Global gap between frames within a row.
    pub h_spacing: f64,
    /// Gap between stacked rows.
    pub v_spacing: f64,
    pub v_align: VerticalAlign,
    pub h_distribution: Distribution,
    pub horizontal_anchor: HorizontalAnchor,
    pub vertical_anchor: VerticalAnchor,
    pub furniture: Option<Furniture>,
    pub row_overrides: RowOverrides,
}

impl LayoutConfig {
    /// Create a configuration with sensible defaults for a wall and a set
    /// of frames.
    pub fn new(wall: Wall, frames: Vec<Frame>) -> Self {
        Self {
            wall,
            frames,
            mode: LayoutMode::default(),
            h_spacing: 3.0,
            v_spacing: 3.0,
            v_align: VerticalAlign::default(),
            h_distribution: Distribution::default(),
            horizontal_anchor: HorizontalAnchor::default(),
            vertical_anchor: VerticalAnchor::default(),
            furniture: None,
            row_overrides: RowOverrides::default(),
        }
    }

    /// Global defaults as a resolved [`RowSettings`] record.
    pub fn default_row_settings(&self) -> RowSettings {
        RowSettings {
            h_spacing: self.h_spacing,
            v_align: self.v_align,
            h_distribution: self.h_distribution,
        }
    }

    /// Check the configuration for problems the engines assume away.
    ///
    /// The engines never fail at runtime; callers validate once at the
    /// edge and then recompute freely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("wall width", self.wall.width)?;
        check_dimension("wall height", self.wall.height)?;

        let mut seen = std::collections::HashSet::new();
        for frame in &self.frames {
            if !seen.insert(frame.id) {
                return Err(ConfigError::DuplicateFrameId(frame.id));
            }
            check_dimension("frame width", frame.width)?;
            check_dimension("frame height", frame.height)?;
            if let HangingType::Dual { hook_inset } = frame.hanging {
                if hook_inset * 2.0 > frame.width {
                    return Err(ConfigError::HookInsetTooLarge {
                        id: frame.id,
                        inset: hook_inset,
                        width: frame.width,
                    });
                }
            }
        }

        if let Some(furniture) = &self.furniture {
            check_dimension("furniture width", furniture.width)?;
            check_dimension("furniture height", furniture.height)?;
        }

        if let LayoutMode::Template { template, assignments } = &self.mode {
            for (index, slot) in template.slots.iter().enumerate() {
                let in_unit = |v: f64| (0.0..=1.0).contains(&v);
                if !(in_unit(slot.x)
                    && in_unit(slot.y)
                    && in_unit(slot.x + slot.width)
                    && in_unit(slot.y + slot.height))
                {
                    return Err(ConfigError::SlotCoordinatesOutOfRange { index });
                }
            }
            let mut assigned = std::collections::HashSet::new();
            for (&index, id) in assignments {
                if index >= template.slots.len() {
                    return Err(ConfigError::SlotOutOfRange {
                        index,
                        slot_count: template.slots.len(),
                    });
                }
                if !seen.contains(id) {
                    return Err(ConfigError::UnknownFrame { id: *id });
                }
                if !assigned.insert(*id) {
                    return Err(ConfigError::FrameAssignedTwice { id: *id });
                }
            }
        }

        Ok(())
    }
}

fn check_dimension(what: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidDimension { what: what.to_string(), value });
    }
    Ok(())
}
