//! Core value types for walls, frames, and hanging hardware.
//!
//! All dimensions are stored in a single canonical unit. Display units are
//! a presentation concern and never enter the engine.

/// Unique, stable identifier for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u64);

/// The wall frames are arranged on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How a frame hangs from the wall.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HangingType {
    /// A single hook centered on the frame's width.
    #[default]
    Center,
    /// Two hooks inset symmetrically from the frame's side edges.
    Dual {
        /// Distance from each side edge to its hook.
        hook_inset: f64,
    },
}

/// A picture frame as configured by the caller.
///
/// Frames are value-identity records; the engine never mutates a frame in
/// place. It produces fresh [`FramePosition`] records instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub id: FrameId,
    pub width: f64,
    pub height: f64,
    /// Distance from the frame's top edge down to its hook.
    pub hanging_offset: f64,
    pub hanging: HangingType,
    /// Manual grouping index. `None` means row 0 in manual mode and is
    /// ignored entirely in auto-wrap and template modes.
    pub row: Option<u32>,
}

impl Frame {
    pub fn new(id: FrameId, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            hanging_offset: 0.0,
            hanging: HangingType::Center,
            row: None,
        }
    }

    /// Set the hanging offset.
    pub fn with_hanging_offset(mut self, offset: f64) -> Self {
        self.hanging_offset = offset;
        self
    }

    /// Set the hanging hardware type.
    pub fn with_hanging(mut self, hanging: HangingType) -> Self {
        self.hanging = hanging;
        self
    }

    /// Set the manual row index.
    pub fn with_row(mut self, row: u32) -> Self {
        self.row = Some(row);
        self
    }
}

/// A computed position for one frame, the engine's primary output.
///
/// Invariants: for [`HangingType::Dual`], `hook_x2 == hook_x + hook_gap`
/// and both hooks lie within `[x, x + width]`. For [`HangingType::Center`],
/// `hook_x == x + width / 2` and `hook_x2`/`hook_gap` are `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramePosition {
    pub id: FrameId,
    /// Top-left corner, wall-relative.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub hanging_offset: f64,
    /// X of the hook (left hook for dual hanging).
    pub hook_x: f64,
    /// X of the right hook, dual hanging only.
    pub hook_x2: Option<f64>,
    pub hook_y: f64,
    /// Distance between the two hooks, dual hanging only.
    pub hook_gap: Option<f64>,
    /// Measured distances for the installer, hook-relative.
    pub from_left: f64,
    pub from_floor: f64,
    pub from_right: f64,
    pub from_ceiling: f64,
    /// Advisory flag: some edge falls outside the wall. Not an error.
    pub is_out_of_bounds: bool,
}

impl FramePosition {
    /// Compute the full position record for a frame placed at `(x, y)`.
    pub fn of(frame: &Frame, x: f64, y: f64, wall: &Wall) -> Self {
        let hook_y = y + frame.hanging_offset;
        let (hook_x, hook_x2, hook_gap) = match frame.hanging {
            HangingType::Center => (x + frame.width / 2.0, None, None),
            HangingType::Dual { hook_inset } => {
                let gap = frame.width - 2.0 * hook_inset;
                (x + hook_inset, Some(x + frame.width - hook_inset), Some(gap))
            }
        };
        Self {
            id: frame.id,
            x,
            y,
            width: frame.width,
            height: frame.height,
            hanging_offset: frame.hanging_offset,
            hook_x,
            hook_x2,
            hook_y,
            hook_gap,
            from_left: hook_x,
            from_floor: wall.height - hook_y,
            from_right: wall.width - hook_x2.unwrap_or(hook_x),
            from_ceiling: hook_y,
            is_out_of_bounds: x < 0.0
                || y < 0.0
                || x + frame.width > wall.width
                || y + frame.height > wall.height,
        }
    }

    /// The same frame at a new `(x, y)`, with every derived field
    /// recomputed. This is the drag-commit path; nothing else edits a
    /// position record.
    pub fn moved_to(&self, x: f64, y: f64, wall: &Wall) -> Self {
        let hanging = match self.hook_gap {
            Some(gap) => HangingType::Dual { hook_inset: (self.width - gap) / 2.0 },
            None => HangingType::Center,
        };
        let frame = Frame {
            id: self.id,
            width: self.width,
            height: self.height,
            hanging_offset: self.hanging_offset,
            hanging,
            row: None,
        };
        Self::of(&frame, x, y, wall)
    }
}

/// Spacing strategy for multiple items along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// A fixed gap between items; placement of the whole run is the
    /// anchor's job.
    #[default]
    Fixed,
    /// First and last items touch the container edges, equal gaps between.
    SpaceBetween,
    /// Equal gaps between items and at both container edges.
    SpaceEvenly,
    /// Equal space around each item (half-gaps at the container edges).
    SpaceAround,
}

/// Vertical alignment of a frame within its row's height band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Horizontal placement of the arrangement's bounding box on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAnchor {
    /// Centered on the wall.
    #[default]
    Center,
    /// A fixed distance from the left wall edge.
    Left(f64),
    /// A fixed distance from the right wall edge.
    Right(f64),
}

/// Vertical placement of the arrangement's bounding box on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAnchor {
    /// Centered on the wall.
    #[default]
    Center,
    /// A fixed distance down from the ceiling.
    Ceiling(f64),
    /// A fixed gap from the floor up to the bottom of the box.
    Floor(f64),
    /// Placed relative to the furniture piece; the relationship lives in
    /// [`Furniture::vertical`]. Falls back to `Center` when no furniture
    /// is configured.
    Furniture,
}

/// Horizontal placement of the furniture piece itself on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FurnitureAnchor {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical relationship between the frame group and the furniture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FurnitureVertical {
    /// Centered in the gap between the ceiling and the furniture's top.
    #[default]
    CenteredInGap,
    /// A fixed distance down from the ceiling.
    FromCeiling(f64),
    /// A fixed gap between the group's bottom and the furniture's top.
    AboveFurniture(f64),
}

/// Horizontal relationship between the frame group and the furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FurnitureAlign {
    /// Align the group's left edge to the furniture's left edge.
    Left,
    /// Center the group over the furniture.
    #[default]
    Center,
    /// Align the group's right edge to the furniture's right edge.
    Right,
    /// Distribute the frames across the furniture's footprint.
    Span,
}

/// A furniture piece (credenza, sofa, console) standing against the wall.
///
/// Furniture rests on the floor, so its top edge is
/// `wall.height - height`. Horizontal placement follows `anchor`/`offset`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Furniture {
    pub width: f64,
    pub height: f64,
    pub anchor: FurnitureAnchor,
    /// Distance from the anchored wall edge; ignored for `Center`.
    pub offset: f64,
    pub vertical: FurnitureVertical,
    pub horizontal: FurnitureAlign,
    /// Gap between frames while furniture-aligned; `None` uses the global
    /// horizontal spacing.
    pub frame_gap: Option<f64>,
}

impl Furniture {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            anchor: FurnitureAnchor::Center,
            offset: 0.0,
            vertical: FurnitureVertical::CenteredInGap,
            horizontal: FurnitureAlign::Center,
            frame_gap: None,
        }
    }

    /// Left edge of the furniture on the wall.
    pub fn left(&self, wall: &Wall) -> f64 {
        match self.anchor {
            FurnitureAnchor::Left => self.offset,
            FurnitureAnchor::Center => (wall.width - self.width) / 2.0,
            FurnitureAnchor::Right => wall.width - self.width - self.offset,
        }
    }

    /// Top edge of the furniture on the wall.
    pub fn top(&self, wall: &Wall) -> f64 {
        wall.height - self.height
    }
}

/// A slot in a template, in relative `[0, 1]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateSlot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TemplateSlot {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center of the slot in relative coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A named fixed arrangement shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    pub name: String,
    pub slots: Vec<TemplateSlot>,
}

impl Template {
    pub fn new(name: impl Into<String>, slots: Vec<TemplateSlot>) -> Self {
        Self { name: name.into(), slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_left_edges() {
        let wall = Wall::new(120.0, 96.0);
        let mut furniture = Furniture::new(60.0, 30.0);

        furniture.anchor = FurnitureAnchor::Left;
        furniture.offset = 10.0;
        assert!((furniture.left(&wall) - 10.0).abs() < 0.001);

        furniture.anchor = FurnitureAnchor::Center;
        assert!((furniture.left(&wall) - 30.0).abs() < 0.001);

        furniture.anchor = FurnitureAnchor::Right;
        assert!((furniture.left(&wall) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_furniture_rests_on_floor() {
        let wall = Wall::new(120.0, 96.0);
        let furniture = Furniture::new(60.0, 30.0);
        assert!((furniture.top(&wall) - 66.0).abs() < 0.001);
    }

    #[test]
    fn test_dual_hanging_hooks() {
        let wall = Wall::new(100.0, 100.0);
        let frame = Frame::new(FrameId(1), 20.0, 16.0)
            .with_hanging(HangingType::Dual { hook_inset: 3.0 })
            .with_hanging_offset(2.0);
        let pos = FramePosition::of(&frame, 10.0, 10.0, &wall);

        assert!((pos.hook_x - 13.0).abs() < 0.001);
        assert!((pos.hook_x2.unwrap() - 27.0).abs() < 0.001);
        assert!((pos.hook_gap.unwrap() - 14.0).abs() < 0.001);
        assert!((pos.hook_x2.unwrap() - pos.hook_x - pos.hook_gap.unwrap()).abs() < 0.001);
        assert!((pos.hook_y - 12.0).abs() < 0.001);
        assert!((pos.from_right - (100.0 - 27.0)).abs() < 0.001);
    }

    #[test]
    fn test_center_hanging_hook() {
        let wall = Wall::new(100.0, 100.0);
        let frame = Frame::new(FrameId(1), 20.0, 16.0);
        let pos = FramePosition::of(&frame, 30.0, 10.0, &wall);
        assert!((pos.hook_x - 40.0).abs() < 0.001);
        assert!(pos.hook_x2.is_none());
        assert!(pos.hook_gap.is_none());
    }

    #[test]
    fn test_out_of_bounds_boundary() {
        let wall = Wall::new(100.0, 100.0);
        let frame = Frame::new(FrameId(1), 100.0, 100.0);
        assert!(!FramePosition::of(&frame, 0.0, 0.0, &wall).is_out_of_bounds);
        assert!(FramePosition::of(&frame, 1.0, 0.0, &wall).is_out_of_bounds);
        assert!(FramePosition::of(&frame, 0.0, 1.0, &wall).is_out_of_bounds);
        assert!(FramePosition::of(&frame, -1.0, 0.0, &wall).is_out_of_bounds);
    }

    #[test]
    fn test_moved_to_preserves_hardware() {
        let wall = Wall::new(100.0, 100.0);
        let frame = Frame::new(FrameId(1), 20.0, 16.0)
            .with_hanging(HangingType::Dual { hook_inset: 3.0 });
        let pos = FramePosition::of(&frame, 0.0, 0.0, &wall);
        let moved = pos.moved_to(50.0, 40.0, &wall);

        assert!((moved.hook_x - 53.0).abs() < 0.001);
        assert!((moved.hook_x2.unwrap() - 67.0).abs() < 0.001);
        assert!((moved.hook_gap.unwrap() - 14.0).abs() < 0.001);
        assert_eq!(moved.id, pos.id);
    }

    #[test]
    fn test_slot_center() {
        let slot = TemplateSlot::new(0.25, 0.25, 0.5, 0.5);
        let (cx, cy) = slot.center();
        assert!((cx - 0.5).abs() < 0.001);
        assert!((cy - 0.5).abs() < 0.001);
    }
}
