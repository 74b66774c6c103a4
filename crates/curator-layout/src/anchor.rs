//! Anchor resolver: placing a bounding box on the wall.
//!
//! Given a bounding-box size along one axis and an anchor description,
//! returns the box's top-left offset along that axis. The furniture case
//! composes the furniture's own wall placement with one of three vertical
//! relationships.

use curator_core::{
    Furniture, FurnitureAlign, FurnitureVertical, HorizontalAnchor, VerticalAnchor, Wall,
};

/// Left edge of a box of `box_width` placed per the horizontal anchor.
pub fn resolve_horizontal(box_width: f64, wall: &Wall, anchor: HorizontalAnchor) -> f64 {
    match anchor {
        HorizontalAnchor::Center => (wall.width - box_width) / 2.0,
        HorizontalAnchor::Left(offset) => offset,
        HorizontalAnchor::Right(offset) => wall.width - box_width - offset,
    }
}

/// Top edge of a box of `box_height` placed per the vertical anchor.
///
/// `Furniture` needs a configured furniture piece; without one it
/// degrades to `Center` rather than failing.
pub fn resolve_vertical(
    box_height: f64,
    wall: &Wall,
    anchor: VerticalAnchor,
    furniture: Option<&Furniture>,
) -> f64 {
    match anchor {
        VerticalAnchor::Center => (wall.height - box_height) / 2.0,
        VerticalAnchor::Ceiling(offset) => offset,
        VerticalAnchor::Floor(offset) => wall.height - offset - box_height,
        VerticalAnchor::Furniture => match furniture {
            Some(f) => resolve_above_furniture(box_height, wall, f),
            None => (wall.height - box_height) / 2.0,
        },
    }
}

fn resolve_above_furniture(box_height: f64, wall: &Wall, furniture: &Furniture) -> f64 {
    let furniture_top = furniture.top(wall);
    match furniture.vertical {
        FurnitureVertical::CenteredInGap => (furniture_top - box_height) / 2.0,
        FurnitureVertical::FromCeiling(offset) => offset,
        FurnitureVertical::AboveFurniture(gap) => furniture_top - gap - box_height,
    }
}

/// Left edge of the frame group when aligned against the furniture.
///
/// [`FurnitureAlign::Span`] is not handled here: spanning re-runs the
/// distribution solver over the furniture's width and is resolved by the
/// engine per row.
pub fn resolve_furniture_horizontal(box_width: f64, wall: &Wall, furniture: &Furniture) -> f64 {
    let left = furniture.left(wall);
    match furniture.horizontal {
        FurnitureAlign::Left => left,
        FurnitureAlign::Center | FurnitureAlign::Span => {
            left + (furniture.width - box_width) / 2.0
        }
        FurnitureAlign::Right => left + furniture.width - box_width,
    }
}
