//! Template slot mapping.
//!
//! A template is a named set of slots in relative `[0, 1]` coordinates.
//! Frames are mapped onto slots, the slot-center cloud is scaled to fit
//! the wall, and each frame is centered on its scaled slot center. Slot
//! size influences position only; frames keep their own dimensions.

use curator_core::{Frame, FrameId, LayoutConfig, Template, TemplateSlot};
use indexmap::IndexMap;

use crate::anchor;
use crate::geometry::Rect;

/// Fraction of the wall the scaled slot-center spread may occupy.
const FIT_WIDTH: f64 = 0.85;
const FIT_HEIGHT: f64 = 0.75;

/// A frame resolved to a wall position by the template mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// Index into the configuration's frame list.
    pub frame: usize,
    pub x: f64,
    pub y: f64,
}

/// Map frames onto template slots and place them on the wall.
///
/// Explicitly assigned slot/frame pairs are honored as-is; every other
/// slot takes the next unassigned frame in input order. Frames left
/// without a slot (more frames than slots) are centered on the wall.
pub fn map_slots(
    config: &LayoutConfig,
    template: &Template,
    assignments: &IndexMap<usize, FrameId>,
) -> Vec<SlotPlacement> {
    let frames = &config.frames;
    let wall = &config.wall;
    let pairs = assign(frames, template, assignments);

    let mut placements = Vec::with_capacity(frames.len());

    if !pairs.is_empty() {
        let scale = fit_scale(&template.slots, wall.width * FIT_WIDTH, wall.height * FIT_HEIGHT);
        let (min_cx, min_cy) = center_min(&template.slots);

        // Template-local frame rects, each centered on its scaled slot
        // center.
        let local: Vec<(usize, Rect)> = pairs
            .iter()
            .map(|&(slot, frame)| {
                let (cx, cy) = template.slots[slot].center();
                let f = &frames[frame];
                let rect = Rect::new(
                    (cx - min_cx) * scale - f.width / 2.0,
                    (cy - min_cy) * scale - f.height / 2.0,
                    f.width,
                    f.height,
                );
                (frame, rect)
            })
            .collect();

        let bbox = local
            .iter()
            .map(|(_, r)| *r)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();

        // Overflowing axes are centered unconditionally; overflow is
        // allowed but never pushed further off-wall.
        let x0 = if bbox.width > wall.width {
            (wall.width - bbox.width) / 2.0
        } else {
            anchor::resolve_horizontal(bbox.width, wall, config.horizontal_anchor)
        };
        let y0 = if bbox.height > wall.height {
            (wall.height - bbox.height) / 2.0
        } else {
            anchor::resolve_vertical(
                bbox.height,
                wall,
                config.vertical_anchor,
                config.furniture.as_ref(),
            )
        };

        for (frame, rect) in local {
            placements.push(SlotPlacement {
                frame,
                x: x0 + (rect.x - bbox.x),
                y: y0 + (rect.y - bbox.y),
            });
        }
    }

    // Leftover frames with no slot.
    let slotted: Vec<usize> = placements.iter().map(|p| p.frame).collect();
    for (i, f) in frames.iter().enumerate() {
        if !slotted.contains(&i) {
            placements.push(SlotPlacement {
                frame: i,
                x: (wall.width - f.width) / 2.0,
                y: (wall.height - f.height) / 2.0,
            });
        }
    }

    placements
}

/// Resolve slot/frame pairs: explicit assignments first, then each
/// unassigned slot takes the next unassigned frame in stable order.
fn assign(
    frames: &[Frame],
    template: &Template,
    assignments: &IndexMap<usize, FrameId>,
) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut taken = vec![false; frames.len()];

    for (&slot, id) in assignments {
        if slot >= template.slots.len() {
            continue;
        }
        if let Some(frame) = frames.iter().position(|f| f.id == *id) {
            // At most one placement per frame: a frame assigned to
            // several slots keeps the first.
            if taken[frame] {
                continue;
            }
            pairs.push((slot, frame));
            taken[frame] = true;
        }
    }

    let mut next = 0usize;
    for slot in 0..template.slots.len() {
        if pairs.iter().any(|&(s, _)| s == slot) {
            continue;
        }
        while next < frames.len() && taken[next] {
            next += 1;
        }
        if next >= frames.len() {
            break;
        }
        taken[next] = true;
        pairs.push((slot, next));
    }

    pairs.sort_by_key(|&(s, _)| s);
    pairs
}

fn center_min(slots: &[TemplateSlot]) -> (f64, f64) {
    let min_cx = slots.iter().map(|s| s.center().0).fold(f64::INFINITY, f64::min);
    let min_cy = slots.iter().map(|s| s.center().1).fold(f64::INFINITY, f64::min);
    (min_cx, min_cy)
}

/// Uniform scale mapping the slot-center spread into the available area,
/// preserving aspect ratio. Zero spread on one axis falls back to the
/// other; zero spread on both (single-slot template) scales by one.
fn fit_scale(slots: &[TemplateSlot], available_width: f64, available_height: f64) -> f64 {
    let centers: Vec<(f64, f64)> = slots.iter().map(|s| s.center()).collect();
    let spread_x = centers.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max)
        - centers.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
    let spread_y = centers.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max)
        - centers.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);

    if spread_x > 0.0 && spread_y > 0.0 {
        (available_width / spread_x).min(available_height / spread_y)
    } else if spread_x > 0.0 {
        available_width / spread_x
    } else if spread_y > 0.0 {
        available_height / spread_y
    } else {
        1.0
    }
}

/// Built-in arrangement shapes offered by name.
pub fn builtin(name: &str) -> Option<Template> {
    let slots = match name {
        "triptych" => vec![
            TemplateSlot::new(0.05, 0.35, 0.25, 0.3),
            TemplateSlot::new(0.375, 0.35, 0.25, 0.3),
            TemplateSlot::new(0.7, 0.35, 0.25, 0.3),
        ],
        "staircase" => vec![
            TemplateSlot::new(0.05, 0.1, 0.25, 0.25),
            TemplateSlot::new(0.375, 0.375, 0.25, 0.25),
            TemplateSlot::new(0.7, 0.65, 0.25, 0.25),
        ],
        "grid2x2" => vec![
            TemplateSlot::new(0.1, 0.1, 0.35, 0.35),
            TemplateSlot::new(0.55, 0.1, 0.35, 0.35),
            TemplateSlot::new(0.1, 0.55, 0.35, 0.35),
            TemplateSlot::new(0.55, 0.55, 0.35, 0.35),
        ],
        "salon" => vec![
            TemplateSlot::new(0.35, 0.3, 0.3, 0.4),
            TemplateSlot::new(0.05, 0.15, 0.22, 0.25),
            TemplateSlot::new(0.73, 0.15, 0.22, 0.25),
            TemplateSlot::new(0.05, 0.55, 0.22, 0.25),
            TemplateSlot::new(0.73, 0.55, 0.22, 0.25),
            TemplateSlot::new(0.39, 0.05, 0.22, 0.18),
        ],
        _ => return None,
    };
    Some(Template::new(name, slots))
}

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &["triptych", "staircase", "grid2x2", "salon"];

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::Wall;

    fn frames(n: u64) -> Vec<Frame> {
        (1..=n).map(|i| Frame::new(FrameId(i), 20.0, 16.0)).collect()
    }

    fn config(frames: Vec<Frame>) -> LayoutConfig {
        LayoutConfig::new(Wall::new(120.0, 96.0), frames)
    }

    #[test]
    fn test_builtin_slots_stay_relative() {
        for name in BUILTIN_NAMES {
            let template = builtin(name).unwrap();
            assert!(!template.slots.is_empty());
            for slot in &template.slots {
                assert!(slot.x >= 0.0 && slot.x + slot.width <= 1.0);
                assert!(slot.y >= 0.0 && slot.y + slot.height <= 1.0);
            }
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(builtin("spiral").is_none());
    }

    #[test]
    fn test_auto_assignment_is_stable() {
        let c = config(frames(3));
        let template = builtin("triptych").unwrap();
        let placements = map_slots(&c, &template, &IndexMap::new());

        assert_eq!(placements.len(), 3);
        // Frames fill slots left to right in input order.
        assert_eq!(placements[0].frame, 0);
        assert_eq!(placements[1].frame, 1);
        assert_eq!(placements[2].frame, 2);
        assert!(placements[0].x < placements[1].x);
        assert!(placements[1].x < placements[2].x);
    }

    #[test]
    fn test_explicit_assignment_wins() {
        let c = config(frames(3));
        let template = builtin("triptych").unwrap();
        let mut assignments = IndexMap::new();
        assignments.insert(0usize, FrameId(3));

        let placements = map_slots(&c, &template, &assignments);
        // Slot 0 holds frame index 2; slots 1 and 2 take frames 0 and 1.
        assert_eq!(placements[0].frame, 2);
        assert_eq!(placements[1].frame, 0);
        assert_eq!(placements[2].frame, 1);
    }

    #[test]
    fn test_same_size_frames_share_slot_geometry() {
        // Equal frames on a horizontal triptych: equal y, evenly spread x.
        let c = config(frames(3));
        let template = builtin("triptych").unwrap();
        let placements = map_slots(&c, &template, &IndexMap::new());

        assert!((placements[0].y - placements[1].y).abs() < 0.001);
        assert!((placements[1].y - placements[2].y).abs() < 0.001);
        let gap01 = placements[1].x - placements[0].x;
        let gap12 = placements[2].x - placements[1].x;
        assert!((gap01 - gap12).abs() < 0.001);
    }

    #[test]
    fn test_single_slot_template_scale_fallback() {
        let c = config(frames(1));
        let template = Template::new("solo", vec![TemplateSlot::new(0.4, 0.4, 0.2, 0.2)]);
        let placements = map_slots(&c, &template, &IndexMap::new());

        assert_eq!(placements.len(), 1);
        // Zero spread: scale 1, single frame anchored (default center).
        assert!((placements[0].x - 50.0).abs() < 0.001);
        assert!((placements[0].y - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_extra_frames_center_on_wall() {
        let c = config(frames(4));
        let template = builtin("triptych").unwrap();
        let placements = map_slots(&c, &template, &IndexMap::new());

        assert_eq!(placements.len(), 4);
        let leftover = placements.iter().find(|p| p.frame == 3).unwrap();
        assert!((leftover.x - 50.0).abs() < 0.001);
        assert!((leftover.y - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_repeated_assignment_keeps_one_placement_per_frame() {
        let c = config(frames(2));
        let template = builtin("triptych").unwrap();
        let mut assignments = IndexMap::new();
        assignments.insert(0usize, FrameId(1));
        assignments.insert(1usize, FrameId(1));

        let placements = map_slots(&c, &template, &assignments);
        assert_eq!(placements.len(), 2);
        let mut seen: Vec<usize> = placements.iter().map(|p| p.frame).collect();
        seen.sort();
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_more_slots_than_frames() {
        let c = config(frames(2));
        let template = builtin("grid2x2").unwrap();
        let placements = map_slots(&c, &template, &IndexMap::new());
        assert_eq!(placements.len(), 2);
    }
}
