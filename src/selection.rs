//! Rectangle-selection hit testing.
//!
//! The generic drag-selection widget lives in the host; this module only
//! answers "which rows fall inside a completed selection rectangle". The
//! caller decides between replace, toggle and clear based on the result and
//! the modifier keys.

use crate::data::points::{GroupItem, LayerType};
use crate::geometry::{plot_to_screen, LinearScale, PlotOffset};
use crate::host::RowRef;

/// A completed drag-selection event, in screen pixel coordinates relative to
/// the host's visualization element. The emitter applies a minimum-size
/// threshold before sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Offset of the diagram panel within the emitting element.
    pub offset_left: f64,
    pub offset_top: f64,
    pub ctrl_key: bool,
    pub alt_key: bool,
}

/// Per-layer-type marking permission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkingPermissions {
    pub allow_well_marking: bool,
    pub allow_formation_marking: bool,
}

impl MarkingPermissions {
    fn allows(&self, layer: LayerType) -> bool {
        match layer {
            LayerType::Wells => self.allow_well_marking,
            LayerType::Formation => self.allow_formation_marking,
        }
    }
}

/// How formation layers are hit-tested. Two generations of the diagram
/// disagreed here; both behaviors are kept, with point containment as the
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormationHitRule {
    /// Each formation point is tested like a well point.
    #[default]
    Points,
    /// A formation segment is hit when either endpoint lies in the box;
    /// both segment rows are selected together.
    SegmentEndpoints,
}

/// Collect the row handles whose representative point falls inside the
/// selection rectangle. Containment is inclusive on both bounds. Points of
/// a layer type whose marking permission is off are skipped entirely.
pub fn hit_test_rect(
    groups: &[GroupItem],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    offset: PlotOffset,
    rect: &SelectionRect,
    permissions: MarkingPermissions,
    formation_rule: FormationHitRule,
) -> Vec<RowRef> {
    let x1 = rect.x;
    let x2 = rect.x + rect.width;
    let y1 = rect.y;
    let y2 = rect.y + rect.height;

    let contains = |x: f64, y: f64| -> bool {
        let (px, py) = plot_to_screen(x_scale, y_scale, offset, x, y);
        let px = px - rect.offset_left;
        let py = py - rect.offset_top;
        px >= x1 && px <= x2 && py >= y1 && py <= y2
    };

    let mut selected: Vec<RowRef> = Vec::new();
    let mut push_distinct = |row: &RowRef| {
        if !selected.iter().any(|r| std::rc::Rc::ptr_eq(r, row)) {
            selected.push(row.clone());
        }
    };

    for group in groups {
        if !permissions.allows(group.layer_type) {
            continue;
        }
        let data = group.data();
        match (group.layer_type, formation_rule) {
            (LayerType::Formation, FormationHitRule::SegmentEndpoints) => {
                for pair in data.windows(2) {
                    if contains(pair[0].x, pair[0].y) || contains(pair[1].x, pair[1].y) {
                        push_distinct(&pair[0].row);
                        push_distinct(&pair[1].row);
                    }
                }
            }
            _ => {
                for point in data {
                    if contains(point.x, point.y) {
                        push_distinct(&point.row);
                    }
                }
            }
        }
    }

    selected
}
