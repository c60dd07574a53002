//! The well spacing diagram panel: state, toolbar, and host wiring.
//!
//! One instance renders one trellis panel. All computation runs
//! synchronously inside the frame; the only mutable caches are the
//! per-group distance sets, invalidated explicitly when the neighbor
//! limits, the marked-only filter, or the group data change. The plot
//! render passes live in [`crate::plot`].

use egui::RichText;

use crate::config::{DiagramConfig, DistanceMode};
use crate::data::distance::compute_group_distances;
use crate::data::points::{GroupItem, LayerType};
use crate::data::zoom::{AxisZoom, ZoomRange};
use crate::geometry::{LinearScale, PlotOffset};
use crate::host::{HostActions, MarkMode, RowRef};
use crate::measure::{MeasureMode, MeasuringStickController};
use crate::selection::{hit_test_rect, FormationHitRule, SelectionRect};

/// Identity of a hovered point: (group index, point index).
pub(crate) type PointId = (usize, usize);

pub struct WellSpacingDiagram {
    id: egui::Id,
    pub(crate) groups: Vec<GroupItem>,
    pub(crate) config: DiagramConfig,
    pub(crate) zoom: ZoomRange,
    pub(crate) distance_mode: DistanceMode,
    pub(crate) limit_to_marked: bool,
    pub(crate) measuring: MeasuringStickController,
    pub(crate) actions: HostActions,
    pub(crate) formation_hit_rule: FormationHitRule,

    // Scales from the most recent draw, for rectangle selection between
    // frames.
    pub(crate) last_scales: Option<(LinearScale, LinearScale)>,
    pub(crate) last_offset: PlotOffset,
    pub(crate) hover_point: Option<PointId>,
}

impl WellSpacingDiagram {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            groups: Vec::new(),
            config: DiagramConfig::default(),
            zoom: ZoomRange::default(),
            distance_mode: DistanceMode::default(),
            limit_to_marked: false,
            measuring: MeasuringStickController::default(),
            actions: HostActions::default(),
            formation_hit_rule: FormationHitRule::default(),
            last_scales: None,
            last_offset: PlotOffset::default(),
            hover_point: None,
        }
    }

    // ── Host-facing state ────────────────────────────────────────────────

    /// Replace the panel's group map. Distance caches start empty and are
    /// filled on the next draw.
    pub fn set_groups(&mut self, groups: Vec<GroupItem>) {
        self.groups = groups;
        self.hover_point = None;
    }

    pub fn groups(&self) -> &[GroupItem] {
        &self.groups
    }

    /// Mutable group access for in-place data updates; [`GroupItem::set_data`]
    /// drops the group's distance cache itself.
    pub fn groups_mut(&mut self) -> &mut [GroupItem] {
        &mut self.groups
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Apply a new configuration. Changed neighbor limits invalidate the
    /// distance caches; everything else takes effect on the next draw.
    pub fn set_config(&mut self, config: DiagramConfig) {
        if config.neighbor_limits() != self.config.neighbor_limits() {
            self.invalidate_distances();
        }
        self.config = config;
    }

    pub fn actions_mut(&mut self) -> &mut HostActions {
        &mut self.actions
    }

    pub fn set_formation_hit_rule(&mut self, rule: FormationHitRule) {
        self.formation_hit_rule = rule;
    }

    // ── Zoom ─────────────────────────────────────────────────────────────

    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom
    }

    /// Apply a zoom change from the host's slider. Triggers a domain
    /// recompute on the next draw (no distance recompute) and notifies the
    /// host for persistence.
    pub fn set_zoom_range(&mut self, range: ZoomRange) {
        let range = ZoomRange {
            x: range.x.clamped(),
            y: range.y.clamped(),
        };
        if range != self.zoom {
            self.zoom = range;
            self.actions.zoom_changed(&range);
        }
    }

    pub fn set_zoom_x(&mut self, axis: AxisZoom) {
        let mut range = self.zoom;
        range.x = axis;
        self.set_zoom_range(range);
    }

    pub fn set_zoom_y(&mut self, axis: AxisZoom) {
        let mut range = self.zoom;
        range.y = axis;
        self.set_zoom_range(range);
    }

    // ── Distance display ─────────────────────────────────────────────────

    pub fn distance_mode(&self) -> DistanceMode {
        self.distance_mode
    }

    /// Visibility switch only; the precomputed categories stay cached.
    pub fn set_distance_mode(&mut self, mode: DistanceMode) {
        self.distance_mode = mode;
    }

    pub fn limit_to_marked(&self) -> bool {
        self.limit_to_marked
    }

    /// Toggle the marked-rows-only filter; recomputes distances on the
    /// next draw.
    pub fn set_limit_to_marked(&mut self, limit: bool) {
        if limit != self.limit_to_marked {
            self.limit_to_marked = limit;
            self.invalidate_distances();
        }
    }

    pub fn measuring(&self) -> &MeasuringStickController {
        &self.measuring
    }

    pub(crate) fn invalidate_distances(&mut self) {
        for group in &mut self.groups {
            group.invalidate();
        }
    }

    /// Fill any invalidated distance caches. Full recompute per group.
    pub(crate) fn ensure_distances(&mut self) {
        let limits = self.config.neighbor_limits();
        for group in &mut self.groups {
            if group.layer_type == LayerType::Wells && group.computed.is_none() {
                group.computed = Some(compute_group_distances(
                    group.data(),
                    limits,
                    self.limit_to_marked,
                ));
            }
        }
    }

    // ── Marking ──────────────────────────────────────────────────────────

    /// Rows inside a completed selection rectangle, using the scales from
    /// the most recent draw. Empty before the first draw.
    pub fn rectangle_selection(&self, rect: &SelectionRect) -> Vec<RowRef> {
        let Some((x_scale, y_scale)) = self.last_scales else {
            return Vec::new();
        };
        hit_test_rect(
            &self.groups,
            &x_scale,
            &y_scale,
            self.last_offset,
            rect,
            self.config.marking_permissions(),
            self.formation_hit_rule,
        )
    }

    /// Apply a completed selection rectangle as a marking operation:
    /// Ctrl toggles, plain replaces, an empty result clears the marking.
    pub fn apply_rectangle_selection(&mut self, rect: &SelectionRect) {
        if !self.config.marking_enabled {
            return;
        }
        let rows = self.rectangle_selection(rect);
        if rows.is_empty() {
            self.clear_marking();
            return;
        }
        let mode = if rect.ctrl_key {
            MarkMode::Toggle
        } else {
            MarkMode::Replace
        };
        for row in rows {
            row.mark(mode);
        }
    }

    /// Clear the marking via the host callback, falling back to
    /// subtracting this panel's own marked rows.
    pub(crate) fn clear_marking(&mut self) {
        if self.actions.clear_all_marking.is_some() {
            self.actions.clear_all_marking();
            return;
        }
        for group in &self.groups {
            for point in group.data() {
                if point.row.is_marked() {
                    point.row.mark(MarkMode::Subtract);
                }
            }
        }
    }

    /// Click on a well marker: anchors the measuring stick when the tool is
    /// active, otherwise issues a marking command.
    pub(crate) fn point_click(&mut self, point_id: PointId, ctrl: bool) {
        let Some(point) = self
            .groups
            .get(point_id.0)
            .and_then(|g| g.data().get(point_id.1))
        else {
            return;
        };
        if self.measuring.is_active() {
            let (x, y) = (point.x, point.y);
            self.measuring.set_start(x, y);
        } else if self.config.marking_enabled {
            let mode = if ctrl {
                MarkMode::Toggle
            } else {
                MarkMode::Replace
            };
            point.row.mark(mode);
        }
    }

    /// Click on the plot background: removes an active measuring stick,
    /// otherwise clears the marking.
    pub(crate) fn background_click(&mut self) {
        if self.measuring.is_active() {
            self.measuring.deactivate();
        } else if self.config.marking_enabled {
            self.clear_marking();
        }
    }

    // ── UI ───────────────────────────────────────────────────────────────

    /// Render the toolbar and the plot into the given `Ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.toolbar_ui(ui);
        self.render_plot(ui);
    }

    fn toolbar_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Show Distances");
            let mut mode = self.distance_mode;
            egui::ComboBox::from_id_salt(self.id.with("distance_mode"))
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for candidate in DistanceMode::ALL {
                        ui.selectable_value(&mut mode, candidate, candidate.label());
                    }
                });
            if mode != self.distance_mode {
                self.set_distance_mode(mode);
            }

            let mut limit = self.limit_to_marked;
            if ui.checkbox(&mut limit, "Limit to Marked Rows").changed() {
                self.set_limit_to_marked(limit);
            }

            ui.separator();

            let active_mode = self.measuring.stick().map(|s| s.mode);
            let perp = ui
                .selectable_label(
                    active_mode == Some(MeasureMode::Perpendicular),
                    RichText::new(egui_phosphor::regular::RULER),
                )
                .on_hover_text("Measuring stick (straight)");
            if perp.clicked() {
                self.measuring.toggle(MeasureMode::Perpendicular);
            }
            let right_angle = ui
                .selectable_label(
                    active_mode == Some(MeasureMode::RightAngle),
                    RichText::new(egui_phosphor::regular::ANGLE),
                )
                .on_hover_text("Measuring stick (right angle)");
            if right_angle.clicked() {
                self.measuring.toggle(MeasureMode::RightAngle);
            }
        });
    }

    pub(crate) fn plot_id(&self) -> egui::Id {
        self.id.with("plot")
    }
}
