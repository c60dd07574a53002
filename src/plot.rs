//! Plot rendering for [`WellSpacingDiagram`].
//!
//! `egui_plot` supplies the axes, grid and bounds handling; everything with
//! pixel-exact offset rules (well markers, formation segments, distance
//! edges and labels, the measuring stick) is drawn with a painter clipped
//! to the plot frame, which doubles as the zoom mask. Distance boundary
//! nudges and label offsets are screen-pixel quantities, so they are
//! applied after projection, never in data space.

use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use egui_plot::Plot;

use crate::data::distance::DistanceEdge;
use crate::data::domain::{calculate_domains, Domain};
use crate::data::points::LayerType;
use crate::diagram::{PointId, WellSpacingDiagram};
use crate::geometry::{screen_to_plot, LinearScale, PlotOffset};
use crate::look;
use crate::measure::{MeasureEnd, MeasureMode};

const LABEL_FONT: f32 = 11.0;
/// Extra slop around a marker for hover/click hit testing.
const POINT_HIT_SLOP: f64 = 2.0;

/// Pixel-space projection of the current draw: plot-local scales plus the
/// frame's screen offset.
struct FrameProjection {
    x: LinearScale,
    y: LinearScale,
    origin: Pos2,
}

impl FrameProjection {
    fn pos(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(
            self.origin.x + self.x.scale(x) as f32,
            self.origin.y + self.y.scale(y) as f32,
        )
    }
}

impl WellSpacingDiagram {
    pub(crate) fn render_plot(&mut self, ui: &mut egui::Ui) {
        self.ensure_distances();

        let size = ui.available_size();
        let domain = calculate_domains(&self.groups, size.x as f64, size.y as f64, self.zoom);
        if domain.is_empty() {
            // Nothing to render; also drop stale selection scales.
            self.last_scales = None;
            self.hover_point = None;
            return;
        }

        let resp = Plot::new(self.plot_id())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .show_grid([false, self.config.show_grid_y])
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(domain.x[0]..=domain.x[1]);
                plot_ui.set_plot_bounds_y(domain.y[0]..=domain.y[1]);
            });

        let frame = *resp.transform.frame();
        let proj = FrameProjection {
            x: LinearScale::new(domain.x, [0.0, frame.width() as f64]),
            y: LinearScale::new(domain.y, [frame.height() as f64, 0.0]),
            origin: frame.min,
        };

        // Keep the pixel mapping for rectangle selection between frames.
        self.last_scales = Some((proj.x, proj.y));
        self.last_offset = PlotOffset {
            left: frame.min.x as f64,
            top: frame.min.y as f64,
        };

        self.handle_pointer(ui, &resp.response, &proj);

        let painter = ui.painter().with_clip_rect(frame);
        self.draw_formations(&painter, &proj, &domain, frame);
        self.draw_distance_edges(&painter, &proj);
        self.draw_wells(&painter, &proj);
        self.draw_distance_labels(&painter, &proj);
        self.draw_measuring_stick(&painter, &proj, &resp.response);
    }

    // ── Interaction ──────────────────────────────────────────────────────

    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response, proj: &FrameProjection) {
        let hovered = response.hover_pos().and_then(|pos| self.point_at(pos, proj));

        if self.measuring.is_active() {
            // Snap the live end to hovered wells; no tooltip while the
            // stick is up, it would sit under the cursor.
            let snap = hovered.and_then(|id| {
                let point = &self.groups[id.0].data()[id.1];
                (point.layer_type == LayerType::Wells).then(|| MeasureEnd::Snapped {
                    x: point.x,
                    y: point.y,
                })
            });
            self.measuring.set_end(snap);
            if self.hover_point.take().is_some() {
                self.actions.hide_tooltip();
            }
        } else if hovered != self.hover_point {
            match hovered {
                Some(id) => {
                    if self.config.show_tooltips {
                        let row = self.groups[id.0].data()[id.1].row.clone();
                        self.actions.show_tooltip(&row);
                    }
                }
                None => self.actions.hide_tooltip(),
            }
            self.hover_point = hovered;
        }

        if response.clicked() {
            let ctrl = ui.input(|i| i.modifiers.ctrl || i.modifiers.command);
            match hovered {
                // Only well markers take point clicks; formation points
                // fall through to the background behavior.
                Some(id) if self.groups[id.0].layer_type == LayerType::Wells => {
                    self.point_click(id, ctrl)
                }
                _ => self.background_click(),
            }
        }
    }

    /// Topmost point whose marker contains the screen position.
    fn point_at(&self, pos: Pos2, proj: &FrameProjection) -> Option<PointId> {
        let mut hit: Option<PointId> = None;
        for (gi, group) in self.groups.iter().enumerate() {
            for (pi, point) in group.data().iter().enumerate() {
                let center = proj.pos(point.x, point.y);
                let r = point.radius() + POINT_HIT_SLOP;
                if (center - pos).length() as f64 <= r {
                    hit = Some((gi, pi));
                }
            }
        }
        hit
    }

    // ── Formations ───────────────────────────────────────────────────────

    fn draw_formations(
        &self,
        painter: &egui::Painter,
        proj: &FrameProjection,
        domain: &Domain,
        frame: Rect,
    ) {
        let dash = look::dash_pattern(&self.config.stroke_dash_array);
        let width = self.config.stroke_width;

        for group in self
            .groups
            .iter()
            .filter(|g| g.layer_type == LayerType::Formation)
        {
            let data = group.data();

            for pair in data.windows(2) {
                let (start, end) = (&pair[0], &pair[1]);
                // Segments whose endpoints disagree on marking take the
                // unmarked endpoint's color.
                let mut color = start.color;
                if start.row.is_marked() != end.row.is_marked() && !end.row.is_marked() {
                    color = end.color;
                }
                let color = color.unwrap_or_else(look::default_point_color);
                let stroke = Stroke::new(width, color);
                let points = [proj.pos(start.x, start.y), proj.pos(end.x, end.y)];
                match dash {
                    Some((len, gap)) => {
                        painter.add(egui::Shape::dashed_line(&points, stroke, len, gap));
                    }
                    None => {
                        painter.line_segment(points, stroke);
                    }
                }
            }

            // Unmarked formation points stay invisible (hover targets
            // only); marked ones get a filled circle with a light ring.
            for point in data {
                if point.row.is_marked() {
                    let center = proj.pos(point.x, point.y);
                    let fill = point.color.unwrap_or_else(look::default_point_color);
                    painter.circle_filled(center, point.radius() as f32, fill);
                    painter.circle_stroke(
                        center,
                        point.radius() as f32,
                        Stroke::new(1.0, look::FORMATION_MARKED_RING),
                    );
                }
            }

            if self.config.show_formation_labels {
                self.draw_formation_label(painter, proj, domain, frame, group.data());
            }
        }
    }

    /// Label a formation at the right edge of the plot, next to its last
    /// point still inside the x domain. Skipped entirely when the layer is
    /// zoomed out of view vertically.
    fn draw_formation_label(
        &self,
        painter: &egui::Painter,
        proj: &FrameProjection,
        domain: &Domain,
        frame: Rect,
        data: &[crate::data::points::DataPoint],
    ) {
        let mut label_point = None;
        let mut y_visible = 0;
        for point in data {
            if point.y > domain.y[0] && point.y < domain.y[1] {
                y_visible += 1;
            }
            if point.x < domain.x[0] {
                continue;
            } else if point.x < domain.x[1] {
                label_point = Some(point);
            } else {
                break;
            }
        }
        let (Some(point), true) = (label_point, y_visible > 0) else {
            return;
        };
        let Some(name) = point.name.as_deref() else {
            return;
        };
        // Keep the label inside the plot when its point sits near a domain
        // edge: nudge up from the bottom, down from the top, otherwise hang
        // it just below the point.
        let bottom = proj.pos(point.x, domain.y[0]).y;
        let top = proj.pos(point.x, domain.y[1]).y;
        let py = if point.y - 15.0 < domain.y[0] {
            bottom - 15.0
        } else if point.y + 15.0 > domain.y[1] {
            top + 15.0
        } else {
            proj.pos(point.x, point.y).y + 15.0
        };
        let pos = Pos2::new(frame.right() - 2.0, py);
        let color = point.color.unwrap_or_else(look::default_point_color);
        painter.text(
            pos,
            Align2::RIGHT_CENTER,
            name,
            FontId::proportional(LABEL_FONT),
            color,
        );
    }

    // ── Wells ────────────────────────────────────────────────────────────

    fn draw_wells(&self, painter: &egui::Painter, proj: &FrameProjection) {
        for group in self
            .groups
            .iter()
            .filter(|g| g.layer_type == LayerType::Wells)
        {
            for point in group.data() {
                let color = point.color.unwrap_or_else(look::default_point_color);
                painter.circle_filled(proj.pos(point.x, point.y), point.radius() as f32, color);
            }
        }
    }

    // ── Distance edges ───────────────────────────────────────────────────

    fn draw_distance_edges(&self, painter: &egui::Painter, proj: &FrameProjection) {
        let stroke = Stroke::new(1.0, look::DISTANCE_COLOR);
        for group in &self.groups {
            let Some(computed) = &group.computed else {
                continue;
            };
            if self.distance_mode.shows_perpendicular() {
                for edge in &computed.dh {
                    painter.line_segment(
                        [proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2)],
                        stroke,
                    );
                }
            }
            if self.distance_mode.shows_vertical() {
                for edge in &computed.dy {
                    let (p1, p2) = (proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2));
                    // Alternate which endpoint carries the vertical run.
                    let gx = if edge.location == 0 { p1.x } else { p2.x };
                    let gy = if edge.location == 0 { p2.y } else { p1.y };
                    painter.line_segment(
                        [Pos2::new(gx, p1.y), Pos2::new(gx, p2.y)],
                        stroke,
                    );
                    painter.line_segment(
                        [Pos2::new(p1.x, gy), Pos2::new(p2.x, gy)],
                        stroke,
                    );
                }
            }
            if self.distance_mode.shows_horizontal() {
                for edge in &computed.dx {
                    let (p1, p2) = (proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2));
                    let gx = if edge.location == 0 { p1.x } else { p2.x };
                    let gy = if edge.location == 0 { p2.y } else { p1.y };
                    painter.line_segment(
                        [Pos2::new(p1.x, gy), Pos2::new(p2.x, gy)],
                        stroke,
                    );
                    painter.line_segment(
                        [Pos2::new(gx, p2.y), Pos2::new(gx, p1.y)],
                        stroke,
                    );
                }
            }
        }
    }

    /// Labels are drawn in a separate pass after the markers so they are
    /// never obscured by them.
    fn draw_distance_labels(&self, painter: &egui::Painter, proj: &FrameProjection) {
        for group in &self.groups {
            let Some(computed) = &group.computed else {
                continue;
            };
            if self.distance_mode.shows_perpendicular() {
                for edge in &computed.dh {
                    self.perpendicular_label(painter, proj, edge);
                }
            }
            if self.distance_mode.shows_vertical() {
                for edge in &computed.dy {
                    let (p1, p2) = (proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2));
                    let gx = if edge.location == 0 { p1.x } else { p2.x };
                    let mid_y = (p1.y + p2.y) / 2.0;
                    rotated_text(
                        painter,
                        Pos2::new(gx, mid_y),
                        -std::f32::consts::FRAC_PI_2,
                        format!("{}", edge.dy.round().abs()),
                        look::DISTANCE_COLOR,
                    );
                }
            }
            if self.distance_mode.shows_horizontal() {
                for edge in &computed.dx {
                    let (p1, p2) = (proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2));
                    let gy = if edge.location == 0 { p2.y } else { p1.y };
                    painter.text(
                        Pos2::new((p1.x + p2.x) / 2.0, gy + 3.0),
                        Align2::CENTER_TOP,
                        format!("{}", edge.dx.round().abs()),
                        FontId::proportional(LABEL_FONT),
                        look::DISTANCE_COLOR,
                    );
                }
            }
        }
    }

    fn perpendicular_label(
        &self,
        painter: &egui::Painter,
        proj: &FrameProjection,
        edge: &DistanceEdge,
    ) {
        let (p1, p2) = (proj.pos(edge.x1, edge.y1), proj.pos(edge.x2, edge.y2));
        let mid = Pos2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0 - 3.0);
        rotated_text(
            painter,
            mid,
            segment_angle(p1, p2),
            format!("{}", edge.dh.round()),
            look::DISTANCE_COLOR,
        );
    }

    // ── Measuring stick ──────────────────────────────────────────────────

    fn draw_measuring_stick(
        &self,
        painter: &egui::Painter,
        proj: &FrameProjection,
        response: &egui::Response,
    ) {
        let Some(stick) = self.measuring.stick() else {
            return;
        };
        let Some((sx, sy)) = stick.start else {
            // Nothing is drawn before the first anchor is placed.
            return;
        };

        // The live end: a snapped well, or the cursor inverse-projected
        // into data space through the axis scales.
        let (ex, ey) = match stick.end {
            Some(end) => end.xy(),
            None => {
                let Some(pos) = response.hover_pos() else {
                    return;
                };
                screen_to_plot(
                    &proj.x,
                    &proj.y,
                    PlotOffset {
                        left: proj.origin.x as f64,
                        top: proj.origin.y as f64,
                    },
                    pos.x as f64,
                    pos.y as f64,
                )
            }
        };

        let stroke = Stroke::new(1.5, look::MEASURE_COLOR);
        let start = proj.pos(sx, sy);
        let end = proj.pos(ex, ey);

        match stick.mode {
            MeasureMode::Perpendicular => {
                painter.line_segment([start, end], stroke);
                let distance = ((sx - ex).powi(2) + (sy - ey).powi(2)).sqrt().round();
                let mid = Pos2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 - 3.0);
                rotated_text(
                    painter,
                    mid,
                    segment_angle(start, end),
                    format!("{distance}"),
                    look::MEASURE_COLOR,
                );
            }
            MeasureMode::RightAngle => {
                // Vertical drop from the anchor, horizontal run to the end.
                let nudge = if ey < sy { 2.0 } else { -2.0 };
                painter.line_segment(
                    [start, Pos2::new(start.x, end.y + nudge)],
                    stroke,
                );
                painter.line_segment([Pos2::new(start.x, end.y), end], stroke);

                let distance_x = (ex - sx).abs().round();
                let distance_y = (ey - sy).abs().round();
                painter.text(
                    Pos2::new((start.x + end.x) / 2.0, end.y + 3.0),
                    Align2::CENTER_TOP,
                    format!("{distance_x}"),
                    FontId::proportional(LABEL_FONT),
                    look::MEASURE_COLOR,
                );
                rotated_text(
                    painter,
                    Pos2::new(start.x, (start.y + end.y) / 2.0),
                    -std::f32::consts::FRAC_PI_2,
                    format!("{distance_y}"),
                    look::MEASURE_COLOR,
                );
            }
        }
    }
}

/// Screen-space angle of a segment, kept within ±90° so labels never render
/// upside down.
fn segment_angle(p1: Pos2, p2: Pos2) -> f32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0.0 {
        std::f32::consts::FRAC_PI_2
    } else {
        (dy / dx).atan()
    }
}

/// Text centered on `pos`, rotated by `angle` radians.
fn rotated_text(painter: &egui::Painter, pos: Pos2, angle: f32, text: String, color: Color32) {
    let galley = painter.layout_no_wrap(text, FontId::proportional(LABEL_FONT), color);
    let offset: Vec2 = Rot2::from_angle(angle) * (galley.size() / 2.0);
    let mut shape = TextShape::new(pos - offset, galley, color);
    shape.angle = angle;
    painter.add(shape);
}
