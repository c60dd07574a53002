//! Standalone demo: a synthetic cross-section with two formation tops and a
//! row of wells, fed from an in-memory row store.
//!
//! Run with `cargo run --example demo_wells`.

use std::cell::Cell;
use std::rc::Rc;

use eframe::egui::Color32;
use wellspacing::{
    DataPoint, DistanceMode, GroupItem, LayerType, MarkMode, RowHandle, RowRef,
    WellSpacingDiagram,
};

struct DemoRow {
    marked: Cell<bool>,
}

impl DemoRow {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            marked: Cell::new(false),
        })
    }
}

impl RowHandle for DemoRow {
    fn is_marked(&self) -> bool {
        self.marked.get()
    }

    fn mark(&self, mode: MarkMode) {
        match mode {
            MarkMode::Replace => self.marked.set(true),
            MarkMode::Toggle => self.marked.set(!self.marked.get()),
            MarkMode::Subtract => self.marked.set(false),
        }
    }
}

fn point(x: f64, y: f64, layer_type: LayerType, color: Color32, name: &str) -> DataPoint {
    let row: RowRef = DemoRow::new();
    DataPoint {
        x,
        y,
        size: None,
        color: Some(color),
        name: Some(name.to_owned()),
        layer_type,
        row,
    }
}

fn main() -> eframe::Result<()> {
    let well_color = Color32::from_rgb(0x4C, 0x8C, 0xBF);
    let wells: Vec<DataPoint> = [
        (120.0, -2450.0),
        (340.0, -2480.0),
        (610.0, -2440.0),
        (900.0, -2510.0),
        (1150.0, -2460.0),
        (1420.0, -2390.0),
        (1700.0, -2455.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (x, y))| point(x, y, LayerType::Wells, well_color, &format!("Well {}", i + 1)))
    .collect();

    let top = |x: f64, y: f64| {
        point(
            x,
            y,
            LayerType::Formation,
            Color32::from_rgb(0xB0, 0x8A, 0x5A),
            "Upper Shale",
        )
    };
    let base = |x: f64, y: f64| {
        point(
            x,
            y,
            LayerType::Formation,
            Color32::from_rgb(0x7A, 0x6A, 0x8A),
            "Lower Marker",
        )
    };

    let mut diagram = WellSpacingDiagram::new("demo_wells");
    diagram.set_groups(vec![
        GroupItem::new(
            "Upper Shale",
            LayerType::Formation,
            vec![
                top(0.0, -2350.0),
                top(500.0, -2370.0),
                top(1000.0, -2340.0),
                top(1800.0, -2380.0),
            ],
        ),
        GroupItem::new(
            "Lower Marker",
            LayerType::Formation,
            vec![
                base(0.0, -2600.0),
                base(600.0, -2580.0),
                base(1200.0, -2620.0),
                base(1800.0, -2590.0),
            ],
        ),
        GroupItem::new("Wells", LayerType::Wells, wells),
    ]);
    diagram.set_distance_mode(DistanceMode::Perpendicular);

    wellspacing::run_diagram("Well Spacing Diagram", diagram)
}
