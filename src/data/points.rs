//! Diagram data model: points grouped into named well / formation layers.

use egui::Color32;

use crate::data::distance::DistanceSet;
use crate::host::RowRef;

/// Default marker radius for a well point without an explicit size.
pub const WELL_POINT_DEFAULT_SIZE: f64 = 7.0;
/// Default marker radius for a formation point without an explicit size.
pub const FORMATION_POINT_DEFAULT_SIZE: f64 = 3.0;

/// Which layer a point belongs to. Wells get distance edges and round
/// markers; formations are rendered as connected line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Wells,
    Formation,
}

impl LayerType {
    /// Parse the host's layer-type axis value ("wells" / "formation").
    pub fn from_axis_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wells" => Some(LayerType::Wells),
            "formation" => Some(LayerType::Formation),
            _ => None,
        }
    }
}

/// One plotted data point, backed by a host-owned row.
#[derive(Clone)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Marker radius in pixels; `None` falls back to the layer default.
    pub size: Option<f64>,
    /// Fill color from the host's color axis; `None` falls back to the
    /// diagram default.
    pub color: Option<Color32>,
    /// Display name (used for formation labels).
    pub name: Option<String>,
    pub layer_type: LayerType,
    pub row: RowRef,
}

impl DataPoint {
    /// Effective marker radius, falling back to the layer default.
    pub fn radius(&self) -> f64 {
        self.size.unwrap_or(match self.layer_type {
            LayerType::Wells => WELL_POINT_DEFAULT_SIZE,
            LayerType::Formation => FORMATION_POINT_DEFAULT_SIZE,
        })
    }
}

/// An ordered point sequence sharing a (trellis, group) key and a layer
/// type. Well groups own a derived distance-edge cache; it is `None` until
/// computed and is invalidated explicitly whenever the neighbor limits, the
/// marked-only filter, or the group's own data change.
pub struct GroupItem {
    pub name: String,
    pub layer_type: LayerType,
    data: Vec<DataPoint>,
    pub computed: Option<DistanceSet>,
}

impl GroupItem {
    pub fn new(name: impl Into<String>, layer_type: LayerType, data: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            layer_type,
            data,
            computed: None,
        }
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Replace the group's points and drop the distance cache.
    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        self.data = data;
        self.invalidate();
    }

    /// Drop the distance cache; the next draw recomputes it.
    pub fn invalidate(&mut self) {
        self.computed = None;
    }
}
