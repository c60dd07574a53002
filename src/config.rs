//! Host-persisted diagram configuration.
//!
//! The host stores this as a JSON property string (see
//! [`crate::persistence`]); missing fields fall back to their defaults so
//! older stored configurations keep working.

use serde::{Deserialize, Serialize};

use crate::data::distance::NeighborLimits;
use crate::selection::MarkingPermissions;

/// Which precomputed distance categories are visible. Switching this is a
/// pure visibility change; nothing is recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    #[default]
    None,
    Horizontal,
    Perpendicular,
    Vertical,
    VerticalHorizontal,
}

impl DistanceMode {
    /// All selector entries in toolbar order.
    pub const ALL: [DistanceMode; 5] = [
        DistanceMode::None,
        DistanceMode::Horizontal,
        DistanceMode::Perpendicular,
        DistanceMode::Vertical,
        DistanceMode::VerticalHorizontal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DistanceMode::None => "None",
            DistanceMode::Horizontal => "Horizontal",
            DistanceMode::Perpendicular => "Perpendicular",
            DistanceMode::Vertical => "Vertical",
            DistanceMode::VerticalHorizontal => "Vertical + Horizontal",
        }
    }

    pub fn shows_perpendicular(&self) -> bool {
        matches!(self, DistanceMode::Perpendicular)
    }

    pub fn shows_horizontal(&self) -> bool {
        matches!(
            self,
            DistanceMode::Horizontal | DistanceMode::VerticalHorizontal
        )
    }

    pub fn shows_vertical(&self) -> bool {
        matches!(
            self,
            DistanceMode::Vertical | DistanceMode::VerticalHorizontal
        )
    }
}

/// Diagram configuration as persisted by the host property store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Neighbor edges kept per well for straight-line distances.
    pub well_spacing_perpendicular_neighbor_limit: usize,
    /// Neighbor edges kept per well for horizontal distances.
    pub well_spacing_horizontal_neighbor_limit: usize,
    /// Neighbor edges kept per well for vertical distances.
    pub well_spacing_vertical_neighbor_limit: usize,

    pub allow_well_marking: bool,
    pub allow_formation_marking: bool,
    /// Interactive marking as a whole; off turns clicks and rectangle
    /// selection into no-ops.
    pub marking_enabled: bool,

    pub show_grid_y: bool,
    pub show_formation_labels: bool,
    pub show_tooltips: bool,

    /// Formation segment stroke width in pixels.
    pub stroke_width: f32,
    /// Formation segment dash pattern, "length,gap" form; empty = solid.
    pub stroke_dash_array: String,

    /// Host-enforced row cap, surfaced here for the host's validation layer.
    pub row_limit: usize,
    /// Host-enforced trellis panel cap.
    pub max_trellis_count: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            well_spacing_perpendicular_neighbor_limit: 2,
            well_spacing_horizontal_neighbor_limit: 1,
            well_spacing_vertical_neighbor_limit: 1,
            allow_well_marking: true,
            allow_formation_marking: true,
            marking_enabled: true,
            show_grid_y: true,
            show_formation_labels: true,
            show_tooltips: true,
            stroke_width: 1.5,
            stroke_dash_array: String::new(),
            row_limit: 500,
            max_trellis_count: 5,
        }
    }
}

impl DiagramConfig {
    pub fn neighbor_limits(&self) -> NeighborLimits {
        NeighborLimits {
            perpendicular: self.well_spacing_perpendicular_neighbor_limit.max(1),
            horizontal: self.well_spacing_horizontal_neighbor_limit.max(1),
            vertical: self.well_spacing_vertical_neighbor_limit.max(1),
        }
    }

    pub fn marking_permissions(&self) -> MarkingPermissions {
        MarkingPermissions {
            allow_well_marking: self.allow_well_marking,
            allow_formation_marking: self.allow_formation_marking,
        }
    }
}
