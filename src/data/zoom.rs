//! Zoom range state, as produced by the host's zoom-slider collaborator.

use serde::{Deserialize, Serialize};

/// Normalized zoom window over one axis: both bounds in `[0, 1]` with
/// `range_from < range_to`. The full range `(0, 1)` means "not zoomed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisZoom {
    #[serde(rename = "rangeFrom")]
    pub range_from: f64,
    #[serde(rename = "rangeTo")]
    pub range_to: f64,
}

impl Default for AxisZoom {
    fn default() -> Self {
        Self {
            range_from: 0.0,
            range_to: 1.0,
        }
    }
}

impl AxisZoom {
    /// Clamp into `[0, 1]` and restore ordering; collapses to the full
    /// range when the bounds cross completely.
    pub fn clamped(self) -> Self {
        let from = self.range_from.clamp(0.0, 1.0);
        let to = self.range_to.clamp(0.0, 1.0);
        if from < to {
            Self {
                range_from: from,
                range_to: to,
            }
        } else {
            Self::default()
        }
    }

    pub fn is_full(&self) -> bool {
        self.range_from <= 0.0 && self.range_to >= 1.0
    }
}

/// Zoom window for both axes. Created full, mutated by the host's slider,
/// persisted by the host, and consumed by the domain calculator on every
/// redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub x: AxisZoom,
    pub y: AxisZoom,
}

impl ZoomRange {
    pub fn is_full(&self) -> bool {
        self.x.is_full() && self.y.is_full()
    }
}
