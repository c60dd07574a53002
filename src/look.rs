//! Colors and stroke styling for the diagram.

use egui::Color32;
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Fallback fill for points without a color-axis value. Kept as a global so
// embedding applications can retheme without touching every data point.
static DEFAULT_POINT_COLOR: Lazy<Mutex<Color32>> =
    Lazy::new(|| Mutex::new(Color32::from_rgb(0xFA, 0xA2, 0x64)));

/// The current fallback point/segment color.
pub fn default_point_color() -> Color32 {
    *DEFAULT_POINT_COLOR.lock().unwrap()
}

/// Override the fallback point/segment color (applied on the next redraw).
pub fn set_default_point_color(color: Color32) {
    *DEFAULT_POINT_COLOR.lock().unwrap() = color;
}

/// Stroke ring drawn around marked formation points.
pub const FORMATION_MARKED_RING: Color32 = Color32::LIGHT_GRAY;

/// Distance edges and their labels.
pub const DISTANCE_COLOR: Color32 = Color32::GRAY;
/// Measuring stick lines and labels.
pub const MEASURE_COLOR: Color32 = Color32::LIGHT_GREEN;

/// Parse the host's dash-array string ("4,2" style) into dash and gap
/// lengths. Empty or unparsable strings mean a solid stroke. A single
/// number is used for both the dash and the gap, matching SVG semantics.
pub fn dash_pattern(dash_array: &str) -> Option<(f32, f32)> {
    let mut parts = dash_array
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>().ok());
    let dash = parts.next().flatten()?;
    if !(dash > 0.0) {
        return None;
    }
    let gap = parts.next().flatten().filter(|g| *g > 0.0).unwrap_or(dash);
    Some((dash, gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_pattern_parses_length_and_gap() {
        assert_eq!(dash_pattern("4,2"), Some((4.0, 2.0)));
        assert_eq!(dash_pattern("3"), Some((3.0, 3.0)));
        assert_eq!(dash_pattern(""), None);
        assert_eq!(dash_pattern("solid"), None);
        assert_eq!(dash_pattern("0"), None);
    }
}
