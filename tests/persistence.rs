//! Property-string round trips and forgiving parsing.

use wellspacing::{AxisZoom, DiagramConfig, ZoomRange};

#[test]
fn config_round_trips_through_its_property_string() {
    let mut config = DiagramConfig::default();
    config.well_spacing_perpendicular_neighbor_limit = 3;
    config.show_grid_y = false;
    config.stroke_dash_array = "4,2".to_owned();

    let raw = config.to_property_string();
    let parsed = DiagramConfig::from_property_string(&raw);
    assert_eq!(parsed.well_spacing_perpendicular_neighbor_limit, 3);
    assert!(!parsed.show_grid_y);
    assert_eq!(parsed.stroke_dash_array, "4,2");
}

#[test]
fn malformed_config_strings_fall_back_to_defaults() {
    for raw in ["", "not json", "{\"well_spacing_"] {
        let parsed = DiagramConfig::from_property_string(raw);
        assert_eq!(parsed.well_spacing_perpendicular_neighbor_limit, 2);
        assert_eq!(parsed.row_limit, 500);
        assert!(parsed.marking_enabled);
    }
}

#[test]
fn partial_config_keeps_defaults_for_missing_fields() {
    let parsed =
        DiagramConfig::from_property_string(r#"{"well_spacing_vertical_neighbor_limit": 4}"#);
    assert_eq!(parsed.well_spacing_vertical_neighbor_limit, 4);
    assert_eq!(parsed.well_spacing_horizontal_neighbor_limit, 1);
    assert_eq!(parsed.max_trellis_count, 5);
}

#[test]
fn zero_neighbor_limits_are_clamped_to_one() {
    let parsed = DiagramConfig::from_property_string(
        r#"{"well_spacing_perpendicular_neighbor_limit": 0}"#,
    );
    assert_eq!(parsed.neighbor_limits().perpendicular, 1);
}

#[test]
fn zoom_round_trips_with_camel_case_field_names() {
    let zoom = ZoomRange {
        x: AxisZoom {
            range_from: 0.2,
            range_to: 0.6,
        },
        y: AxisZoom::default(),
    };
    let raw = zoom.to_property_string();
    assert!(raw.contains("rangeFrom"));
    assert!(raw.contains("rangeTo"));
    assert_eq!(ZoomRange::from_property_string(&raw), zoom);
}

#[test]
fn malformed_zoom_strings_mean_not_zoomed() {
    let parsed = ZoomRange::from_property_string("garbage");
    assert!(parsed.is_full());
}

#[test]
fn out_of_range_zoom_bounds_are_clamped_on_parse() {
    let parsed = ZoomRange::from_property_string(
        r#"{"x":{"rangeFrom":-0.5,"rangeTo":1.5},"y":{"rangeFrom":0.8,"rangeTo":0.2}}"#,
    );
    assert!(parsed.x.is_full());
    // Crossed bounds collapse to the full range.
    assert!(parsed.y.is_full());
}
