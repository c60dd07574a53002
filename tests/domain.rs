//! Domain calculation: extents, zoom cropping, half-tick padding.

mod common;

use common::{formation_group, formation_point, well, wells_group};
use wellspacing::data::domain::calculate_domains;
use wellspacing::{AxisZoom, ZoomRange};

const W: f64 = 800.0;
const H: f64 = 600.0;

#[test]
fn no_data_yields_empty_domain() {
    let domain = calculate_domains(&[], W, H, ZoomRange::default());
    assert!(domain.is_empty());

    let domain = calculate_domains(
        &[wells_group("g", vec![])],
        W,
        H,
        ZoomRange::default(),
    );
    assert!(domain.is_empty());
}

#[test]
fn full_zoom_pads_extents_by_half_a_tick() {
    let groups = vec![wells_group("g", vec![well(0.0, 0.0), well(100.0, 100.0)])];
    let domain = calculate_domains(&groups, W, H, ZoomRange::default());

    // Extents [0, 100], tick step 10, so both axes widen by 5.
    assert_eq!(domain.x, [-5.0, 105.0]);
    assert_eq!(domain.y, [-5.0, 105.0]);
}

#[test]
fn zoom_crops_as_fraction_of_span_before_padding() {
    let groups = vec![wells_group("g", vec![well(0.0, 0.0), well(100.0, 100.0)])];
    let zoom = ZoomRange {
        x: AxisZoom {
            range_from: 0.25,
            range_to: 0.75,
        },
        y: AxisZoom::default(),
    };
    let domain = calculate_domains(&groups, W, H, zoom);

    // x crops to [25, 75], tick step 5, padded to [22.5, 77.5]. y stays
    // untouched by the zoom and keeps its full-range padding.
    assert_eq!(domain.x, [22.5, 77.5]);
    assert_eq!(domain.y, [-5.0, 105.0]);
}

#[test]
fn extents_are_floored_and_ceiled() {
    let groups = vec![wells_group("g", vec![well(0.4, 0.6), well(99.2, 99.1)])];
    let domain = calculate_domains(&groups, W, H, ZoomRange::default());

    // Raw extents become [0, 100] before padding.
    assert_eq!(domain.x, [-5.0, 105.0]);
    assert_eq!(domain.y, [-5.0, 105.0]);
}

#[test]
fn formations_contribute_to_the_extents() {
    let groups = vec![
        wells_group("wells", vec![well(10.0, 10.0)]),
        formation_group(
            "top",
            vec![formation_point(0.0, 50.0), formation_point(100.0, 50.0)],
        ),
    ];
    let domain = calculate_domains(&groups, W, H, ZoomRange::default());
    assert!(domain.x[0] < 10.0 && domain.x[1] > 10.0);
    assert!(domain.y[1] > 50.0);
}

#[test]
fn single_integer_point_gets_a_degenerate_unpadded_domain() {
    let groups = vec![wells_group("g", vec![well(5.0, 7.0)])];
    let domain = calculate_domains(&groups, W, H, ZoomRange::default());

    // Zero span: no ticks, no padding, still finite and non-empty.
    assert!(!domain.is_empty());
    assert_eq!(domain.x, [5.0, 5.0]);
    assert_eq!(domain.y, [7.0, 7.0]);
}

#[test]
fn fractional_single_point_spans_one_unit() {
    let groups = vec![wells_group("g", vec![well(5.3, 7.8)])];
    let domain = calculate_domains(&groups, W, H, ZoomRange::default());

    assert!(!domain.is_empty());
    assert!(domain.x[0] <= 5.0 && domain.x[1] >= 6.0);
    assert!(domain.y[0] <= 7.0 && domain.y[1] >= 8.0);
}

#[test]
fn crossed_zoom_bounds_clamp_back_to_full() {
    let crossed = AxisZoom {
        range_from: 0.9,
        range_to: 0.1,
    }
    .clamped();
    assert_eq!(crossed, AxisZoom::default());
    assert!(crossed.is_full());
}
