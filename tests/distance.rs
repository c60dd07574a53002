//! Distance engine behavior over hand-built well groups.

mod common;

use common::{point, well, TestRow};
use wellspacing::data::distance::compute_group_distances;
use wellspacing::{LayerType, NeighborLimits};

#[test]
fn keeps_nearest_forward_neighbors_per_source() {
    // Four wells on a line. With a perpendicular limit of 2 the leftmost
    // well keeps its two nearest forward neighbors only.
    let points = vec![
        well(0.0, 0.0),
        well(10.0, 0.0),
        well(20.0, 0.0),
        well(30.0, 0.0),
    ];
    let set = compute_group_distances(&points, NeighborLimits::default(), false);

    // Sources: 0 -> {10, 20}, 10 -> {20, 30}, 20 -> {30}. The rightmost
    // well sources nothing.
    assert_eq!(set.dh.len(), 5);
    let from_origin: Vec<f64> = set
        .dh
        .iter()
        .filter(|e| e.x1 == 0.0)
        .map(|e| e.dh)
        .collect();
    assert_eq!(from_origin, vec![10.0, 20.0]);

    // Horizontal and vertical limits default to 1: one edge per source.
    assert_eq!(set.dx.len(), 3);
    assert_eq!(set.dy.len(), 3);
}

#[test]
fn locations_alternate_within_a_source() {
    let points = vec![well(0.0, 0.0), well(10.0, 0.0), well(20.0, 0.0)];
    let limits = NeighborLimits {
        perpendicular: 2,
        horizontal: 1,
        vertical: 1,
    };
    let set = compute_group_distances(&points, limits, false);

    let from_origin: Vec<usize> = set
        .dh
        .iter()
        .filter(|e| e.x1 == 0.0)
        .map(|e| e.location)
        .collect();
    assert_eq!(from_origin, vec![0, 1]);

    // Limit 1 always renders on the same side.
    assert!(set.dx.iter().all(|e| e.location == 0));
}

#[test]
fn all_categories_rank_by_straight_line_distance() {
    // The far point is closer in x but much farther in dh; the horizontal
    // category must still prefer the straight-line nearest neighbor.
    let points = vec![well(0.0, 0.0), well(5.0, 100.0), well(6.0, 0.0)];
    let limits = NeighborLimits {
        perpendicular: 1,
        horizontal: 1,
        vertical: 1,
    };
    let set = compute_group_distances(&points, limits, false);

    let from_origin: Vec<&_> = set.dx.iter().filter(|e| e.x1 == 0.0).collect();
    assert_eq!(from_origin.len(), 1);
    assert_eq!(from_origin[0].x2, 6.0);
    assert_eq!(from_origin[0].dx, 6.0);
}

#[test]
fn edges_are_forward_only_and_never_duplicated() {
    let points = vec![well(0.0, 5.0), well(10.0, 2.0), well(20.0, 8.0)];
    let set = compute_group_distances(&points, NeighborLimits::default(), false);

    for edge in set.dh.iter().chain(&set.dx).chain(&set.dy) {
        assert!(edge.x2 >= edge.x1);
    }
    let mut pairs: Vec<(u64, u64)> = set
        .dh
        .iter()
        .map(|e| (e.x1.to_bits(), e.x2.to_bits()))
        .collect();
    let before = pairs.len();
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), before);
}

#[test]
fn limit_to_marked_skips_unmarked_points_both_ways() {
    let marked_a = TestRow::new(true);
    let marked_b = TestRow::new(true);
    let points = vec![
        point(0.0, 0.0, LayerType::Wells, marked_a),
        well(10.0, 0.0), // unmarked
        point(20.0, 0.0, LayerType::Wells, marked_b),
    ];
    let set = compute_group_distances(&points, NeighborLimits::default(), true);

    // The unmarked middle well neither sources nor receives edges.
    assert_eq!(set.dh.len(), 1);
    assert_eq!(set.dh[0].dh, 20.0);
    assert_eq!(set.dx.len(), 1);
    assert_eq!(set.dy.len(), 1);
}

#[test]
fn marked_only_filter_never_adds_edges() {
    let points = vec![
        point(0.0, 0.0, LayerType::Wells, TestRow::new(true)),
        well(8.0, 3.0),
        point(15.0, 1.0, LayerType::Wells, TestRow::new(true)),
        well(30.0, 6.0),
    ];
    let unfiltered = compute_group_distances(&points, NeighborLimits::default(), false);
    let filtered = compute_group_distances(&points, NeighborLimits::default(), true);

    assert!(filtered.dh.len() <= unfiltered.dh.len());
    assert!(filtered.dx.len() <= unfiltered.dx.len());
    assert!(filtered.dy.len() <= unfiltered.dy.len());
}

#[test]
fn single_well_yields_no_edges() {
    let set = compute_group_distances(&[well(3.0, 4.0)], NeighborLimits::default(), false);
    assert!(set.dh.is_empty());
    assert!(set.dx.is_empty());
    assert!(set.dy.is_empty());
}

#[test]
fn vertical_and_horizontal_deltas_are_signed() {
    let points = vec![well(0.0, 10.0), well(5.0, 2.0)];
    let set = compute_group_distances(&points, NeighborLimits::default(), false);
    assert_eq!(set.dy[0].dy, -8.0);
    assert_eq!(set.dx[0].dx, 5.0);
    assert!((set.dh[0].dh - (25.0_f64 + 64.0).sqrt()).abs() < 1e-12);
}
