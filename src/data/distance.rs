//! Nearest-neighbor distance computation for well groups.
//!
//! For every well (taken in x order) the engine measures the straight-line
//! distance to each well further along the x axis, then keeps the nearest
//! few per category. The three categories (perpendicular, horizontal,
//! vertical) differ only in how they are rendered and how many neighbors
//! they keep; all of them rank candidates by the straight-line distance
//! `dh`. Edges never connect points from different groups.

use crate::data::points::DataPoint;
use crate::host::RowRef;

/// Per-category neighbor limits. Each limit is the maximum number of edges
/// kept per point-as-source in that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborLimits {
    pub perpendicular: usize,
    pub horizontal: usize,
    pub vertical: usize,
}

impl Default for NeighborLimits {
    fn default() -> Self {
        Self {
            perpendicular: 2,
            horizontal: 1,
            vertical: 1,
        }
    }
}

/// One kept distance edge between two wells of the same group.
///
/// `location` alternates 0/1 along a source point's kept edges and only
/// picks which side boundary lines and labels render on; it carries no
/// identity.
#[derive(Clone)]
pub struct DistanceEdge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub dx: f64,
    pub dy: f64,
    pub dh: f64,
    pub r1: f64,
    pub r2: f64,
    pub location: usize,
    pub row1: RowRef,
    pub row2: RowRef,
}

/// The kept edges of one group, one list per distance category.
#[derive(Default, Clone)]
pub struct DistanceSet {
    /// Perpendicular (straight-line) edges.
    pub dh: Vec<DistanceEdge>,
    /// Horizontal-only edges.
    pub dx: Vec<DistanceEdge>,
    /// Vertical-only edges.
    pub dy: Vec<DistanceEdge>,
}

/// Compute the kept neighbor edges for one well group.
///
/// When `limit_to_marked` is set, unmarked points neither source nor receive
/// edges. A point with no remaining forward neighbors contributes nothing.
/// This is a full recompute; callers cache the result per group and
/// invalidate on config or data changes.
pub fn compute_group_distances(
    points: &[DataPoint],
    limits: NeighborLimits,
    limit_to_marked: bool,
) -> DistanceSet {
    let mut sorted: Vec<&DataPoint> = points.iter().collect();
    // Stable sort: x ties keep their original row order, so results are
    // deterministic for identical input.
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let mut computed = DistanceSet::default();

    for (current_idx, current) in sorted.iter().enumerate() {
        if current_idx + 1 == sorted.len() {
            break;
        }
        if limit_to_marked && !current.row.is_marked() {
            continue;
        }

        let mut candidates: Vec<DistanceEdge> = Vec::new();
        for next in &sorted[current_idx + 1..] {
            if limit_to_marked && !next.row.is_marked() {
                continue;
            }
            let dx = next.x - current.x;
            let dy = next.y - current.y;
            let dh = (dx * dx + dy * dy).sqrt();
            candidates.push(DistanceEdge {
                x1: current.x,
                y1: current.y,
                x2: next.x,
                y2: next.y,
                dx,
                dy,
                dh,
                r1: current.radius(),
                r2: next.radius(),
                location: 0,
                row1: current.row.clone(),
                row2: next.row.clone(),
            });
        }

        reduce(&mut candidates, limits.perpendicular, &mut computed.dh);
        reduce(&mut candidates, limits.horizontal, &mut computed.dx);
        reduce(&mut candidates, limits.vertical, &mut computed.dy);
    }

    computed
}

/// Stable-sort candidates by `dh`, keep the first `limit`, tag alternating
/// locations, and append to the category output.
fn reduce(candidates: &mut [DistanceEdge], limit: usize, out: &mut Vec<DistanceEdge>) {
    if limit == 0 {
        return;
    }
    candidates.sort_by(|a, b| a.dh.partial_cmp(&b.dh).unwrap_or(std::cmp::Ordering::Equal));
    for (idx, edge) in candidates.iter().take(limit).enumerate() {
        let mut kept = edge.clone();
        kept.location = idx % limit;
        out.push(kept);
    }
}
