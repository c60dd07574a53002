//! Plot domain calculation: data extents, zoom cropping, half-tick padding.

use crate::data::points::GroupItem;
use crate::data::zoom::ZoomRange;
use crate::geometry::LinearScale;

/// Sentinel extents used when there is no data at all. Callers detect this
/// via [`Domain::is_empty`] and suppress rendering.
pub const DOMAIN_EMPTY_MIN: f64 = 9_007_199_254_740_991.0;
pub const DOMAIN_EMPTY_MAX: f64 = -9_007_199_254_740_991.0;

/// Computed x/y plot domains, `[min, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Domain {
    /// True when no point contributed to the extents.
    pub fn is_empty(&self) -> bool {
        self.x[0] > self.x[1] || self.y[0] > self.y[1]
    }
}

/// Compute the plot domains for one trellis panel.
///
/// Extents are taken over every point in every group (wells and formations
/// together), floored/ceiled to integers. The zoom range then crops each
/// axis as a fraction of its span, and finally each axis is widened by half
/// the first tick interval of a linear scale over the cropped domain so
/// markers with radius stay inside the plot area. Degenerate domains (one
/// point, zero span) get zero padding instead of NaN.
pub fn calculate_domains(
    groups: &[GroupItem],
    width: f64,
    height: f64,
    zoom: ZoomRange,
) -> Domain {
    let mut x_domain = [DOMAIN_EMPTY_MIN, DOMAIN_EMPTY_MAX];
    let mut y_domain = [DOMAIN_EMPTY_MIN, DOMAIN_EMPTY_MAX];

    for group in groups {
        for point in group.data() {
            x_domain[0] = x_domain[0].min(point.x.floor());
            x_domain[1] = x_domain[1].max(point.x.ceil());
            y_domain[0] = y_domain[0].min(point.y.floor());
            y_domain[1] = y_domain[1].max(point.y.ceil());
        }
    }

    let domain = Domain {
        x: x_domain,
        y: y_domain,
    };
    if domain.is_empty() {
        return domain;
    }

    let x_domain = apply_zoom(x_domain, zoom.x.range_from, zoom.x.range_to);
    let y_domain = apply_zoom(y_domain, zoom.y.range_from, zoom.y.range_to);

    Domain {
        x: apply_half_tick_padding(x_domain, [0.0, width]),
        y: apply_half_tick_padding(y_domain, [height, 0.0]),
    }
}

/// Crop a domain to the normalized zoom window, as a fraction of span from
/// each end. The full window leaves the domain untouched bit-for-bit.
fn apply_zoom(domain: [f64; 2], range_from: f64, range_to: f64) -> [f64; 2] {
    if range_from <= 0.0 && range_to >= 1.0 {
        return domain;
    }
    let span = domain[1] - domain[0];
    [
        domain[0] + span * range_from,
        domain[1] - span * (1.0 - range_to),
    ]
}

/// Widen the domain by half the first tick interval of a linear scale over
/// it. The tick list is ascending, so the delta is negative; adding it to
/// the lower bound and subtracting it from the upper widens both ends.
fn apply_half_tick_padding(domain: [f64; 2], range: [f64; 2]) -> [f64; 2] {
    let scale = LinearScale::new(domain, range);
    let ticks = scale.ticks();
    if ticks.len() < 2 {
        return domain;
    }
    let delta = (ticks[0] - ticks[1]) / 2.0;
    if !delta.is_finite() {
        return domain;
    }
    [domain[0] + delta, domain[1] - delta]
}
