//! Coordinate plumbing: linear axis scales and the two screen transforms.
//!
//! There are two distinct transform paths through the diagram and they must
//! not be conflated:
//! - data -> plot pixels -> screen pixels, used for rectangle hit testing;
//! - screen pixels -> plot pixels -> data, used for the measuring stick's
//!   live mouse follow (goes through [`LinearScale::invert`]).

/// A linear map from a data domain to a pixel range.
///
/// The range may be descending (the y axis maps data-min to the pixel
/// bottom). `ticks` mirrors the usual 1/2/5-stepped "nice ticks" so the
/// half-tick domain padding has a stable tick interval to work from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Project a data value into pixel space.
    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Project a pixel value back into data space.
    pub fn invert(&self, pixel: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }

    /// Ascending tick values over the domain, roughly `TICK_COUNT` of them,
    /// stepped by 1, 2 or 5 times a power of ten.
    ///
    /// Degenerate domains (zero or non-finite span) yield an empty vector;
    /// callers treat that as "no padding".
    pub fn ticks(&self) -> Vec<f64> {
        const TICK_COUNT: f64 = 10.0;

        let (start, stop) = if self.domain[0] <= self.domain[1] {
            (self.domain[0], self.domain[1])
        } else {
            (self.domain[1], self.domain[0])
        };
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Vec::new();
        }

        let step = tick_increment(start, stop, TICK_COUNT);
        if !(step > 0.0) || !step.is_finite() {
            return Vec::new();
        }

        let first = (start / step).ceil();
        let last = (stop / step).floor();
        let n = (last - first) as i64;
        if n < 0 {
            return Vec::new();
        }
        (0..=n).map(|i| (first + i as f64) * step).collect()
    }
}

/// Nice tick interval for `count` ticks over `[start, stop]`.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(1.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Pixel offset of the plot area inside the surrounding panel (the axis
/// margins in the rendered output).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotOffset {
    pub left: f64,
    pub top: f64,
}

/// Forward path: data coordinates through the scales into screen pixels.
pub fn plot_to_screen(
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    offset: PlotOffset,
    x: f64,
    y: f64,
) -> (f64, f64) {
    (x_scale.scale(x) + offset.left, y_scale.scale(y) + offset.top)
}

/// Inverse path: screen pixels back into data coordinates via the axis
/// scales. This is the measuring-stick follow path, not the hit-test path.
pub fn screen_to_plot(
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    offset: PlotOffset,
    screen_x: f64,
    screen_y: f64,
) -> (f64, f64) {
    (
        x_scale.invert(screen_x - offset.left),
        y_scale.invert(screen_y - offset.top),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_and_invert_round_trip() {
        let s = LinearScale::new([0.0, 100.0], [0.0, 500.0]);
        assert_eq!(s.scale(50.0), 250.0);
        assert_eq!(s.invert(250.0), 50.0);
    }

    #[test]
    fn descending_range_maps_y_axis() {
        // y axis: data-min at the pixel bottom
        let s = LinearScale::new([0.0, 10.0], [300.0, 0.0]);
        assert_eq!(s.scale(0.0), 300.0);
        assert_eq!(s.scale(10.0), 0.0);
        assert_eq!(s.invert(150.0), 5.0);
    }

    #[test]
    fn zero_span_domain_does_not_divide_by_zero() {
        let s = LinearScale::new([5.0, 5.0], [0.0, 100.0]);
        assert!(s.scale(5.0).is_finite());
        assert!(s.invert(0.0).is_finite());
    }

    #[test]
    fn ticks_are_nicely_stepped() {
        let s = LinearScale::new([0.0, 100.0], [0.0, 500.0]);
        let t = s.ticks();
        assert!(t.len() >= 5);
        assert_eq!(t[1] - t[0], 10.0);
        assert_eq!(t[0], 0.0);
    }

    #[test]
    fn ticks_empty_for_degenerate_domain() {
        let s = LinearScale::new([5.0, 5.0], [0.0, 100.0]);
        assert!(s.ticks().is_empty());
    }

    #[test]
    fn transform_paths_are_inverse_of_each_other() {
        let xs = LinearScale::new([0.0, 100.0], [0.0, 400.0]);
        let ys = LinearScale::new([0.0, 50.0], [200.0, 0.0]);
        let off = PlotOffset { left: 60.0, top: 10.0 };
        let (sx, sy) = plot_to_screen(&xs, &ys, off, 25.0, 40.0);
        let (x, y) = screen_to_plot(&xs, &ys, off, sx, sy);
        assert!((x - 25.0).abs() < 1e-9);
        assert!((y - 40.0).abs() < 1e-9);
    }
}
