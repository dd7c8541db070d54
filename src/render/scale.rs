/// Linear mapping from a data domain to a pixel range.
///
/// The Y range is stored inverted (`height` down to `0`) because the
/// screen origin is top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

/// Tick count the domains are nicened against.
const TICK_COUNT: usize = 10;

impl LinearScale {
    /// Scale for the X axis: domain `[min − 0.01·(min+max), max + 0.01·(min+max)]`
    /// mapped to `[0, width]`, with nicened endpoints.
    pub fn x_scale(values: &[f64], width: f32) -> Self {
        let (lo, hi) = padded_extent(values, 0.01);
        Self {
            d0: lo,
            d1: hi,
            r0: 0.0,
            r1: width,
        }
        .nice()
    }

    /// Scale for the Y axis: domain padded by `0.02·(min+max)` mapped to
    /// `[height, 0]`. The padding factor deliberately differs from the X
    /// axis.
    pub fn y_scale(values: &[f64], height: f32) -> Self {
        let (lo, hi) = padded_extent(values, 0.02);
        Self {
            d0: lo,
            d1: hi,
            r0: height,
            r1: 0.0,
        }
        .nice()
    }

    /// Round the domain endpoints outward to multiples of a 1/2/5-ladder
    /// tick step, for readable axis endpoints.
    pub fn nice(mut self) -> Self {
        let step = tick_step(self.d0, self.d1, TICK_COUNT);
        if step > 0.0 && step.is_finite() {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    /// Map a data value to its pixel position.
    pub fn apply(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        if span.abs() < f64::EPSILON {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (v - self.d0) / span;
        self.r0 + (t as f32) * (self.r1 - self.r0)
    }

    /// Major tick values across the (nicened) domain.
    pub fn ticks(&self) -> Vec<f64> {
        let step = tick_step(self.d0, self.d1, TICK_COUNT);
        if step <= 0.0 || !step.is_finite() {
            return Vec::new();
        }
        let start = (self.d0 / step).ceil() as i64;
        let end = (self.d1 / step).floor() as i64;
        (start..=end).map(|i| i as f64 * step).collect()
    }

    /// Blend two scales for the axis transition. Ranges are expected to
    /// match; domains are interpolated.
    pub fn lerp(a: &LinearScale, b: &LinearScale, t: f32) -> LinearScale {
        let t64 = t as f64;
        LinearScale {
            d0: a.d0 + (b.d0 - a.d0) * t64,
            d1: a.d1 + (b.d1 - a.d1) * t64,
            r0: a.r0 + (b.r0 - a.r0) * t,
            r1: a.r1 + (b.r1 - a.r1) * t,
        }
    }
}

/// Min/max over the finite values, padded by `factor · (min + max)` on
/// both sides. Falls back to `(0, 1)` when no finite values exist.
fn padded_extent(values: &[f64], factor: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = factor * (min + max);
    (min - pad, max + pad)
}

/// A round step size (1/2/5 ladder) yielding roughly `count` ticks.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let order = 10f64.powf(raw.log10().floor());
    let normalized = raw / order;
    if normalized <= 1.0 {
        order
    } else if normalized <= 2.0 {
        2.0 * order
    } else if normalized <= 5.0 {
        5.0 * order
    } else {
        10.0 * order
    }
}

/// Format a value for axis tick labels. Large magnitudes get thousands
/// grouping, small ones are trimmed of trailing zeros.
pub fn format_tick_value(val: f64) -> String {
    if !val.is_finite() {
        return String::new();
    }
    if val.abs() >= 10_000.0 {
        let negative = val < 0.0;
        let grouped = group_thousands(val.abs().round() as u64);
        if negative {
            format!("-{grouped}")
        } else {
            grouped
        }
    } else if val == 0.0 {
        "0".to_string()
    } else {
        let s = format!("{val:.4}");
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}

/// Insert `,` separators every three digits: 64222 -> "64,222".
pub fn group_thousands(mut n: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        let group = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_domain_covers_the_data_extent() {
        let values = [9.5, 12.0, 21.5, 13.8];
        let scale = LinearScale::x_scale(&values, 800.0);
        let (lo, hi) = scale.domain();
        assert!(lo <= 9.5, "domain low {lo} must not exceed data min");
        assert!(hi >= 21.5, "domain high {hi} must not undercut data max");
    }

    #[test]
    fn y_domain_covers_the_data_extent() {
        let values = [4.6, 14.9, 24.9];
        let scale = LinearScale::y_scale(&values, 600.0);
        let (lo, hi) = scale.domain();
        assert!(lo <= 4.6);
        assert!(hi >= 24.9);
    }

    #[test]
    fn nice_endpoints_land_on_step_multiples() {
        let values = [9.3, 21.7];
        let scale = LinearScale::x_scale(&values, 800.0);
        let (lo, hi) = scale.domain();
        let step = tick_step(lo, hi, TICK_COUNT);
        assert!(step > 0.0);
        assert!((lo / step - (lo / step).round()).abs() < 1e-9);
        assert!((hi / step - (hi / step).round()).abs() < 1e-9);
    }

    #[test]
    fn y_range_is_inverted() {
        let values = [0.0, 100.0];
        let scale = LinearScale::y_scale(&values, 600.0);
        // Larger data values sit higher on screen, i.e. at smaller y pixels.
        assert!(scale.apply(90.0) < scale.apply(10.0));
        assert_eq!(scale.range(), (600.0, 0.0));
    }

    #[test]
    fn ascending_data_maps_to_ascending_screen_x() {
        // Two records with poverty 10 and 20 under the default selection
        // render left-to-right in ascending order.
        let values = [10.0, 20.0];
        let scale = LinearScale::x_scale(&values, 800.0);
        assert!(scale.apply(10.0) < scale.apply(20.0));
    }

    #[test]
    fn ticks_fall_inside_the_domain() {
        let scale = LinearScale::x_scale(&[8.0, 23.0], 800.0);
        let (lo, hi) = scale.domain();
        let ticks = scale.ticks();
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t >= lo && *t <= hi);
        }
        // Ticks are strictly increasing.
        for w in ticks.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn recomputing_the_same_scale_is_identical() {
        let values = [10.0, 20.0, 15.5];
        let a = LinearScale::x_scale(&values, 640.0);
        let b = LinearScale::x_scale(&values, 640.0);
        assert_eq!(a, b);
    }

    #[test]
    fn lerp_blends_domains() {
        let a = LinearScale::x_scale(&[0.0, 10.0], 100.0);
        let b = LinearScale::x_scale(&[100.0, 200.0], 100.0);
        let mid = LinearScale::lerp(&a, &b, 0.5);
        let (lo_a, _) = a.domain();
        let (lo_b, _) = b.domain();
        let (lo_mid, _) = mid.domain();
        assert!((lo_mid - (lo_a + lo_b) / 2.0).abs() < 1e-9);
        assert_eq!(LinearScale::lerp(&a, &b, 0.0), a);
        assert_eq!(LinearScale::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn nan_values_are_ignored_for_the_extent() {
        let values = [f64::NAN, 10.0, 20.0, f64::NAN];
        let scale = LinearScale::x_scale(&values, 800.0);
        let (lo, hi) = scale.domain();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo <= 10.0 && hi >= 20.0);
    }

    #[test]
    fn empty_extent_falls_back_to_unit_domain() {
        let scale = LinearScale::x_scale(&[], 800.0);
        let (lo, hi) = scale.domain();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(hi > lo);
    }

    #[test]
    fn tick_labels_group_thousands() {
        assert_eq!(format_tick_value(64222.0), "64,222");
        assert_eq!(format_tick_value(1000000.0), "1,000,000");
        assert_eq!(format_tick_value(12.5), "12.5");
        assert_eq!(format_tick_value(0.0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
    }
}
