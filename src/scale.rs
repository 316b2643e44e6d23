use crate::error::ChartError;

/// Default tick count used when "nicing" a domain or drawing an axis.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// A linear mapping from a data domain to a pixel range.
///
/// The mapping extrapolates for values outside the domain (no clamping), and
/// the range may be inverted (`range.0 > range.1`) for vertical axes where
/// pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale from an explicit domain and pixel range.
    ///
    /// The range must be finite with a non-zero span. The domain may be
    /// degenerate (`min == max`); see [`LinearScale::map`] for the policy.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ChartError> {
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ChartError::DegenerateRange(range.0, range.1));
        }
        Ok(LinearScale { domain, range })
    }

    /// Create a scale whose domain is the extent (min, max) of `values`.
    pub fn fit(values: &[f64], range: (f64, f64)) -> Result<Self, ChartError> {
        Self::new(extent(values)?, range)
    }

    /// Round the domain bounds outward to multiples of a human-friendly tick
    /// step (1, 2 or 5 times a power of ten) sized for roughly `tick_count`
    /// ticks. A degenerate domain is left untouched.
    pub fn nice(mut self, tick_count: usize) -> Self {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return self;
        }
        let step = tick_step(d1 - d0, tick_count);
        self.domain = ((d0 / step).floor() * step, (d1 / step).ceil() * step);
        self
    }

    /// Map a domain value to a pixel coordinate by linear interpolation.
    ///
    /// If the domain is degenerate (`min == max`) every input maps to
    /// `range.0`.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Tick positions inside the domain at nice increments.
    ///
    /// Returns just the lower bound for a degenerate domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }
        let step = tick_step(d1 - d0, count);
        let start = (d0 / step).ceil() * step;
        let slack = step * 1e-6;
        let mut ticks = Vec::new();
        let mut i = 0u32;
        loop {
            let t = start + step * f64::from(i);
            if t > d1 + slack {
                break;
            }
            ticks.push(t);
            i += 1;
        }
        ticks
    }

    /// The increment between ticks for a requested tick count (used for
    /// formatting tick labels).
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return 1.0;
        }
        tick_step(d1 - d0, count)
    }
}

/// Compute the (min, max) extent of a value slice.
///
/// Fails on an empty slice or on any non-finite value; if all values are
/// equal the extent is degenerate (`min == max`).
pub fn extent(values: &[f64]) -> Result<(f64, f64), ChartError> {
    if values.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::InvalidValue { index, value });
        }
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

/// Round `span / count` to the nearest 1/2/5 multiple of a power of ten.
fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    factor * base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_interpolates() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 600.0)).unwrap();
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(50.0), 300.0);
        assert_eq!(scale.map(100.0), 600.0);
    }

    #[test]
    fn test_map_extrapolates_outside_domain() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 600.0)).unwrap();
        assert_eq!(scale.map(150.0), 900.0);
        assert_eq!(scale.map(-50.0), -300.0);
    }

    #[test]
    fn test_map_inverted_range() {
        // Vertical axis: pixel y grows downward, so the range is flipped.
        let scale = LinearScale::new((0.0, 10.0), (280.0, 0.0)).unwrap();
        assert_eq!(scale.map(0.0), 280.0);
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.map(5.0), 140.0);
    }

    #[test]
    fn test_map_stays_within_range_for_domain_values() {
        let scale = LinearScale::new((3.2, 9.7), (0.0, 540.0)).unwrap();
        for i in 0..=100 {
            let v = 3.2 + (9.7 - 3.2) * i as f64 / 100.0;
            let px = scale.map(v);
            assert!((0.0..=540.0).contains(&px), "map({}) = {}", v, px);
        }
    }

    #[test]
    fn test_degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (100.0, 400.0)).unwrap();
        assert_eq!(scale.map(5.0), 100.0);
        assert_eq!(scale.map(-3.0), 100.0);
        assert_eq!(scale.map(1e9), 100.0);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        assert_eq!(
            LinearScale::new((0.0, 1.0), (250.0, 250.0)),
            Err(ChartError::DegenerateRange(250.0, 250.0))
        );
        assert!(LinearScale::new((0.0, 1.0), (0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_fit_uses_extent() {
        let scale = LinearScale::fit(&[3500.0, 3000.0, 4000.0], (0.0, 540.0)).unwrap();
        assert_eq!(scale.domain(), (3000.0, 4000.0));
    }

    #[test]
    fn test_fit_empty_dataset() {
        assert_eq!(
            LinearScale::fit(&[], (0.0, 540.0)),
            Err(ChartError::EmptyDataset)
        );
    }

    #[test]
    fn test_fit_non_finite_value() {
        let err = LinearScale::fit(&[1.0, f64::NAN], (0.0, 540.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue { index: 1, .. }));
    }

    #[test]
    fn test_nice_rounds_outward() {
        let scale = LinearScale::new((3.2, 9.7), (0.0, 540.0))
            .unwrap()
            .nice(DEFAULT_TICK_COUNT);
        // Step for span 6.5 and 5 ticks is 1.0.
        assert_eq!(scale.domain(), (3.0, 10.0));
    }

    #[test]
    fn test_nice_picks_half_decade_steps() {
        let scale = LinearScale::new((12.0, 87.0), (0.0, 540.0)).unwrap().nice(5);
        // Raw step 15 rounds to 20.
        assert_eq!(scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn test_ticks_cover_domain() {
        let scale = LinearScale::new((0.0, 8.0), (280.0, 0.0)).unwrap();
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_ticks_degenerate_domain() {
        let scale = LinearScale::new((4.0, 4.0), (0.0, 540.0)).unwrap();
        assert_eq!(scale.ticks(5), vec![4.0]);
    }

    #[test]
    fn test_extent_all_equal() {
        assert_eq!(extent(&[2.5, 2.5, 2.5]).unwrap(), (2.5, 2.5));
    }
}
