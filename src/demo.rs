//! Synthetic monitor data for the demo binary and fixtures.
//!
//! The generator is deterministic: a diurnal base curve, a Gaussian
//! afternoon bump, and a seeded sine wobble standing in for sensor noise.

use crate::models::{MarkerShape, Rgb8, Sample, Series};

/// Hourly readings for one synthetic monitor, hours 0 through 24
/// inclusive. `seed` decorrelates the wobble between monitors.
pub fn mk_samples(seed: f64, peak_hour: f64, peak: f64, noise: f64) -> Vec<Sample> {
    (0..=24)
        .map(|h| {
            let h = h as f64;
            let base = (((h - 3.0) / 2.0).sin() + 1.0) * 18.0 + 12.0;
            let base = base.max(8.0);
            let bump = peak * (-0.5 * ((h - peak_hour) / 1.1).powi(2)).exp();
            let value = (base + bump + (h * 1.3 + seed).sin() * noise)
                .round()
                .min(260.0);
            Sample::new(h, value)
        })
        .collect()
}

/// The single-monitor chart's series.
pub fn single_series() -> Vec<Series> {
    vec![Series::new(
        "Downtown monitor",
        Rgb8::new(0x60, 0xa5, 0xfa),
        mk_samples(0.3, 15.0, 140.0, 6.0),
    )]
}

/// Four-station comparison set with distinct colors, dashes, and markers.
pub fn compare_series() -> Vec<Series> {
    vec![
        Series::new(
            "Schaefer & Joy (AG)",
            Rgb8::new(0x60, 0xa5, 0xfa),
            mk_samples(0.0, 14.0, 120.0, 7.0),
        ),
        Series::new(
            "Scotten & W Jefferson",
            Rgb8::new(0xf5, 0x9e, 0x0b),
            mk_samples(1.7, 16.0, 90.0, 9.0),
        )
        .with_marker(MarkerShape::Square)
        .with_dash(vec![12, 8]),
        Series::new(
            "Schoolcraft / Dossin",
            Rgb8::new(0x34, 0xd3, 0x99),
            mk_samples(3.1, 13.0, 70.0, 8.0),
        )
        .with_marker(MarkerShape::Triangle)
        .with_dash(vec![3, 9]),
        Series::new(
            "A & W Daycare",
            Rgb8::new(0xe8, 0x79, 0xf9),
            mk_samples(4.6, 17.0, 105.0, 10.0),
        )
        .with_marker(MarkerShape::Diamond)
        .with_dash(vec![18, 8, 3, 8]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic_and_bounded() {
        let a = mk_samples(0.3, 15.0, 140.0, 6.0);
        let b = mk_samples(0.3, 15.0, 140.0, 6.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        for p in &a {
            assert!(p.value.is_finite());
            assert!(p.value <= 260.0);
            assert!(p.value > 0.0);
        }
    }

    #[test]
    fn compare_set_has_distinct_styling() {
        let set = compare_series();
        assert_eq!(set.len(), 4);
        let mut colors: Vec<_> = set.iter().map(|s| s.color.to_hex()).collect();
        colors.dedup();
        assert_eq!(colors.len(), 4);
        assert!(set.iter().all(|s| s.is_drawable()));
    }
}
