use ndarray::ArrayView2;

use crate::shared::constants::CLARITY_THRESHOLD;

/// Open intensity interval `(low, high)` accepted as skin.
///
/// The band is skewed per bucket: darker pixels are usually hair or
/// shadow, so most buckets tolerate less above the sample than below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkinColorRange {
    pub low: f64,
    pub high: f64,
}

impl SkinColorRange {
    pub fn for_intensity(avg: f64) -> Self {
        let (below, above) = if avg < 100.0 {
            (35.0, 50.0)
        } else if avg <= 130.0 {
            (30.0, 30.0)
        } else if avg <= 160.0 {
            (40.0, 40.0)
        } else if avg < 180.0 {
            (50.0, 50.0)
        } else if avg < 210.0 {
            (50.0, 30.0)
        } else if avg < 230.0 {
            (40.0, 20.0)
        } else {
            (30.0, 15.0)
        };
        Self {
            low: avg - below,
            high: avg + above,
        }
    }

    /// Strictly inside the band; boundary values count as an edge.
    pub fn contains(&self, intensity: u8) -> bool {
        let v = intensity as f64;
        v > self.low && v < self.high
    }
}

/// Decides whether a sampled region is bare skin or occluded (hair, shadow).
#[derive(Clone, Copy, Debug)]
pub struct SkinToneProfiler {
    clarity_threshold: f64,
}

impl SkinToneProfiler {
    pub fn new(clarity_threshold: f64) -> Self {
        Self { clarity_threshold }
    }

    pub fn color_range_for(&self, avg: f64) -> SkinColorRange {
        SkinColorRange::for_intensity(avg)
    }

    /// Fraction of `region` inside the skin band around `avg`; `None` when
    /// the region has no pixels.
    pub fn skin_fraction(&self, region: ArrayView2<'_, u8>, avg: f64) -> Option<f64> {
        if region.is_empty() {
            return None;
        }
        let range = self.color_range_for(avg);
        let inside = region.iter().filter(|&&v| range.contains(v)).count();
        Some(inside as f64 / region.len() as f64)
    }

    /// True when at least the clarity threshold of `region` is skin.
    /// Empty regions are never clear.
    pub fn is_region_clear(&self, region: ArrayView2<'_, u8>, avg: f64) -> bool {
        self.skin_fraction(region, avg)
            .is_some_and(|f| f >= self.clarity_threshold)
    }
}

impl Default for SkinToneProfiler {
    fn default() -> Self {
        Self::new(CLARITY_THRESHOLD)
    }
}

/// Mean intensity of `region`, or `None` when it has no pixels.
pub fn mean_intensity(region: ArrayView2<'_, u8>) -> Option<f64> {
    if region.is_empty() {
        return None;
    }
    let sum: u64 = region.iter().map(|&v| v as u64).sum();
    Some(sum as f64 / region.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;
    use rstest::rstest;

    // ── color ranges ────────────────────────────────────────────────

    #[rstest]
    #[case::dark(80.0, 45.0, 130.0)]
    #[case::dark_boundary(100.0, 70.0, 130.0)]
    #[case::somewhat_dark(130.0, 100.0, 160.0)]
    #[case::normal_dark(150.0, 110.0, 190.0)]
    #[case::normal_dark_boundary(160.0, 120.0, 200.0)]
    #[case::normal(170.0, 120.0, 220.0)]
    #[case::normal_light(200.0, 150.0, 230.0)]
    #[case::light(220.0, 180.0, 240.0)]
    #[case::very_light(240.0, 210.0, 255.0)]
    fn test_bucket_table(#[case] avg: f64, #[case] low: f64, #[case] high: f64) {
        let r = SkinColorRange::for_intensity(avg);
        assert_relative_eq!(r.low, low);
        assert_relative_eq!(r.high, high);
    }

    #[test]
    fn test_band_always_surrounds_sample() {
        for avg in 0..=255 {
            let avg = avg as f64;
            let r = SkinColorRange::for_intensity(avg);
            assert!(r.low < avg && avg < r.high, "avg {avg} outside {r:?}");
        }
    }

    #[test]
    fn test_bucket_bounds_non_decreasing() {
        let samples = [99.0, 130.0, 160.0, 179.0, 209.0, 229.0, 250.0];
        let ranges: Vec<_> = samples.iter().map(|&a| SkinColorRange::for_intensity(a)).collect();
        for w in ranges.windows(2) {
            assert!(w[1].low >= w[0].low);
            assert!(w[1].high >= w[0].high);
        }
    }

    #[test]
    fn test_contains_is_strict() {
        let r = SkinColorRange::for_intensity(150.0);
        assert!(!r.contains(110));
        assert!(r.contains(111));
        assert!(r.contains(189));
        assert!(!r.contains(190));
    }

    // ── clarity ─────────────────────────────────────────────────────

    #[test]
    fn test_uniform_region_matching_sample_is_clear() {
        let region = Array2::from_elem((10, 10), 150u8);
        assert!(SkinToneProfiler::default().is_region_clear(region.view(), 150.0));
    }

    #[test]
    fn test_region_outside_band_is_not_clear() {
        let region = Array2::from_elem((10, 10), 20u8);
        assert!(!SkinToneProfiler::default().is_region_clear(region.view(), 150.0));
    }

    #[test]
    fn test_empty_region_is_not_clear() {
        let region = Array2::<u8>::zeros((0, 12));
        let profiler = SkinToneProfiler::default();
        assert!(!profiler.is_region_clear(region.view(), 150.0));
        assert_eq!(profiler.skin_fraction(region.view(), 150.0), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 17 of 20 pixels (85%) are skin
        let mut region = Array2::from_elem((4, 5), 150u8);
        for c in 0..3 {
            region[[0, c]] = 10;
        }
        assert!(SkinToneProfiler::default().is_region_clear(region.view(), 150.0));
        region[[0, 3]] = 10;
        assert!(!SkinToneProfiler::default().is_region_clear(region.view(), 150.0));
    }

    // ── mean ────────────────────────────────────────────────────────

    #[test]
    fn test_mean_intensity() {
        let region = Array2::from_shape_vec((2, 2), vec![10u8, 20, 30, 40]).unwrap();
        assert_relative_eq!(mean_intensity(region.view()).unwrap(), 25.0);
    }

    #[test]
    fn test_mean_intensity_empty() {
        let region = Array2::<u8>::zeros((3, 0));
        assert!(mean_intensity(region.view()).is_none());
    }
}
