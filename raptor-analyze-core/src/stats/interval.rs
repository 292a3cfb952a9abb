use super::StatsError;

/// Centered window of sorted samples used for the trimmed ("mean interval") statistics.
///
/// The window width is kept in tenths of the sample count, so 55% becomes
/// 6 tenths. Rounding is half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanInterval {
    tenths: u32,
}

impl MeanInterval {
    /// Largest accepted width, the whole sample set.
    pub const MAX_TENTHS: u32 = 10;

    /// Build an interval from a percentage.
    ///
    /// Returns `Ok(None)` for 0%, meaning no trimming at all. Percentages that
    /// round above 100% are rejected.
    pub fn from_percent(percent: f64) -> Result<Option<Self>, StatsError> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(StatsError::Configuration(format!(
                "Mean interval must be a percentage between 0 and 100, got {}",
                percent
            )));
        }
        if percent == 0.0 {
            return Ok(None);
        }

        let tenths = (percent / 10.0).round();
        if tenths > f64::from(Self::MAX_TENTHS) {
            return Err(StatsError::Configuration(
                "Mean interval specified is greater than 100%".to_string(),
            ));
        }

        Ok(Some(Self {
            tenths: tenths as u32,
        }))
    }

    /// The window width as a fraction of the sample set, one decimal place.
    pub fn fraction(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Number of samples retained out of `total`.
    pub fn keep_count(&self, total: usize) -> usize {
        self.tenths as usize * total / Self::MAX_TENTHS as usize
    }

    /// Sort the samples and keep the centered window.
    ///
    /// When an odd number of samples is dropped, the extra one comes off the
    /// high end.
    pub fn trim(&self, samples: &[f64]) -> Vec<f64> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let keep = self.keep_count(sorted.len());
        let left = (sorted.len() - keep) / 2;
        sorted[left..left + keep].to_vec()
    }
}
