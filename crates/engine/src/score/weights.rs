#![forbid(unsafe_code)]

/// Relative importance of the three score terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Weight of the inverted mean lap time.
    pub pace: f64,
    /// Weight of the inverted lap time standard deviation.
    pub consistency: f64,
    /// Weight of the inverted fastest lap.
    pub peak: f64,
}

impl Weights {
    /// The fixed weighting every prediction uses.
    pub const STANDARD: Self = Self {
        pace: 0.4,
        consistency: 0.3,
        peak: 0.3,
    };

    pub fn total(&self) -> f64 {
        self.pace + self.consistency + self.peak
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_weights_sum_to_one() {
        assert!((Weights::STANDARD.total() - 1.0).abs() < 1e-12);
    }
}
