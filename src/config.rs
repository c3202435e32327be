use crate::{
    error::{MiningError, Result},
    itemsets::Strategy,
};

/// Thresholds and strategy for one mining run.
///
/// Low support thresholds make the candidate count grow combinatorially for
/// both strategies. Nothing bounds the search; pick `min_support` with the
/// catalog size in mind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    pub strategy: Strategy,
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64, strategy: Strategy) -> Result<Self> {
        let config = MiningConfig {
            min_support,
            min_confidence,
            strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects thresholds outside `(0, 1]` (support) and `[0, 1]` (confidence).
    /// NaN fails both range checks.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::InvalidMinSupport(self.min_support));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::InvalidMinConfidence(self.min_confidence));
        }
        Ok(())
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            min_support: 0.2,
            min_confidence: 0.5,
            strategy: Strategy::Apriori,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(MiningConfig::new(1.0, 0.0, Strategy::Apriori).is_ok());
        assert!(MiningConfig::new(0.01, 1.0, Strategy::Eclat).is_ok());
        assert!(MiningConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_support_out_of_range() {
        for bad in [0.0, -0.2, 1.1, f64::NAN] {
            let err = MiningConfig::new(bad, 0.5, Strategy::Apriori).unwrap_err();
            assert!(matches!(err, MiningError::InvalidMinSupport(_)));
        }
    }

    #[test]
    fn rejects_confidence_out_of_range() {
        for bad in [-0.01, 1.5, f64::NAN] {
            let err = MiningConfig::new(0.5, bad, Strategy::Eclat).unwrap_err();
            assert!(matches!(err, MiningError::InvalidMinConfidence(_)));
        }
    }
}
