use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Scoring weights and tuning constants for the recommendation engine
///
/// The defaults reproduce the behavior observed in production: tag similarity
/// dominates at 0.6, trend and critic signals contribute 0.2 each. All call
/// sites share one configuration so tag search, personalized recommendations,
/// and catalog browse rank consistently.
#[derive(Debug, Deserialize, Clone)]
pub struct ScoringWeights {
    /// Weight of the tag-similarity component in the final score
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,

    /// Weight of the normalized trend component in the final score
    #[serde(default = "default_trend_weight")]
    pub trend_weight: f64,

    /// Weight of the critic-score component in the final score
    #[serde(default = "default_critic_weight")]
    pub critic_weight: f64,

    /// Weight assigned to each explicitly liked tag in the user vector.
    /// Tunable: likes carry a stronger intentional signal than inferred
    /// history, but the exact multiplier is a product decision.
    #[serde(default = "default_liked_tag_weight")]
    pub liked_tag_weight: f64,

    /// Divisor applied to log10(trend + 1) so realistic trend magnitudes
    /// land near [0, 1]. With 10.0, a trend signal of ~1M viewers maps
    /// to 0.6; calibrate per deployment if trend magnitudes shift.
    #[serde(default = "default_trend_log_divisor")]
    pub trend_log_divisor: f64,
}

fn default_tag_weight() -> f64 {
    0.6
}

fn default_trend_weight() -> f64 {
    0.2
}

fn default_critic_weight() -> f64 {
    0.2
}

fn default_liked_tag_weight() -> f64 {
    3.0
}

fn default_trend_log_divisor() -> f64 {
    10.0
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag_weight: default_tag_weight(),
            trend_weight: default_trend_weight(),
            critic_weight: default_critic_weight(),
            liked_tag_weight: default_liked_tag_weight(),
            trend_log_divisor: default_trend_log_divisor(),
        }
    }
}

impl ScoringWeights {
    /// Load configuration from `RECO_`-prefixed environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let weights = envy::prefixed("RECO_")
            .from_env::<ScoringWeights>()
            .map_err(|e| anyhow::anyhow!("Failed to load scoring config: {}", e))?;
        weights.validate()?;
        Ok(weights)
    }

    /// Rejects configurations that would silently distort the score scale
    ///
    /// Component weights must sum to 1.0 (within tolerance) so final scores
    /// stay comparable across deployments; the like weight and trend divisor
    /// must be positive.
    pub fn validate(&self) -> EngineResult<()> {
        let total = self.tag_weight + self.trend_weight + self.critic_weight;
        if (total - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidConfig(format!(
                "component weights must sum to 1.0, got {}",
                total
            )));
        }
        if self.liked_tag_weight <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "liked_tag_weight must be positive, got {}",
                self.liked_tag_weight
            )));
        }
        if self.trend_log_divisor <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "trend_log_divisor must be positive, got {}",
                self.trend_log_divisor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let weights = ScoringWeights::default();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.tag_weight, 0.6);
        assert_eq!(weights.trend_weight, 0.2);
        assert_eq!(weights.critic_weight, 0.2);
        assert_eq!(weights.liked_tag_weight, 3.0);
        assert_eq!(weights.trend_log_divisor, 10.0);
    }

    #[test]
    fn test_validate_rejects_unbalanced_weights() {
        let weights = ScoringWeights {
            tag_weight: 0.6,
            trend_weight: 0.3,
            critic_weight: 0.2,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_like_weight() {
        let weights = ScoringWeights {
            liked_tag_weight: 0.0,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_divisor() {
        let weights = ScoringWeights {
            trend_log_divisor: -5.0,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }
}
