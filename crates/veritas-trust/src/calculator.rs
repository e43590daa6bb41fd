//! TrustScoreCalculator: combine four factors into a graded composite.
//!
//! ```text
//! composite = w_base · base + w_fresh · freshness + w_rel · reliability + w_cons · consensus
//! ```
//!
//! Every factor is on a 0–100 scale and the composite is clamped to [0, 100].
//! Low trust is a score, not an error: problems surface as warnings.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use veritas_core::config::{DecayConfig, TrustConfig, VeritasConfig};
use veritas_core::errors::ConfigError;
use veritas_core::models::{
    ConsensusResult, DataPoint, ScoringModel, TrustFactors, TrustScore, TrustWarning, TruthWitness,
    WarningKind,
};
use veritas_core::traits::ReliabilitySource;
use veritas_decay::DecayModel;

/// Computes trust scores. Side-effect free; never touches the registry.
#[derive(Debug, Clone)]
pub struct TrustScoreCalculator {
    trust: TrustConfig,
    decay: DecayModel,
}

impl TrustScoreCalculator {
    /// Fails when weights don't sum to 1.0, a weight is negative, or grade
    /// thresholds are not strictly decreasing within [0, 100].
    pub fn new(trust: TrustConfig, decay: DecayConfig) -> Result<Self, ConfigError> {
        trust.validate()?;
        Ok(Self {
            trust,
            decay: DecayModel::new(decay)?,
        })
    }

    pub fn from_config(config: &VeritasConfig) -> Result<Self, ConfigError> {
        Self::new(config.trust.clone(), config.decay)
    }

    pub fn trust_config(&self) -> &TrustConfig {
        &self.trust
    }

    pub fn decay_model(&self) -> &DecayModel {
        &self.decay
    }

    /// Score `data_point` as of `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use veritas_core::config::{DecayConfig, TrustConfig};
    /// use veritas_core::models::{DataPoint, SourceAuthority, TrustGrade, TruthWitness, WarningKind};
    /// use veritas_trust::TrustScoreCalculator;
    ///
    /// let calc = TrustScoreCalculator::new(TrustConfig::default(), DecayConfig::default()).unwrap();
    /// let now = Utc::now();
    /// let dp = DataPoint::new(1850.0.into(), "usd", "oracle-1", now, "price tick");
    /// let witness = TruthWitness::new(SourceAuthority::Onchain, now);
    ///
    /// let score = calc.score(&dp, &witness, 100.0, None, now);
    /// // base 95, fresh 100, reliability 100, consensus falls back to base.
    /// assert!((score.composite_score - 97.75).abs() < 1e-9);
    /// assert_eq!(score.grade, TrustGrade::Excellent);
    /// assert!(score.has_warning(WarningKind::NoConsensus));
    /// ```
    #[instrument(skip_all, fields(data_point_id = %data_point.id, source_id = %data_point.source_id))]
    pub fn score(
        &self,
        data_point: &DataPoint,
        witness: &TruthWitness,
        source_reliability: f64,
        consensus: Option<&ConsensusResult>,
        now: DateTime<Utc>,
    ) -> TrustScore {
        let mut warnings = Vec::new();

        let raw_base = data_point
            .reported_confidence
            .unwrap_or_else(|| witness.source_authority.default_confidence());
        let base_confidence = sanitize("base_confidence", raw_base, &mut warnings);

        if witness.is_clock_skewed(now) {
            warnings.push(TrustWarning::new(
                WarningKind::ClockSkew,
                format!(
                    "witness timestamp {} is in the future; truth age treated as 0",
                    witness.witnessed_at.to_rfc3339()
                ),
            ));
        }
        let truth_age_seconds = witness.truth_age_seconds(now);
        let freshness_score = self.decay.freshness_score(truth_age_seconds);

        let source_reliability = sanitize("source_reliability", source_reliability, &mut warnings);

        let consensus_score = match consensus {
            Some(result) => {
                warnings.extend(result.warnings.iter().cloned());
                sanitize("consensus_score", result.consensus_score, &mut warnings)
            }
            None => {
                warnings.push(TrustWarning::new(
                    WarningKind::NoConsensus,
                    "no corroborating claims; consensus assumed equal to base confidence",
                ));
                base_confidence
            }
        };

        let factors = TrustFactors {
            base_confidence,
            freshness_score,
            source_reliability,
            consensus_score,
        };
        let composite_score = factors.composite(&self.trust.weights);
        let grade = self.trust.grade_thresholds.grade_for(composite_score);

        let fair = self.trust.grade_thresholds.fair;
        for (name, value) in factors.named() {
            if value < fair {
                warnings.push(TrustWarning::new(
                    WarningKind::LowFactor,
                    format!("{name} is {value:.1}, below the fair threshold of {fair}"),
                ));
            }
        }

        debug!(composite_score, grade = %grade, warnings = warnings.len(), "trust scored");

        let decay = self.decay.config();
        TrustScore {
            data_point_id: data_point.id.clone(),
            source_id: data_point.source_id.clone(),
            base_confidence,
            freshness_score,
            source_reliability,
            consensus_score,
            composite_score,
            grade,
            warnings,
            truth_age_seconds,
            evaluated_at: now,
            model: ScoringModel {
                weights: self.trust.weights,
                decay_policy: decay.policy,
                half_life_seconds: decay.half_life_seconds,
                grace_period_seconds: decay.grace_period_seconds,
                decay_floor: decay.floor,
                fair_threshold: fair,
            },
        }
    }

    /// Score with reliability looked up from `registry`. Adds a
    /// `sparse_history` warning when the source has too little track record.
    pub fn score_with_registry<R>(
        &self,
        data_point: &DataPoint,
        witness: &TruthWitness,
        registry: &R,
        consensus: Option<&ConsensusResult>,
        now: DateTime<Utc>,
    ) -> TrustScore
    where
        R: ReliabilitySource + ?Sized,
    {
        let reliability = registry.reliability_of(&data_point.source_id);
        let mut score = self.score(data_point, witness, reliability, consensus, now);
        if registry.is_sparse(&data_point.source_id) {
            score.warnings.push(TrustWarning::new(
                WarningKind::SparseHistory,
                format!(
                    "source '{}' has too few recorded outcomes; reliability is the neutral default",
                    data_point.source_id
                ),
            ));
        }
        score
    }
}

/// Clamp a 0–100 input, recording a warning when it had to change.
fn sanitize(name: &str, value: f64, warnings: &mut Vec<TrustWarning>) -> f64 {
    if !value.is_finite() {
        warnings.push(TrustWarning::new(
            WarningKind::ClampedInput,
            format!("{name} was not a finite number; treated as 0"),
        ));
        return 0.0;
    }
    if !(0.0..=100.0).contains(&value) {
        let clamped = value.clamp(0.0, 100.0);
        warnings.push(TrustWarning::new(
            WarningKind::ClampedInput,
            format!("{name} {value} clamped to {clamped}"),
        ));
        return clamped;
    }
    value
}
