//! ExplainabilityRenderer: trust score → audience-specific explanation.
//!
//! - beginner: one-sentence summary carrying only the composite percentage,
//!   plus at most four plain-language bullets with no figures
//! - intermediate: factor values, the assumptions behind them, and warnings
//! - expert: everything above plus the exact factor breakdown, model
//!   identifiers, uncertainty bounds and known limitations

use veritas_core::constants::{model_ids, MAX_BEGINNER_BULLETS, SCORE_MAX, SCORE_MIN};
use veritas_core::models::{
    Explanation, ExplanationDepth, FactorBreakdown, FactorContributions, ModelIdentifier,
    SupportingDatum, TrustScore, UncertaintyBounds, WarningKind,
};

use crate::phrases;
use crate::uncertainty::weighted_dispersion;

/// Stateless renderer. Never alters or recomputes the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplainabilityRenderer;

impl ExplainabilityRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `score` for the given audience.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use veritas_core::config::VeritasConfig;
    /// use veritas_core::models::{DataPoint, ExplanationDepth, SourceAuthority, TruthWitness};
    /// use veritas_explain::ExplainabilityRenderer;
    /// use veritas_trust::TrustScoreCalculator;
    ///
    /// let calc = TrustScoreCalculator::from_config(&VeritasConfig::default()).unwrap();
    /// let now = Utc::now();
    /// let dp = DataPoint::new(21.5.into(), "celsius", "probe-3", now, "rack sensor");
    /// let score = calc.score(&dp, &TruthWitness::new(SourceAuthority::Oracle, now), 90.0, None, now);
    ///
    /// let expert = ExplainabilityRenderer::new().render(&score, ExplanationDepth::Expert);
    /// assert_eq!(expert.factor_breakdown().unwrap().factors, score.factors());
    /// ```
    pub fn render(&self, score: &TrustScore, depth: ExplanationDepth) -> Explanation {
        match depth {
            ExplanationDepth::Beginner => self.beginner(score),
            ExplanationDepth::Intermediate => self.intermediate(score),
            ExplanationDepth::Expert => self.expert(score),
        }
    }

    fn beginner(&self, score: &TrustScore) -> Explanation {
        let percent = score.composite_score.clamp(SCORE_MIN, SCORE_MAX).round() as u32;
        let summary = format!("{}, with an overall trust rating of {percent}%.", phrases::grade_lead(score.grade));

        let mut bullets = vec![
            phrases::base_confidence(score.base_confidence).to_string(),
            phrases::freshness(score.freshness_score).to_string(),
            phrases::reliability(score.source_reliability).to_string(),
            phrases::consensus(score).to_string(),
        ];
        bullets.truncate(MAX_BEGINNER_BULLETS);

        Explanation {
            depth: ExplanationDepth::Beginner,
            summary,
            bullet_points: bullets,
            supporting_data: Vec::new(),
            assumptions: Vec::new(),
            warnings: Vec::new(),
            factor_breakdown: None,
            model_identifiers: Vec::new(),
            uncertainty: None,
            limitations: Vec::new(),
        }
    }

    fn intermediate(&self, score: &TrustScore) -> Explanation {
        let summary = format!(
            "Composite trust {:.1}/100, graded {}. Data was {:.0}s old when evaluated.",
            score.composite_score, score.grade, score.truth_age_seconds
        );

        let mut supporting_data: Vec<SupportingDatum> = score
            .factors()
            .named()
            .iter()
            .map(|(label, value)| SupportingDatum {
                label: (*label).to_string(),
                value: *value,
                unit: "score".to_string(),
            })
            .collect();
        supporting_data.push(SupportingDatum {
            label: "truth_age".to_string(),
            value: score.truth_age_seconds,
            unit: "seconds".to_string(),
        });

        Explanation {
            depth: ExplanationDepth::Intermediate,
            summary,
            bullet_points: Vec::new(),
            supporting_data,
            assumptions: assumptions(score),
            warnings: score.warnings.clone(),
            factor_breakdown: None,
            model_identifiers: Vec::new(),
            uncertainty: None,
            limitations: Vec::new(),
        }
    }

    fn expert(&self, score: &TrustScore) -> Explanation {
        let mut out = self.intermediate(score);
        out.depth = ExplanationDepth::Expert;

        let factors = score.factors();
        let weights = score.model.weights;
        out.factor_breakdown = Some(FactorBreakdown {
            factors,
            weights,
            contributions: FactorContributions {
                base_confidence: weights.base * factors.base_confidence,
                freshness_score: weights.freshness * factors.freshness_score,
                source_reliability: weights.reliability * factors.source_reliability,
                consensus_score: weights.consensus * factors.consensus_score,
            },
            composite_score: score.composite_score,
            grade: score.grade,
        });

        out.model_identifiers = vec![
            model_id("decay", score.model.decay_policy.model_id()),
            model_id("composite", model_ids::COMPOSITE),
            model_id("consensus", model_ids::CONSENSUS),
            model_id("reliability", model_ids::RELIABILITY),
            model_id("uncertainty", model_ids::UNCERTAINTY),
        ];

        let half_width = weighted_dispersion(&factors, &weights, score.composite_score);
        out.uncertainty = Some(UncertaintyBounds {
            lower: (score.composite_score - half_width).clamp(SCORE_MIN, SCORE_MAX),
            upper: (score.composite_score + half_width).clamp(SCORE_MIN, SCORE_MAX),
            half_width,
        });

        out.limitations = limitations(score);
        out
    }
}

fn model_id(component: &str, identifier: &str) -> ModelIdentifier {
    ModelIdentifier {
        component: component.to_string(),
        identifier: identifier.to_string(),
    }
}

fn assumptions(score: &TrustScore) -> Vec<String> {
    let m = &score.model;
    let mut out = vec![
        format!(
            "Freshness decays ({}) with a half-life of {:.0}s after a {:.0}s grace period, never below {:.0}%.",
            m.decay_policy,
            m.half_life_seconds,
            m.grace_period_seconds,
            m.decay_floor * 100.0
        ),
        "Base confidence is the source-reported confidence, or the default for its authority when none was reported.".to_string(),
        "Source reliability is the share of past claims later validated; sources with little history get a neutral default.".to_string(),
    ];
    if score.has_warning(WarningKind::NoConsensus) {
        out.push("No sibling claims were supplied, so consensus is assumed equal to base confidence.".to_string());
    }
    if score.has_warning(WarningKind::ClockSkew) {
        out.push("The witness timestamp was in the future and was treated as age zero.".to_string());
    }
    out
}

fn limitations(score: &TrustScore) -> Vec<String> {
    let mut out = vec![
        "The score describes the evaluation instant only; freshness keeps decaying afterwards.".to_string(),
        "Reliability counters are eventually consistent and may lag concurrent outcome reports.".to_string(),
        "Factors are combined linearly; interactions between them are not modelled.".to_string(),
    ];
    if score.has_warning(WarningKind::SparseHistory) {
        out.push("The source's reliability is a default, not a measurement.".to_string());
    }
    if score.has_warning(WarningKind::ClampedInput) {
        out.push("Some inputs were out of range and were clamped before scoring.".to_string());
    }
    out
}
