//! TrustEngine: one entry point for scoring, provenance and decisions.
//!
//! Everything is validated at construction. The reliability registry is the
//! only state shared between engines; pass the same `Arc` to
//! [`TrustEngine::with_registry`] to let several engines learn from one
//! track record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use veritas_core::config::VeritasConfig;
use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::{
    Claim, DataPoint, Decision, DecisionOutcome, Explanation, ExplanationDepth,
    OutcomeObservation, PointOfNoReturn, ProposedAction, ProvenanceStage, ProvenanceStep,
    ReversalPlan, SafetyStatus, TrustScore, TruthWitness, ValidationReport,
};
use veritas_decision::{ConstraintValidator, DecisionLog, DecisionQualityScorer, ReversibilityAssessor};
use veritas_explain::ExplainabilityRenderer;
use veritas_observability::tracing_setup::events;
use veritas_observability::{chain_span, decision_span, scoring_span};
use veritas_provenance::{digest_json, ProvenanceChainTracker};
use veritas_trust::{ConsensusAggregator, SourceReliabilityRegistry, TrustScoreCalculator};

use crate::request::{Evaluation, EvaluationRequest};

/// Whether a source's reading turned out to be accurate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceVerdict {
    pub source_id: String,
    pub was_accurate: bool,
}

impl SourceVerdict {
    pub fn new(source_id: impl Into<String>, was_accurate: bool) -> Self {
        Self {
            source_id: source_id.into(),
            was_accurate,
        }
    }
}

pub struct TrustEngine {
    config: VeritasConfig,
    calculator: TrustScoreCalculator,
    aggregator: ConsensusAggregator,
    renderer: ExplainabilityRenderer,
    validator: ConstraintValidator,
    assessor: ReversibilityAssessor,
    scorer: DecisionQualityScorer,
    registry: Arc<SourceReliabilityRegistry>,
    log: DecisionLog,
}

impl TrustEngine {
    pub fn from_config(config: VeritasConfig) -> VeritasResult<Self> {
        let registry = Arc::new(SourceReliabilityRegistry::new(config.reliability));
        Self::with_registry(config, registry)
    }

    /// Build an engine sharing an existing reliability registry.
    pub fn with_registry(
        config: VeritasConfig,
        registry: Arc<SourceReliabilityRegistry>,
    ) -> VeritasResult<Self> {
        config.validate()?;
        Ok(Self {
            calculator: TrustScoreCalculator::from_config(&config)?,
            aggregator: ConsensusAggregator::new(config.consensus)?,
            renderer: ExplainabilityRenderer::new(),
            validator: ConstraintValidator::from_config(&config)?,
            assessor: ReversibilityAssessor::new(config.reversibility)?,
            scorer: DecisionQualityScorer::new(config.quality)?,
            registry,
            log: DecisionLog::new(),
            config,
        })
    }

    pub fn config(&self) -> &VeritasConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<SourceReliabilityRegistry> {
        &self.registry
    }

    pub fn decision_log(&self) -> &DecisionLog {
        &self.log
    }

    // ── Provenance ───────────────────────────────────────────────────────

    /// Open a provenance chain for `data_point`, already carrying its
    /// ingestion step. The step's output digest is the data point itself.
    pub fn open_chain(
        &self,
        data_point: &DataPoint,
        witness: &TruthWitness,
        now: DateTime<Utc>,
    ) -> VeritasResult<ProvenanceChainTracker> {
        let mut tracker = ProvenanceChainTracker::open(&data_point.id, &witness.global_trace_id, now);
        let span = chain_span!(tracker.chain_id());
        let _entered = span.enter();
        let step = ProvenanceStep::new(ProvenanceStage::Ingestion, &data_point.source_id, now)
            .with_validation(format!("witnessed by {}", witness.source_authority))
            .with_output_digest(digest_json(data_point)?);
        tracker.append(step)?;
        events::chain_opened(tracker.chain_id(), &data_point.id);
        Ok(tracker)
    }

    // ── Scoring ──────────────────────────────────────────────────────────

    /// Score one data point. Sibling claims, when present, are aggregated
    /// together with the data point's own claim.
    pub fn evaluate(&self, request: &EvaluationRequest, now: DateTime<Utc>) -> VeritasResult<Evaluation> {
        let dp = &request.data_point;
        let span = scoring_span!(dp.id, dp.source_id);
        let _entered = span.enter();

        let consensus = if request.sibling_claims.is_empty() {
            None
        } else {
            let own_confidence = dp
                .reported_confidence
                .unwrap_or_else(|| request.witness.source_authority.default_confidence());
            let mut claims = Vec::with_capacity(request.sibling_claims.len() + 1);
            claims.push(Claim::new(&dp.source_id, dp.value.clone(), own_confidence));
            claims.extend(request.sibling_claims.iter().cloned());
            let result = self.aggregator.aggregate(&claims, self.registry.as_ref())?;
            if !result.agreement_reached {
                events::consensus_not_reached(result.claim_count(), result.outliers.len());
            }
            Some(result)
        };

        let score = self.calculator.score_with_registry(
            dp,
            &request.witness,
            self.registry.as_ref(),
            consensus.as_ref(),
            now,
        );
        events::trust_scored(&dp.id, score.composite_score, score.grade.as_str(), score.warnings.len());
        Ok(Evaluation { score, consensus })
    }

    /// Score independent requests in parallel. Results keep request order.
    pub fn evaluate_batch(
        &self,
        requests: &[EvaluationRequest],
        now: DateTime<Utc>,
    ) -> Vec<VeritasResult<Evaluation>> {
        let results: Vec<_> = requests.par_iter().map(|r| self.evaluate(r, now)).collect();
        events::batch_evaluated(requests.len(), results.iter().filter(|r| r.is_ok()).count());
        results
    }

    pub fn explain(&self, score: &TrustScore, depth: ExplanationDepth) -> Explanation {
        self.renderer.render(score, depth)
    }

    // ── Decisions ────────────────────────────────────────────────────────

    /// Check `action` against the constraint catalogue.
    pub fn gate(&self, action: &ProposedAction, now: DateTime<Utc>) -> ValidationReport {
        let report = self.validator.validate(action, now);
        events::action_gated(
            &action.action_id,
            report.all_passed,
            report.safety_status.as_str(),
            report.failed().count(),
        );
        report
    }

    /// Gate `action` and log it as a decision backed by `supporting` scores.
    ///
    /// The decision carries the lowest supporting composite. A critical gate
    /// failure logs the decision and rejects it straight away.
    pub fn propose(
        &mut self,
        agent_id: &str,
        action: ProposedAction,
        supporting: &[TrustScore],
        now: DateTime<Utc>,
    ) -> VeritasResult<&Decision> {
        let Some(trust) = supporting
            .iter()
            .map(|s| s.composite_score)
            .min_by(f64::total_cmp)
        else {
            return Err(VeritasError::insufficient(
                "a decision needs at least one supporting trust score",
            ));
        };

        let report = self.gate(&action, now);
        let mut decision = Decision::new(agent_id, action, trust, now);
        decision.supporting_data_points = supporting.iter().map(|s| s.data_point_id.clone()).collect();
        let failed: Vec<String> = report.failed().map(|c| c.constraint_id.clone()).collect();
        decision.constraint_checks = report.checks;

        let id = decision.decision_id.clone();
        let _entered = decision_span!(id, "propose").entered();
        self.log.propose(decision)?;

        if report.safety_status == SafetyStatus::Critical {
            self.log.reject(
                &id,
                format!("critical constraints failed: {}", failed.join(", ")),
                now,
            )?;
        }
        self.log
            .get(&id)
            .ok_or_else(|| VeritasError::decision_state(&id, "decision missing after propose"))
    }

    pub fn execute(&mut self, decision_id: &str, at: DateTime<Utc>) -> VeritasResult<&Decision> {
        let _entered = decision_span!(decision_id, "execute").entered();
        self.log.mark_executed(decision_id, at)
    }

    /// Assess and log the current undo plan for a logged decision.
    pub fn assess_reversal(
        &mut self,
        decision_id: &str,
        point_of_no_return: &PointOfNoReturn,
        now: DateTime<Utc>,
    ) -> VeritasResult<ReversalPlan> {
        let _entered = decision_span!(decision_id, "reversal").entered();
        let decision = self
            .log
            .get(decision_id)
            .ok_or_else(|| VeritasError::insufficient(format!("no logged decision '{decision_id}'")))?;
        let plan = self.assessor.assess(decision, point_of_no_return, now);
        if plan.status.is_terminal() && decision.is_executed() {
            events::reversal_closed(
                decision_id,
                plan.status.as_str(),
                plan.reason.as_deref().unwrap_or_default(),
            );
        }
        self.log.record_plan(plan.clone())?;
        Ok(plan)
    }

    /// Feed ground truth back: update source track records, then score the
    /// decision outcome.
    pub fn record_ground_truth(
        &mut self,
        observation: &OutcomeObservation,
        verdicts: &[SourceVerdict],
    ) -> VeritasResult<DecisionOutcome> {
        let _entered = decision_span!(observation.decision_id, "outcome").entered();
        let outcome = self.log.score_outcome(&self.scorer, observation)?.clone();
        for verdict in verdicts {
            self.registry.record_outcome(&verdict.source_id, verdict.was_accurate);
        }
        debug!(verdicts = verdicts.len(), "source track records updated");
        events::ground_truth_recorded(
            &outcome.decision_id,
            outcome.quality_score,
            outcome.pending_root_causes.len(),
        );
        Ok(outcome)
    }

    /// Record whether a source was accurate, outside any decision.
    pub fn record_source_outcome(&self, source_id: &str, was_accurate: bool) {
        self.registry.record_outcome(source_id, was_accurate);
        info!(source_id, was_accurate, "source outcome recorded");
    }
}
