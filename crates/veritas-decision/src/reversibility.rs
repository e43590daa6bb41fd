//! ReversibilityAssessor: undo plans with latched terminal states.
//!
//! Once a decision crosses its point of no return, or its reversal window
//! lapses, the terminal status is latched in a per-decision `DashMap` entry
//! and every later assessment returns it unchanged.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, warn};

use veritas_core::config::ReversibilityConfig;
use veritas_core::errors::ConfigError;
use veritas_core::models::{
    Decision, DecisionStatus, PointOfNoReturn, ReversalComplexity, ReversalPlan, ReversalStatus,
};

#[derive(Debug, Clone)]
struct Latch {
    status: ReversalStatus,
    reason: String,
    complexity: ReversalComplexity,
}

/// Plans reversals and remembers which decisions can never be undone.
#[derive(Debug, Default)]
pub struct ReversibilityAssessor {
    config: ReversibilityConfig,
    latches: DashMap<String, Latch>,
}

impl ReversibilityAssessor {
    pub fn new(config: ReversibilityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            latches: DashMap::new(),
        })
    }

    pub fn config(&self) -> &ReversibilityConfig {
        &self.config
    }

    /// Latched terminal status for `decision_id`, if any.
    pub fn latched_status(&self, decision_id: &str) -> Option<ReversalStatus> {
        self.latches.get(decision_id).map(|l| l.status)
    }

    /// Build the current undo plan for `decision`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use veritas_core::models::{Decision, DecisionStatus, PointOfNoReturn, ProposedAction};
    /// use veritas_decision::ReversibilityAssessor;
    ///
    /// let assessor = ReversibilityAssessor::default();
    /// let executed_at = Utc::now();
    /// let mut decision = Decision::new("agent-1", ProposedAction::new("scale_out", ""), 90.0, executed_at);
    /// decision.status = DecisionStatus::Executed { executed_at };
    ///
    /// let plan = assessor.assess(&decision, &PointOfNoReturn::not_reached(), executed_at + Duration::seconds(60));
    /// assert!(plan.can_reverse);
    /// assert_eq!(plan.time_window_seconds, 3540);
    /// ```
    pub fn assess(
        &self,
        decision: &Decision,
        point_of_no_return: &PointOfNoReturn,
        now: DateTime<Utc>,
    ) -> ReversalPlan {
        let id = decision.decision_id.as_str();
        if let Some(latch) = self.latches.get(id).map(|l| l.value().clone()) {
            return self.terminal_plan(decision, latch, now);
        }

        if point_of_no_return.reached {
            let reason = point_of_no_return
                .reason
                .clone()
                .unwrap_or_else(|| "point of no return reached".to_string());
            let latch = self.latch(id, ReversalStatus::Irreversible, reason, ReversalComplexity::Expert);
            warn!(decision_id = %id, reason = %latch.reason, "decision is irreversible");
            return self.terminal_plan(decision, latch, now);
        }

        match &decision.status {
            DecisionStatus::Proposed => ReversalPlan {
                decision_id: decision.decision_id.clone(),
                can_reverse: true,
                complexity: ReversalComplexity::Trivial,
                time_window_seconds: self.config.reversal_window_seconds,
                steps: vec![format!("cancel proposed action '{}'", decision.proposed_action.kind)],
                cost_estimate: 0.0,
                status: ReversalStatus::Reversible,
                expires_at: None,
                assessed_at: now,
                reason: None,
            },
            DecisionStatus::Rejected { .. } => ReversalPlan {
                decision_id: decision.decision_id.clone(),
                can_reverse: false,
                complexity: ReversalComplexity::Trivial,
                time_window_seconds: 0,
                steps: Vec::new(),
                cost_estimate: 0.0,
                status: ReversalStatus::Irreversible,
                expires_at: None,
                assessed_at: now,
                reason: Some("decision was rejected and never executed".to_string()),
            },
            DecisionStatus::Executed { executed_at } => {
                self.assess_executed(decision, *executed_at, now)
            }
        }
    }

    fn assess_executed(
        &self,
        decision: &Decision,
        executed_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ReversalPlan {
        let elapsed = (now - executed_at).num_seconds().max(0) as u64;
        let window = self.config.reversal_window_seconds;
        let mut complexity = base_complexity(decision.proposed_action.dependent_systems.len());
        if elapsed > self.config.grace_window_seconds {
            complexity = complexity.bumped();
        }

        if elapsed >= window {
            let latch = self.latch(
                &decision.decision_id,
                ReversalStatus::Expired,
                format!("reversal window of {window}s lapsed"),
                complexity,
            );
            warn!(decision_id = %decision.decision_id, "reversal window expired");
            return self.terminal_plan(decision, latch, now);
        }

        let plan = ReversalPlan {
            decision_id: decision.decision_id.clone(),
            can_reverse: true,
            complexity,
            time_window_seconds: window - elapsed,
            steps: decision.proposed_action.rollback_steps.clone(),
            cost_estimate: self.cost_estimate(decision, complexity),
            status: ReversalStatus::Reversible,
            expires_at: self.window_end(executed_at),
            assessed_at: now,
            reason: None,
        };
        debug!(
            decision_id = %plan.decision_id,
            complexity = ?plan.complexity,
            remaining = plan.time_window_seconds,
            "reversal plan assessed"
        );
        plan
    }

    /// First writer wins: a racing assessment sees the latch already stored.
    fn latch(
        &self,
        decision_id: &str,
        status: ReversalStatus,
        reason: String,
        complexity: ReversalComplexity,
    ) -> Latch {
        self.latches
            .entry(decision_id.to_string())
            .or_insert(Latch {
                status,
                reason,
                complexity,
            })
            .value()
            .clone()
    }

    fn terminal_plan(&self, decision: &Decision, latch: Latch, now: DateTime<Utc>) -> ReversalPlan {
        ReversalPlan {
            decision_id: decision.decision_id.clone(),
            can_reverse: false,
            complexity: latch.complexity,
            time_window_seconds: 0,
            steps: Vec::new(),
            cost_estimate: self.cost_estimate(decision, latch.complexity),
            status: latch.status,
            expires_at: decision.executed_at().and_then(|at| self.window_end(at)),
            assessed_at: now,
            reason: Some(latch.reason),
        }
    }

    /// End of the reversal window, or `None` when it lies past the representable range.
    fn window_end(&self, executed_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let window = i64::try_from(self.config.reversal_window_seconds).ok()?;
        executed_at.checked_add_signed(Duration::try_seconds(window)?)
    }

    fn cost_estimate(&self, decision: &Decision, complexity: ReversalComplexity) -> f64 {
        let action = &decision.proposed_action;
        let dependents = action.dependent_systems.len() as f64;
        (action.rollback_cost + dependents * self.config.cost_per_dependent_system)
            * complexity.cost_multiplier()
    }
}

/// Complexity from the number of dependent systems.
pub fn base_complexity(dependents: usize) -> ReversalComplexity {
    match dependents {
        0 => ReversalComplexity::Trivial,
        1..=2 => ReversalComplexity::Simple,
        3..=5 => ReversalComplexity::Complex,
        _ => ReversalComplexity::Expert,
    }
}
