//! DecisionLog: append-only audit log of decisions, plans and outcomes.
//!
//! Records live in `Vec`s and are addressed by stable indices; an id →
//! index map serves lookups. Nothing is ever removed or reordered.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::{Decision, DecisionOutcome, DecisionStatus, OutcomeObservation, ReversalPlan};

use crate::quality::DecisionQualityScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionEventKind {
    Proposed,
    Executed,
    Rejected,
    ReversalAssessed,
    OutcomeRecorded,
}

/// One entry in the ordered event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEvent {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub decision_id: String,
    pub kind: DecisionEventKind,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct DecisionLog {
    decisions: Vec<Decision>,
    plans: Vec<ReversalPlan>,
    outcomes: Vec<DecisionOutcome>,
    by_id: HashMap<String, usize>,
    plans_by_decision: HashMap<String, Vec<usize>>,
    outcome_by_decision: HashMap<String, usize>,
    events: Vec<DecisionEvent>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new decision and return its index.
    pub fn propose(&mut self, decision: Decision) -> VeritasResult<usize> {
        if self.by_id.contains_key(&decision.decision_id) {
            return Err(VeritasError::decision_state(
                &decision.decision_id,
                "a decision with this id is already logged",
            ));
        }
        if decision.status != DecisionStatus::Proposed {
            return Err(VeritasError::decision_state(
                &decision.decision_id,
                "decisions enter the log as proposed",
            ));
        }
        let index = self.decisions.len();
        self.push_event(&decision.decision_id, DecisionEventKind::Proposed, decision.timestamp);
        info!(
            decision_id = %decision.decision_id,
            agent_id = %decision.agent_id,
            action = %decision.proposed_action.kind,
            "decision proposed"
        );
        self.by_id.insert(decision.decision_id.clone(), index);
        self.decisions.push(decision);
        Ok(index)
    }

    pub fn mark_executed(&mut self, decision_id: &str, at: DateTime<Utc>) -> VeritasResult<&Decision> {
        let index = self.proposed_index(decision_id, "execute")?;
        self.decisions[index].status = DecisionStatus::Executed { executed_at: at };
        self.push_event(decision_id, DecisionEventKind::Executed, at);
        info!(decision_id, "decision executed");
        Ok(&self.decisions[index])
    }

    pub fn reject(
        &mut self,
        decision_id: &str,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> VeritasResult<&Decision> {
        let index = self.proposed_index(decision_id, "reject")?;
        let reason = reason.into();
        info!(decision_id, reason = %reason, "decision rejected");
        self.decisions[index].status = DecisionStatus::Rejected { reason };
        self.push_event(decision_id, DecisionEventKind::Rejected, at);
        Ok(&self.decisions[index])
    }

    /// Append a reversal plan. Every assessment is kept, newest last.
    pub fn record_plan(&mut self, plan: ReversalPlan) -> VeritasResult<usize> {
        if !self.by_id.contains_key(&plan.decision_id) {
            return Err(VeritasError::insufficient(format!(
                "no logged decision '{}'",
                plan.decision_id
            )));
        }
        let index = self.plans.len();
        self.push_event(&plan.decision_id, DecisionEventKind::ReversalAssessed, plan.assessed_at);
        self.plans_by_decision
            .entry(plan.decision_id.clone())
            .or_default()
            .push(index);
        self.plans.push(plan);
        Ok(index)
    }

    /// Score ground truth for a logged decision. Each decision takes one outcome.
    pub fn score_outcome(
        &mut self,
        scorer: &DecisionQualityScorer,
        observation: &OutcomeObservation,
    ) -> VeritasResult<&DecisionOutcome> {
        let Some(&index) = self.by_id.get(&observation.decision_id) else {
            return Err(VeritasError::insufficient(format!(
                "no logged decision '{}'",
                observation.decision_id
            )));
        };
        if self.outcome_by_decision.contains_key(&observation.decision_id) {
            return Err(VeritasError::decision_state(
                &observation.decision_id,
                "an outcome is already recorded",
            ));
        }
        let outcome = scorer.score(&self.decisions[index], observation)?;
        let outcome_index = self.outcomes.len();
        self.push_event(&outcome.decision_id, DecisionEventKind::OutcomeRecorded, outcome.scored_at);
        self.outcome_by_decision
            .insert(outcome.decision_id.clone(), outcome_index);
        self.outcomes.push(outcome);
        Ok(&self.outcomes[outcome_index])
    }

    pub fn get(&self, decision_id: &str) -> Option<&Decision> {
        self.by_id.get(decision_id).map(|&i| &self.decisions[i])
    }

    /// Decision at a stable index returned by [`propose`](Self::propose).
    pub fn at(&self, index: usize) -> Option<&Decision> {
        self.decisions.get(index)
    }

    /// Decisions made by `agent_id`, in log order.
    pub fn by_agent<'a>(&'a self, agent_id: &'a str) -> impl Iterator<Item = &'a Decision> + 'a {
        self.decisions.iter().filter(move |d| d.agent_id == agent_id)
    }

    pub fn plans_for(&self, decision_id: &str) -> Vec<&ReversalPlan> {
        self.plans_by_decision
            .get(decision_id)
            .map(|indices| indices.iter().map(|&i| &self.plans[i]).collect())
            .unwrap_or_default()
    }

    pub fn latest_plan(&self, decision_id: &str) -> Option<&ReversalPlan> {
        self.plans_by_decision
            .get(decision_id)
            .and_then(|indices| indices.last())
            .map(|&i| &self.plans[i])
    }

    pub fn outcome_for(&self, decision_id: &str) -> Option<&DecisionOutcome> {
        self.outcome_by_decision.get(decision_id).map(|&i| &self.outcomes[i])
    }

    pub fn events(&self) -> &[DecisionEvent] {
        &self.events
    }

    pub fn events_for<'a>(&'a self, decision_id: &'a str) -> impl Iterator<Item = &'a DecisionEvent> + 'a {
        self.events.iter().filter(move |e| e.decision_id == decision_id)
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    fn proposed_index(&self, decision_id: &str, verb: &str) -> VeritasResult<usize> {
        let Some(&index) = self.by_id.get(decision_id) else {
            return Err(VeritasError::insufficient(format!("no logged decision '{decision_id}'")));
        };
        match self.decisions[index].status {
            DecisionStatus::Proposed => Ok(index),
            _ => Err(VeritasError::decision_state(
                decision_id,
                format!("cannot {verb}: decision is no longer proposed"),
            )),
        }
    }

    fn push_event(&mut self, decision_id: &str, kind: DecisionEventKind, at: DateTime<Utc>) {
        self.events.push(DecisionEvent {
            sequence: self.events.len() as u64,
            decision_id: decision_id.to_string(),
            kind,
            at,
        });
    }
}
