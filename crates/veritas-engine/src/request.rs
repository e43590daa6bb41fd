use serde::{Deserialize, Serialize};

use veritas_core::models::{Claim, ConsensusResult, DataPoint, TrustScore, TruthWitness};

use crate::ingestion::Observation;

/// One data point to score, with optional claims from other sources about
/// the same fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub data_point: DataPoint,
    pub witness: TruthWitness,
    #[serde(default)]
    pub sibling_claims: Vec<Claim>,
}

impl EvaluationRequest {
    pub fn new(data_point: DataPoint, witness: TruthWitness) -> Self {
        Self {
            data_point,
            witness,
            sibling_claims: Vec::new(),
        }
    }

    pub fn with_sibling_claims(mut self, claims: Vec<Claim>) -> Self {
        self.sibling_claims = claims;
        self
    }
}

impl From<Observation> for EvaluationRequest {
    fn from(observation: Observation) -> Self {
        Self::new(observation.data_point, observation.witness)
    }
}

/// Result of [`TrustEngine::evaluate`](crate::TrustEngine::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: TrustScore,
    /// Present when sibling claims were supplied.
    pub consensus: Option<ConsensusResult>,
}
