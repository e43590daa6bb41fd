pub mod consensus;
pub mod constraint;
pub mod data_point;
pub mod decision;
pub mod explanation;
pub mod outcome;
pub mod provenance;
pub mod reversal;
pub mod source_record;
pub mod trust_score;
pub mod witness;

pub use consensus::{Claim, ConsensusResult};
pub use constraint::{
    Constraint, ConstraintCheck, SafetyStatus, Severity, ThresholdOp, ValidationReport,
};
pub use data_point::{DataPoint, ObservedValue};
pub use decision::{Decision, DecisionStatus, PointOfNoReturn, ProposedAction};
pub use explanation::{
    Explanation, ExplanationDepth, FactorBreakdown, FactorContributions, ModelIdentifier,
    SupportingDatum, UncertaintyBounds,
};
pub use outcome::{
    DecisionOutcome, MetricVariance, OutcomeObservation, QualityComponents, RootCause,
};
pub use provenance::{
    ChainIntegrity, ChainState, GapDetection, ProvenanceChain, ProvenanceStage, ProvenanceStep,
};
pub use reversal::{ReversalComplexity, ReversalPlan, ReversalStatus};
pub use source_record::SourceRecord;
pub use trust_score::{
    ScoringModel, TrustFactors, TrustGrade, TrustScore, TrustWarning, WarningKind,
};
pub use witness::{SourceAuthority, TruthWitness, WitnessSnapshot};
