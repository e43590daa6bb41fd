pub mod consensus_config;
pub mod constraint_config;
pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod quality_config;
pub mod reliability_config;
pub mod reversibility_config;
pub mod trust_config;
pub mod veritas_config;

pub use consensus_config::ConsensusConfig;
pub use constraint_config::ConstraintSpec;
pub use decay_config::{DecayConfig, DecayPolicy};
pub use observability_config::ObservabilityConfig;
pub use quality_config::{QualityConfig, QualityWeights};
pub use reliability_config::ReliabilityConfig;
pub use reversibility_config::ReversibilityConfig;
pub use trust_config::{GradeThresholds, TrustConfig, TrustWeights};
pub use veritas_config::VeritasConfig;
