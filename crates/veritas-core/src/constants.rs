/// Veritas engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every 0–100 score in the engine.
pub const SCORE_MAX: f64 = 100.0;

/// Lower bound of every 0–100 score in the engine.
pub const SCORE_MIN: f64 = 0.0;

/// Tolerance used when checking that a set of weights sums to 1.0.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Maximum bullet points in a beginner-depth explanation.
pub const MAX_BEGINNER_BULLETS: usize = 4;

/// Model identifiers stamped into expert explanations.
pub mod model_ids {
    pub const COMPOSITE: &str = "composite:weighted-linear/v1";
    pub const CONSENSUS: &str = "consensus:tolerance-cluster/v1";
    pub const RELIABILITY: &str = "reliability:rolling-ratio/v1";
    pub const UNCERTAINTY: &str = "uncertainty:weighted-factor-dispersion/v1";
}
