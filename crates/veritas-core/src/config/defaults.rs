// Single source of truth for all default values.

// --- Trust weights (sum = 1.0) ---
pub const DEFAULT_WEIGHT_BASE: f64 = 0.25;
pub const DEFAULT_WEIGHT_FRESHNESS: f64 = 0.25;
pub const DEFAULT_WEIGHT_RELIABILITY: f64 = 0.30;
pub const DEFAULT_WEIGHT_CONSENSUS: f64 = 0.20;

// --- Grade thresholds (inclusive lower bounds) ---
pub const DEFAULT_GRADE_EXCELLENT: f64 = 95.0;
pub const DEFAULT_GRADE_GOOD: f64 = 85.0;
pub const DEFAULT_GRADE_FAIR: f64 = 70.0;
pub const DEFAULT_GRADE_POOR: f64 = 50.0;

// --- Decay ---
pub const DEFAULT_HALF_LIFE_SECONDS: f64 = 1200.0; // 20 minutes
pub const DEFAULT_GRACE_PERIOD_SECONDS: f64 = 30.0;
pub const DEFAULT_DECAY_FLOOR: f64 = 0.05;

// --- Reliability ---
pub const DEFAULT_MIN_OBSERVATIONS: u64 = 10;
pub const DEFAULT_NEUTRAL_RELIABILITY: f64 = 70.0;

// --- Consensus ---
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 0.05;
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 0.0;
pub const DEFAULT_MIN_AGREEING_CLAIMS: usize = 2;

// --- Reversibility ---
pub const DEFAULT_REVERSAL_WINDOW_SECONDS: u64 = 3600; // 1 hour
pub const DEFAULT_GRACE_WINDOW_SECONDS: u64 = 300; // 5 minutes
pub const DEFAULT_COST_PER_DEPENDENT_SYSTEM: f64 = 10.0;
pub const MAX_REVERSAL_WINDOW_SECONDS: u64 = 100 * 365 * 86_400; // 100 years

// --- Decision quality ---
pub const DEFAULT_VARIANCE_TOLERANCE: f64 = 0.15;
pub const DEFAULT_QUALITY_WEIGHT_ACCURACY: f64 = 0.35;
pub const DEFAULT_QUALITY_WEIGHT_EFFICIENCY: f64 = 0.20;
pub const DEFAULT_QUALITY_WEIGHT_TIMELINESS: f64 = 0.15;
pub const DEFAULT_QUALITY_WEIGHT_RISK: f64 = 0.15;
pub const DEFAULT_QUALITY_WEIGHT_COMPLIANCE: f64 = 0.15;

// --- Constraints ---
pub const DEFAULT_EQUALS_TOLERANCE: f64 = 1e-9;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "veritas=info";
pub const DEFAULT_LOG_JSON: bool = true;

// --- Files & environment ---
pub const DEFAULT_CONFIG_FILENAME: &str = "veritas.toml";
pub const ENV_PREFIX: &str = "VERITAS_";
