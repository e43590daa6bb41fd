use serde::{Deserialize, Serialize};

/// A constraint as written in the catalogue, before validation.
///
/// Operator and severity stay strings here so that an unknown value is
/// reported as `InvalidConfiguration` at load time rather than a TOML parse
/// error. See `models::Constraint::from_spec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSpec {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Name of the metric on the proposed action this constraint reads.
    pub metric: String,
    /// `above`, `below` or `equals`.
    pub threshold_op: String,
    pub threshold_value: f64,
    /// `info`, `low`, `medium`, `high` or `critical`.
    #[serde(default = "default_severity")]
    pub severity: String,
    /// Tolerance for `equals`. Defaults to 1e-9.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

fn default_severity() -> String {
    "medium".to_string()
}
