use std::collections::HashMap;

/// Read access to per-source reliability (0–100).
pub trait ReliabilitySource: Send + Sync {
    fn reliability_of(&self, source_id: &str) -> f64;

    /// True when the reported value is a neutral default rather than history.
    fn is_sparse(&self, _source_id: &str) -> bool {
        false
    }
}

/// Fixed reliability table. Unknown sources report 0.
impl ReliabilitySource for HashMap<String, f64> {
    fn reliability_of(&self, source_id: &str) -> f64 {
        self.get(source_id).copied().unwrap_or(0.0)
    }
}
