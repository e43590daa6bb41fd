use crate::models::ProposedAction;

/// Anything constraints can be evaluated against.
pub trait ConstraintSubject {
    /// Current value of `metric`, or `None` if the subject doesn't report it.
    fn metric(&self, name: &str) -> Option<f64>;
}

impl ConstraintSubject for ProposedAction {
    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl ConstraintSubject for std::collections::BTreeMap<String, f64> {
    fn metric(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}
