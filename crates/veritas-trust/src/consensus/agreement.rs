use veritas_core::config::ConsensusConfig;
use veritas_core::models::ObservedValue;

/// Whether two reported values agree.
///
/// Numeric: `|a − b| ≤ max(absolute_tolerance, relative_tolerance × max(|a|, |b|))`.
/// State: equal after trimming, ignoring case. Numeric never agrees with state.
///
/// ```
/// use veritas_core::config::ConsensusConfig;
/// use veritas_core::models::ObservedValue;
/// use veritas_trust::consensus::values_agree;
///
/// let cfg = ConsensusConfig::default();
/// assert!(values_agree(&90.0.into(), &91.0.into(), &cfg));
/// assert!(!values_agree(&90.0.into(), &30.0.into(), &cfg));
/// assert!(values_agree(&"Halted ".into(), &"halted".into(), &cfg));
/// ```
pub fn values_agree(a: &ObservedValue, b: &ObservedValue, config: &ConsensusConfig) -> bool {
    match (a, b) {
        (ObservedValue::Numeric(x), ObservedValue::Numeric(y)) => {
            if !x.is_finite() || !y.is_finite() {
                return false;
            }
            let tolerance = config
                .absolute_tolerance
                .max(config.relative_tolerance * x.abs().max(y.abs()));
            (x - y).abs() <= tolerance
        }
        (ObservedValue::State(x), ObservedValue::State(y)) => {
            x.trim().eq_ignore_ascii_case(y.trim())
        }
        _ => false,
    }
}
