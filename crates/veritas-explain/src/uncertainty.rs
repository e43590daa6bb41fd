use veritas_core::config::TrustWeights;
use veritas_core::models::TrustFactors;

/// Weighted standard deviation of the factors around the composite.
///
/// ```text
/// σ = sqrt( Σ wᵢ · (fᵢ − composite)² )
/// ```
///
/// Zero when every factor agrees; grows as the factors pull apart.
pub fn weighted_dispersion(factors: &TrustFactors, weights: &TrustWeights, composite: f64) -> f64 {
    let w = [weights.base, weights.freshness, weights.reliability, weights.consensus];
    let variance: f64 = factors
        .named()
        .iter()
        .zip(w)
        .map(|((_, f), w)| w * (f - composite).powi(2))
        .sum();
    variance.max(0.0).sqrt()
}
