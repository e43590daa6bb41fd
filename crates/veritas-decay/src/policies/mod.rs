//! The three decay curves. Each maps elapsed half-lives past the grace
//! period to an unclamped multiplier.

pub mod exponential;
pub mod linear;
pub mod step;

use veritas_core::config::DecayPolicy;

/// Dispatch to the curve for `policy`.
pub fn curve(policy: DecayPolicy, half_lives: f64) -> f64 {
    match policy {
        DecayPolicy::Exponential => exponential::calculate(half_lives),
        DecayPolicy::Linear => linear::calculate(half_lives),
        DecayPolicy::Step => step::calculate(half_lives),
    }
}
