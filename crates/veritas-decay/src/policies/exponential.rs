/// Exponential decay: `0.5^(t / half_life)`.
///
/// Range: (0.0, 1.0]. Exactly 0.5 after one half-life.
pub fn calculate(half_lives: f64) -> f64 {
    0.5_f64.powf(half_lives)
}
