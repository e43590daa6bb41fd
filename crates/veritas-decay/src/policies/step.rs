/// Step decay: `0.5^floor(t / half_life)`.
///
/// Holds at 1.0 until the first half-life completes, then halves at each one.
pub fn calculate(half_lives: f64) -> f64 {
    0.5_f64.powf(half_lives.floor())
}
