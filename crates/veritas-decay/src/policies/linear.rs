/// Linear decay: `1 − t / (2 · half_life)`.
///
/// Reaches 0.5 at one half-life and 0.0 at two. May go negative; the caller
/// clamps to the floor.
pub fn calculate(half_lives: f64) -> f64 {
    1.0 - half_lives / 2.0
}
