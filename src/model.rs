pub const P_MIN: f64 = 0.01;
pub const P_MAX: f64 = 0.99;

/// Canonical penalty spot distance in meters.
pub const REFERENCE_DISTANCE: f64 = 11.0;

const DISTANCE_PENALTY: f64 = 0.015;
const SPREAD_DIVISOR: f64 = 15.0;

/// Model scoring chance before pressure: skill minus a linear penalty for
/// distance beyond the spot and a radial penalty for off-center placement.
pub fn theoretical_probability(skill: f64, distance: f64, x: f64, z: f64) -> f64 {
    let spread = ((x * x) / SPREAD_DIVISOR + (z * z) / SPREAD_DIVISOR).sqrt();
    let base = skill - DISTANCE_PENALTY * (distance - REFERENCE_DISTANCE) - spread;
    clamp_probability(base)
}

/// Scoring chance once the player's pressure is taken off.
pub fn adjusted_probability(theoretical: f64, pressure: f64) -> f64 {
    clamp_probability(theoretical - pressure)
}

pub fn clamp_probability(p: f64) -> f64 {
    p.clamp(P_MIN, P_MAX)
}

/// Rounds exact ties to the even digit (0.625 -> 0.62). Adding 0.0 folds
/// -0.0 into 0.0 so that printed grids never show "-0.00".
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (value * factor).round_ties_even() / factor + 0.0
}
