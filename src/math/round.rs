/// Rounds half-way cases to the nearest even integer.
pub fn round_half_even(x: f64) -> f64 {
    let z = x.round();
    if (x - x.trunc()).abs() == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        z
    }
}

/// Nearest multiple of `increment`, ties to the even multiple.
pub fn round_to_increment(x: f64, increment: f64) -> f64 {
    round_half_even(x / increment) * increment
}
