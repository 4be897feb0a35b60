//! Kinematic differencer.
//!
//! Recovers per-sample acceleration along one axis from a position series,
//! assuming the acceleration is constant across each sampling interval. The
//! recurrence carries the derived velocity forward, so every sample depends
//! on the one before it.

use crate::error::{Result, SynthesisError, check_len};

/// Acceleration over one interval, solving `Δp = v₀·Δt + ½·a·Δt²` for `a`.
pub fn interval_acceleration(delta_position: f64, delta_time: f64, start_velocity: f64) -> f64 {
    2.0 * (delta_position - start_velocity * delta_time) / (delta_time * delta_time)
}

/// Differentiate `position` against `time` into an acceleration series.
///
/// Index 0 is always NaN since there is no earlier sample to difference
/// against. A zero time step yields a non-finite value at that index and
/// every later one; it is not reported as an error.
pub fn differentiate(time: &[f64], position: &[f64], initial_velocity: f64) -> Result<Vec<f64>> {
    if time.is_empty() {
        return Err(SynthesisError::Empty);
    }
    check_len("position", time.len(), position.len())?;

    Ok(integrate_axis(time, position, initial_velocity))
}

fn integrate_axis(time: &[f64], position: &[f64], initial_velocity: f64) -> Vec<f64> {
    let mut acceleration = Vec::with_capacity(time.len());
    acceleration.push(f64::NAN);

    let mut velocity = initial_velocity;
    for i in 1..time.len() {
        let delta_time = time[i] - time[i - 1];
        if delta_time == 0.0 {
            tracing::warn!(index = i, time = time[i], "zero time step");
        }
        let accel = interval_acceleration(position[i] - position[i - 1], delta_time, velocity);
        velocity += accel * delta_time;
        acceleration.push(accel);
    }

    acceleration
}
