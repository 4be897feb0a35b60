//! Channel synthesizer.
//!
//! Runs the differencer once per position axis, converts accelerations into
//! multiples of the gravity constant and pairs them with the orientation
//! channels derived from the rotation-vector series.

use crate::{
    differencer::differentiate,
    error::{Result, SynthesisError, check_len},
    rotation::{AxisAngle, Rotator, orientation},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Standard gravity, negative because "down" is the negative z axis.
pub const DEFAULT_GRAVITY: f64 = -9.81;

/// How the time series is checked before synthesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCheck {
    /// No ordering check. Repeated timestamps surface as non-finite output.
    #[default]
    Permissive,
    /// Every timestamp must be greater than the one before it.
    StrictlyIncreasing,
}

/// Optional inputs to [`synthesize`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Rotation-vector x component per sample, all zero when `None`
    pub rx: Option<Vec<f64>>,
    /// Rotation-vector y component per sample, all zero when `None`
    pub ry: Option<Vec<f64>>,
    /// Rotation-vector z component per sample, all zero when `None`
    pub rz: Option<Vec<f64>>,
    pub initial_vx: f64,
    pub initial_vy: f64,
    pub initial_vz: f64,
    /// Gravity constant, signed so that "down" is negative
    pub gravity: f64,
    pub time_check: TimeCheck,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            rx: None,
            ry: None,
            rz: None,
            initial_vx: 0.0,
            initial_vy: 0.0,
            initial_vz: 0.0,
            gravity: DEFAULT_GRAVITY,
            time_check: TimeCheck::Permissive,
        }
    }
}

impl SynthesisConfig {
    pub fn with_rx(mut self, rx: Vec<f64>) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn with_ry(mut self, ry: Vec<f64>) -> Self {
        self.ry = Some(ry);
        self
    }

    pub fn with_rz(mut self, rz: Vec<f64>) -> Self {
        self.rz = Some(rz);
        self
    }

    pub fn with_initial_velocity(mut self, vx: f64, vy: f64, vz: f64) -> Self {
        self.initial_vx = vx;
        self.initial_vy = vy;
        self.initial_vz = vz;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_check(mut self, time_check: TimeCheck) -> Self {
        self.time_check = time_check;
        self
    }
}

/// One of the six output channels, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    OrientationX,
    OrientationY,
    OrientationZ,
    GravityX,
    GravityY,
    GravityZ,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::OrientationX,
        Channel::OrientationY,
        Channel::OrientationZ,
        Channel::GravityX,
        Channel::GravityY,
        Channel::GravityZ,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Channel::OrientationX => "orientation_x",
            Channel::OrientationY => "orientation_y",
            Channel::OrientationZ => "orientation_z",
            Channel::GravityX => "gravity_x",
            Channel::GravityY => "gravity_y",
            Channel::GravityZ => "gravity_z",
        }
    }

    /// Parse a channel name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|channel| channel.name() == s)
    }
}

/// The six synthesized series, each co-indexed with the input time series.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Channels {
    pub orientation_x: Vec<f64>,
    pub orientation_y: Vec<f64>,
    pub orientation_z: Vec<f64>,
    pub gravity_x: Vec<f64>,
    pub gravity_y: Vec<f64>,
    pub gravity_z: Vec<f64>,
}

impl Channels {
    pub fn get(&self, channel: Channel) -> &[f64] {
        match channel {
            Channel::OrientationX => &self.orientation_x,
            Channel::OrientationY => &self.orientation_y,
            Channel::OrientationZ => &self.orientation_z,
            Channel::GravityX => &self.gravity_x,
            Channel::GravityY => &self.gravity_y,
            Channel::GravityZ => &self.gravity_z,
        }
    }

    /// Number of samples per channel
    pub fn len(&self) -> usize {
        self.orientation_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All six channel values at sample `index`, in output order.
    pub fn sample(&self, index: usize) -> Option<[f64; 6]> {
        if index >= self.len() {
            return None;
        }
        Some(Channel::ALL.map(|channel| self.get(channel)[index]))
    }

    pub fn into_array(self) -> [Vec<f64>; 6] {
        [
            self.orientation_x,
            self.orientation_y,
            self.orientation_z,
            self.gravity_x,
            self.gravity_y,
            self.gravity_z,
        ]
    }
}

/// Synthesize the six channels using axis-angle rotation.
pub fn synthesize(
    time: &[f64],
    x: &[f64],
    y: &[f64],
    z: &[f64],
    config: &SynthesisConfig,
) -> Result<Channels> {
    synthesize_with(&AxisAngle, time, x, y, z, config)
}

/// Synthesize the six channels, applying rotation vectors with `rotator`.
///
/// Every series must have as many samples as `time`. Index 0 of each gravity
/// channel is NaN.
pub fn synthesize_with<R: Rotator>(
    rotator: &R,
    time: &[f64],
    x: &[f64],
    y: &[f64],
    z: &[f64],
    config: &SynthesisConfig,
) -> Result<Channels> {
    let len = time.len();
    if len == 0 {
        return Err(SynthesisError::Empty);
    }
    check_len("x", len, x.len())?;
    check_len("y", len, y.len())?;
    check_len("z", len, z.len())?;

    let zeros;
    let (rx, ry, rz) = match (&config.rx, &config.ry, &config.rz) {
        (Some(rx), Some(ry), Some(rz)) => (rx.as_slice(), ry.as_slice(), rz.as_slice()),
        (rx, ry, rz) => {
            zeros = vec![0.0; len];
            (
                rx.as_deref().unwrap_or(zeros.as_slice()),
                ry.as_deref().unwrap_or(zeros.as_slice()),
                rz.as_deref().unwrap_or(zeros.as_slice()),
            )
        }
    };
    check_len("rx", len, rx.len())?;

    if config.time_check == TimeCheck::StrictlyIncreasing {
        check_increasing(time)?;
    }

    let gravity = config.gravity;
    tracing::debug!(samples = len, gravity, "synthesizing channels");

    let [orientation_x, orientation_y, orientation_z] = orientation(rotator, rx, ry, rz)?;

    let ax = differentiate_axis("x", time, x, config.initial_vx)?;
    let ay = differentiate_axis("y", time, y, config.initial_vy)?;
    let az = differentiate_axis("z", time, z, config.initial_vz)?;

    Ok(Channels {
        orientation_x,
        orientation_y,
        orientation_z,
        gravity_x: ax.iter().map(|a| a / gravity).collect(),
        gravity_y: ay.iter().map(|a| a / gravity).collect(),
        // a stationary body reads -gravity along the up axis
        gravity_z: az.iter().map(|a| (a - gravity) / gravity).collect(),
    })
}

fn differentiate_axis(
    axis: &'static str,
    time: &[f64],
    position: &[f64],
    initial_velocity: f64,
) -> Result<Vec<f64>> {
    tracing::trace!(axis, initial_velocity, "differentiating axis");
    differentiate(time, position, initial_velocity)
}

fn check_increasing(time: &[f64]) -> Result<()> {
    for (i, pair) in time.windows(2).enumerate() {
        // NaN compares as unordered and fails too
        if pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater) {
            return Err(SynthesisError::NonIncreasingTime {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
