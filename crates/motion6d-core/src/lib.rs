//! Synthetic inertial-measurement channels from a sampled trajectory.
//!
//! Position samples are turned into per-axis acceleration by a
//! constant-acceleration finite difference, then combined with a gravity
//! constant into accelerometer-style readings. Rotation vectors are applied
//! to the reference up vector to produce tilt-sensor readings.
//!
//! This crate performs no I/O.

pub mod differencer;
pub mod error;
pub mod rotation;
pub mod synthesizer;
pub mod trajectory;

pub use differencer::differentiate;
pub use error::{Result, SynthesisError};
pub use rotation::{AxisAngle, Rotator, UP};
pub use synthesizer::{
    Channel, Channels, DEFAULT_GRAVITY, SynthesisConfig, TimeCheck, synthesize, synthesize_with,
};
pub use trajectory::Trajectory;
