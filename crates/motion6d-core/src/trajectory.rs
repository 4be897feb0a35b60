//! Owned trajectory records, as read from trajectory files.

use crate::{
    error::Result,
    synthesizer::{Channels, SynthesisConfig, synthesize},
};
use serde::{Deserialize, Serialize};

/// A sampled trajectory with optional rotation-vector series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ry: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rz: Option<Vec<f64>>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Synthesize channels for this trajectory.
    ///
    /// Rotation series carried by `config` take precedence over the ones
    /// recorded in the trajectory.
    pub fn synthesize(&self, config: &SynthesisConfig) -> Result<Channels> {
        let mut config = config.clone();
        config.rx = config.rx.or_else(|| self.rx.clone());
        config.ry = config.ry.or_else(|| self.ry.clone());
        config.rz = config.rz.or_else(|| self.rz.clone());
        synthesize(&self.time, &self.x, &self.y, &self.z, &config)
    }
}
