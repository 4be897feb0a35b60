use anyhow::{Context, Result};
use clap::ValueEnum;
use motion6d_core::{DEFAULT_GRAVITY, SynthesisConfig, TimeCheck};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Settings for a synthesis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Physical constants and initial state
    #[serde(default)]
    pub motion: MotionConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Physical constants and initial state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Gravity constant in trajectory units, negative for "down"
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    /// Velocity at the first sample
    #[serde(default)]
    pub initial_velocity: Velocity,

    /// Reject time series that are not strictly increasing
    #[serde(default)]
    pub strict_time: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            initial_velocity: Velocity::default(),
            strict_time: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One header row, then one row per sample
    #[default]
    Csv,
    /// An object keyed by channel name
    Json,
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let gravity = self.motion.gravity;
        if !gravity.is_finite() || gravity == 0.0 {
            anyhow::bail!("motion.gravity must be finite and non-zero, got {gravity}");
        }

        let v = self.motion.initial_velocity;
        for (axis, value) in [("x", v.x), ("y", v.y), ("z", v.z)] {
            if !value.is_finite() {
                anyhow::bail!("motion.initial_velocity.{axis} must be finite, got {value}");
            }
        }

        Ok(())
    }

    /// Core synthesis settings. Rotation series come from the trajectory.
    pub fn synthesis_config(&self) -> SynthesisConfig {
        let v = self.motion.initial_velocity;
        let time_check = if self.motion.strict_time {
            TimeCheck::StrictlyIncreasing
        } else {
            TimeCheck::Permissive
        };
        SynthesisConfig::default()
            .with_initial_velocity(v.x, v.y, v.z)
            .with_gravity(self.motion.gravity)
            .with_time_check(time_check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[motion]
gravity = -1.62
strict_time = true

[motion.initial_velocity]
z = -10.0

[output]
format = "json"
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.motion.gravity, -1.62);
        assert_eq!(
            config.motion.initial_velocity,
            Velocity {
                x: 0.0,
                y: 0.0,
                z: -10.0
            }
        );
        assert!(config.motion.strict_time);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "motion": {
                "gravity": -9.8,
                "initial_velocity": { "x": 1.0, "y": 2.0, "z": 3.0 }
            },
            "output": { "format": "csv" }
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.motion.gravity, -9.8);
        assert_eq!(config.motion.initial_velocity.y, 2.0);
        assert!(!config.motion.strict_time);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.motion.gravity, -9.81);
        assert_eq!(config.motion.initial_velocity, Velocity::default());
        assert_eq!(config.output.format, OutputFormat::Csv);
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let config = Config::from_toml("[motion]\ngravity = 0.0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("motion.gravity"));
    }

    #[test]
    fn test_rejects_non_finite_velocity() {
        let mut config = Config::default();
        config.motion.initial_velocity.y = f64::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("initial_velocity.y"));
    }

    #[test]
    fn test_synthesis_config() {
        let config = Config::from_toml(
            "[motion]\ngravity = -1.62\nstrict_time = true\n[motion.initial_velocity]\nx = 4.0\n",
        )
        .unwrap();
        let synthesis = config.synthesis_config();
        assert_eq!(synthesis.gravity, -1.62);
        assert_eq!(synthesis.initial_vx, 4.0);
        assert_eq!(synthesis.time_check, TimeCheck::StrictlyIncreasing);
        assert_eq!(synthesis.rx, None);
    }
}
