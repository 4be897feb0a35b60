use anyhow::{Context, Result};
use clap::Args;
use motion6d::{
    config::{Config, OutputFormat},
    output::{parse_channels, render},
};
use motion6d_core::Trajectory;
use std::{fs, path::PathBuf};

#[derive(Args)]
pub struct SynthesizeArgs {
    /// Path to a JSON trajectory with `time`, `x`, `y`, `z` and optional
    /// `rx`, `ry`, `rz` arrays.
    pub trajectory: PathBuf,

    /// Path to a settings file (TOML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the channels. Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format, overriding the settings file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Comma-separated channel names to emit. Defaults to all six.
    #[arg(long, value_delimiter = ',')]
    pub channels: Vec<String>,
}

impl SynthesizeArgs {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.validate()?;
        let selected = parse_channels(&self.channels)?;

        let source = fs::read_to_string(&self.trajectory)
            .with_context(|| format!("failed to read trajectory {}", self.trajectory.display()))?;
        let trajectory: Trajectory = serde_json::from_str(&source).with_context(|| {
            format!("failed to parse trajectory {}", self.trajectory.display())
        })?;

        tracing::info!(
            "Synthesizing {} samples from {}",
            trajectory.len(),
            self.trajectory.display()
        );

        let channels = trajectory
            .synthesize(&config.synthesis_config())
            .with_context(|| format!("invalid trajectory {}", self.trajectory.display()))?;

        let format = self.format.unwrap_or(config.output.format);
        let rendered = render(&channels, &selected, format)?;

        match &self.output {
            Some(output) => {
                if let Some(parent) = output.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                fs::write(output, rendered)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                tracing::info!("Wrote channels to {}", output.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
