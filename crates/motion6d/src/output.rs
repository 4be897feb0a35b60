//! Rendering synthesized channels as text.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use motion6d_core::{Channel, Channels};

/// Parse a list of channel names, keeping the order given.
pub fn parse_channels<S: AsRef<str>>(names: &[S]) -> Result<Vec<Channel>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            Channel::parse(name).with_context(|| format!("unknown channel `{name}`"))
        })
        .collect()
}

/// Render `selected` channels, or all six when `selected` is empty.
pub fn render(channels: &Channels, selected: &[Channel], format: OutputFormat) -> Result<String> {
    let all = Channel::ALL;
    let selected = if selected.is_empty() {
        &all[..]
    } else {
        selected
    };
    match format {
        OutputFormat::Csv => render_csv(channels, selected),
        OutputFormat::Json => render_json(channels, selected),
    }
}

fn render_csv(channels: &Channels, selected: &[Channel]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(selected.iter().map(|c| c.name()))
        .context("failed to write CSV header")?;

    for i in 0..channels.len() {
        let row = selected.iter().map(|c| channels.get(*c)[i].to_string());
        writer
            .write_record(row)
            .with_context(|| format!("failed to write CSV row {i}"))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| err.into_error())
        .context("failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

// non-finite samples serialize as `null`
fn render_json(channels: &Channels, selected: &[Channel]) -> Result<String> {
    let object: serde_json::Map<String, serde_json::Value> = selected
        .iter()
        .map(|channel| -> serde_json::Result<(String, serde_json::Value)> {
            let series = serde_json::to_value(channels.get(*channel))?;
            Ok((channel.name().to_string(), series))
        })
        .collect::<serde_json::Result<_>>()?;
    serde_json::to_string_pretty(&object).context("failed to render channels as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_channels() -> Channels {
        Channels {
            orientation_x: vec![0.0, 0.0],
            orientation_y: vec![0.0, 0.5],
            orientation_z: vec![1.0, 1.0],
            gravity_x: vec![f64::NAN, 0.0],
            gravity_y: vec![f64::NAN, 0.25],
            gravity_z: vec![f64::NAN, -1.0],
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = render(&sample_channels(), &[], OutputFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "orientation_x,orientation_y,orientation_z,gravity_x,gravity_y,gravity_z",
                "0,0,1,NaN,NaN,NaN",
                "0,0.5,1,0,0.25,-1",
            ]
        );
    }

    #[test]
    fn csv_subset_keeps_requested_order() {
        let selected = [Channel::GravityZ, Channel::OrientationY];
        let csv = render(&sample_channels(), &selected, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "gravity_z,orientation_y\nNaN,0\n-1,0.5\n");
    }

    #[test]
    fn csv_without_samples_is_header_only() {
        let selected = [Channel::OrientationZ, Channel::GravityX];
        let csv = render(&Channels::default(), &selected, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "orientation_z,gravity_x\n");
    }

    #[test]
    fn json_uses_null_for_undefined_samples() {
        let json = render(&sample_channels(), &[Channel::GravityZ], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["gravity_z"], serde_json::json!([null, -1.0]));
    }

    #[test]
    fn parses_channel_names() {
        let channels = parse_channels(&["gravity_z", "ORIENTATION_X"]).unwrap();
        assert_eq!(channels, [Channel::GravityZ, Channel::OrientationX]);

        let err = parse_channels(&["gravity_w"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown channel `gravity_w`");
    }
}
