//! # Output Configuration
//!
//! Controls how the CLI renders resolved attributes: whether colors and
//! emoji are used, and which textual format attributes are printed in.
//!
//! Color follows the `--color=always|never|auto` flag. In `auto` mode it is
//! disabled by `NO_COLOR` (any value), `CLICOLOR=0` or `TERM=dumb`, forced
//! by `CLICOLOR_FORCE=1`, and otherwise decided by whether stdout is a
//! terminal.

use std::env;

use console::style;

use crate::attributes::AttributeMap;
use crate::error::Result;

/// Whether CLI output may use colors and emoji.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Decide from the value of the `--color` flag, consulting the
    /// environment in `auto` mode.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => auto_color(),
        };
        Self { use_color }
    }

    #[cfg(test)]
    pub fn colored() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

fn auto_color() -> bool {
    let var = |name: &str| env::var(name).ok();
    if env::var_os("NO_COLOR").is_some() || var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    match var("CLICOLOR_FORCE").as_deref() {
        Some(force) if !force.is_empty() && force != "0" => true,
        _ => {
            var("TERM").as_deref() != Some("dumb")
                && console::Term::stdout().features().colors_supported()
        }
    }
}

/// The emoji when colors are enabled, the plain marker otherwise.
pub fn emoji<'a>(config: &OutputConfig, symbol: &'a str, marker: &'a str) -> &'a str {
    if config.use_color {
        symbol
    } else {
        marker
    }
}

/// Textual formats attributes can be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeFormat {
    /// `Key: Value` lines, as in a manifest file.
    #[default]
    Manifest,
    Json,
    Yaml,
}

/// Render attributes in the requested format.
///
/// Only the manifest format is colored; JSON and YAML stay machine readable.
pub fn render_attributes(
    attributes: &AttributeMap,
    format: AttributeFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        AttributeFormat::Manifest if config.use_color => Ok(attributes
            .iter()
            .map(|(key, value)| format!("{}: {}\n", style(key).bold().cyan(), value))
            .collect()),
        AttributeFormat::Manifest => Ok(attributes.to_manifest_string()),
        AttributeFormat::Json => {
            let mut json = serde_json::to_string_pretty(attributes)?;
            json.push('\n');
            Ok(json)
        }
        AttributeFormat::Yaml => Ok(serde_yaml::to_string(attributes)?),
    }
}
