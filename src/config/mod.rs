//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults**: Built-in application defaults
//! 2. **Configuration file**: the file named by `VITRINE_CONFIG_PATH`, or
//!    the first `vitrine.toml`/`.vitrine.toml` found in the current, home or
//!    XDG config directory
//! 3. **Environment variables**: `VITRINE_INPUT`, `VITRINE_FORMAT`,
//!    `VITRINE_TEMPLATE`, `VITRINE_OUTPUT`
//! 4. **Command-line arguments**: `--input`/`-i`, `--format`/`-f`,
//!    `--template`/`-t`, `--output`/`-o`
//!
//! `format` and `template` are alternatives. When they come from different
//! layers the higher layer wins and the other option is dropped; setting
//! both in the same layer is an error.
//!
//! # Configuration File
//!
//! Place `.vitrine.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! input = "products.json"
//! format = "html"
//! output = "cards.html"
//! telemetry = true
//! ```

mod layers;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::{MergeLayer, OrthoConfig};
use serde::{Deserialize, Serialize};

pub use layers::{CONFIG_PATH_ENV, CliArgs, ConfigLayer, OutputSources, collect_layers};

use crate::error::CardError;
use crate::render::CardFormat;

/// Input path value meaning "read from stdin".
const STDIN_MARKER: &str = "-";

/// Where product records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A JSON or JSONL file.
    File(Utf8PathBuf),
}

/// How cards are shaped, determined by `format` and `template`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// A built-in format.
    Format(CardFormat),
    /// A Jinja2 template read from the given path.
    Template(Utf8PathBuf),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `VITRINE_INPUT` or `--input`: Product records file (`-` for stdin)
/// - `VITRINE_FORMAT` or `--format`: Output format
/// - `VITRINE_TEMPLATE` or `--template`: Jinja2 template file
/// - `VITRINE_OUTPUT` or `--output`: Output file
///
/// # Example
///
/// ```no_run
/// use vitrine::{CliArgs, VitrineConfig};
///
/// let cli = CliArgs::parse_args(["vitrine", "--format", "html"]).expect("valid arguments");
/// let config = VitrineConfig::load_with_cli(&cli).expect("failed to load configuration");
/// let mode = config.output_mode().expect("valid output mode");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "VITRINE",
    discovery(
        dotfile_name = ".vitrine.toml",
        config_file_name = "vitrine.toml",
        app_name = "vitrine"
    )
)]
pub struct VitrineConfig {
    /// Path of the product records file; unset or `-` reads stdin.
    ///
    /// Can be provided via:
    /// - CLI: `--input <PATH>` or `-i <PATH>`
    /// - Environment: `VITRINE_INPUT`
    /// - Config file: `input = "..."`
    #[ortho_config(cli_short = 'i')]
    pub input: Option<String>,

    /// Built-in output format: `text`, `html`, `markdown` or `jsonl`.
    ///
    /// Defaults to `text`. Cannot be combined with `template`.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `VITRINE_FORMAT`
    /// - Config file: `format = "..."`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Path of a Jinja2 template that shapes the output.
    ///
    /// Can be provided via:
    /// - CLI: `--template <PATH>` or `-t <PATH>`
    /// - Environment: `VITRINE_TEMPLATE`
    /// - Config file: `template = "..."`
    #[ortho_config(cli_short = 't')]
    pub template: Option<String>,

    /// Path of the output file; unset writes to stdout.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Environment: `VITRINE_OUTPUT`
    /// - Config file: `output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so there is no `VITRINE_TELEMETRY`.
    #[ortho_config()]
    pub telemetry: bool,
}

impl VitrineConfig {
    /// Loads the configuration for `cli`, reading the configuration file and
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Configuration`] when a layer cannot be loaded or
    /// merged.
    pub fn load_with_cli(cli: &CliArgs) -> Result<Self, CardError> {
        Self::from_layers(&collect_layers(cli)?)
    }

    /// Merges `layers` and settles `format` against `template`.
    ///
    /// When the two options come from different layers, the option from the
    /// lower layer is cleared. When they share a layer both are kept, so
    /// [`Self::validate`] reports the conflict.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Configuration`] when the layers cannot be merged.
    pub fn from_layers(layers: &[MergeLayer<'_>]) -> Result<Self, CardError> {
        let mut config = Self::merge_from_layers(layers.iter().cloned()).map_err(|error| {
            CardError::Configuration {
                message: error.to_string(),
            }
        })?;

        let sources = OutputSources::from_layers(layers);
        if let (Some(format_layer), Some(template_layer)) = (sources.format, sources.template) {
            if template_layer > format_layer {
                config.format = None;
            } else if format_layer > template_layer {
                config.template = None;
            }
        }
        Ok(config)
    }

    /// Checks that the configured options can be used together.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Configuration`] when both `format` and
    /// `template` are set, which after [`Self::from_layers`] means a single
    /// layer set both.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.format.is_some() && self.template.is_some() {
            return Err(CardError::Configuration {
                message: "use either --format or --template, not both".to_owned(),
            });
        }
        Ok(())
    }

    /// Returns where product records should be read from.
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        match self.input.as_deref() {
            None | Some(STDIN_MARKER) => InputSource::Stdin,
            Some(path) => InputSource::File(Utf8PathBuf::from(path)),
        }
    }

    /// Returns the output file path, or `None` for stdout.
    #[must_use]
    pub fn output_path(&self) -> Option<&Utf8Path> {
        self.output.as_deref().map(Utf8Path::new)
    }

    /// Determines how cards are shaped.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Configuration`] when the configuration is
    /// inconsistent (see [`Self::validate`]) or the format is unknown.
    pub fn output_mode(&self) -> Result<OutputMode, CardError> {
        self.validate()?;

        if let Some(template) = &self.template {
            return Ok(OutputMode::Template(Utf8PathBuf::from(template)));
        }

        let format = self
            .format
            .as_deref()
            .map_or(Ok(CardFormat::default()), str::parse)?;
        Ok(OutputMode::Format(format))
    }
}

#[cfg(test)]
mod tests;
