//! Layer collection and output option provenance.
//!
//! Layers are gathered in precedence order (defaults, configuration file,
//! environment, command line) and merged with ortho-config's declarative
//! merge. The layers are kept so the loader can tell which one supplied
//! `format` and which supplied `template`.

use std::ffi::OsString;

use clap::Parser;
use ortho_config::{ConfigDiscovery, MergeComposer, MergeLayer, MergeProvenance};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CardError;

use super::VitrineConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "VITRINE_CONFIG_PATH";

/// Options read from `VITRINE_<NAME>` environment variables.
const ENV_OPTIONS: [(&str, &str); 4] = [
    ("input", "VITRINE_INPUT"),
    ("format", "VITRINE_FORMAT"),
    ("template", "VITRINE_TEMPLATE"),
    ("output", "VITRINE_OUTPUT"),
];

/// Command-line arguments.
///
/// Unset options are omitted from the command-line layer so they never mask
/// values from lower layers.
#[derive(Debug, Clone, Default, Parser, Serialize)]
#[command(name = "vitrine", version, about = "Renders product records as cards")]
pub struct CliArgs {
    /// Product records file; `-` reads stdin.
    #[arg(short = 'i', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Output format: text, html, markdown or jsonl.
    #[arg(short = 'f', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Jinja2 template that shapes the output.
    #[arg(short = 't', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Output file; stdout when omitted.
    #[arg(short = 'o', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Emit telemetry events to stderr as JSON lines.
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub telemetry: bool,
}

impl CliArgs {
    /// Parses arguments from an iterator, as [`Parser::try_parse_from`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Configuration`] when the arguments are invalid.
    pub fn parse_args<I, T>(args: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|error| CardError::Configuration {
            message: error.to_string(),
        })
    }
}

/// Configuration layer, ordered from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigLayer {
    /// Built-in defaults.
    Defaults,
    /// A discovered or explicit configuration file.
    File,
    /// `VITRINE_*` environment variables.
    Environment,
    /// Command-line arguments.
    Cli,
}

impl From<MergeProvenance> for ConfigLayer {
    fn from(provenance: MergeProvenance) -> Self {
        match provenance {
            MergeProvenance::File => Self::File,
            MergeProvenance::Environment => Self::Environment,
            MergeProvenance::Cli => Self::Cli,
            _ => Self::Defaults,
        }
    }
}

/// The highest layers that set `format` and `template`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSources {
    /// Layer that supplied the effective `format`, if any.
    pub format: Option<ConfigLayer>,
    /// Layer that supplied the effective `template`, if any.
    pub template: Option<ConfigLayer>,
}

impl OutputSources {
    /// Records, for each output option, the last layer that sets it.
    #[must_use]
    pub fn from_layers(layers: &[MergeLayer<'_>]) -> Self {
        layers.iter().fold(Self::default(), |sources, layer| {
            let value = layer.clone().into_value();
            let layer_kind = ConfigLayer::from(layer.provenance());
            Self {
                format: if is_set(&value, "format") {
                    Some(layer_kind)
                } else {
                    sources.format
                },
                template: if is_set(&value, "template") {
                    Some(layer_kind)
                } else {
                    sources.template
                },
            }
        })
    }
}

fn is_set(layer: &Value, key: &str) -> bool {
    layer.get(key).is_some_and(|value| !value.is_null())
}

/// Collects every configuration layer for the given command line.
///
/// # Errors
///
/// Returns [`CardError::Configuration`] when a configuration file cannot be
/// parsed or a layer cannot be represented as JSON.
pub fn collect_layers(cli: &CliArgs) -> Result<Vec<MergeLayer<'static>>, CardError> {
    let mut composer = MergeComposer::new();
    composer.push_defaults(to_layer_value(&VitrineConfig::default())?);

    if let Some(file) = discover_file_layer()? {
        composer.push_file(file, None);
    }

    composer.push_environment(environment_layer());
    composer.push_cli(to_layer_value(cli)?);
    Ok(composer.layers())
}

fn to_layer_value<T: Serialize>(value: &T) -> Result<Value, CardError> {
    serde_json::to_value(value).map_err(|error| CardError::Configuration {
        message: format!("failed to encode configuration layer: {error}"),
    })
}

fn discover_file_layer() -> Result<Option<Value>, CardError> {
    let discovery = ConfigDiscovery::builder("vitrine")
        .env_var(CONFIG_PATH_ENV)
        .config_file_name("vitrine.toml")
        .dotfile_name(".vitrine.toml")
        .build();

    let Some(figment) = discovery
        .load_first()
        .map_err(|error| CardError::Configuration {
            message: error.to_string(),
        })?
    else {
        return Ok(None);
    };

    figment
        .extract::<Value>()
        .map(Some)
        .map_err(|error| CardError::Configuration {
            message: format!("invalid configuration file: {error}"),
        })
}

fn environment_layer() -> Value {
    let options: Map<String, Value> = ENV_OPTIONS
        .iter()
        .filter_map(|&(key, variable)| {
            std::env::var(variable)
                .ok()
                .map(|value| (key.to_owned(), Value::String(value)))
        })
        .collect();
    Value::Object(options)
}
