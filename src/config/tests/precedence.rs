//! Tests for configuration layer precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use crate::VitrineConfig;
use crate::config::OutputMode;
use crate::error::CardError;
use crate::render::CardFormat;

/// A named layer and its JSON content, lowest precedence first.
type Layers<'a> = Vec<(&'a str, Value)>;

fn compose(layers: Layers<'_>) -> MergeComposer {
    let mut composer = MergeComposer::new();
    for (kind, value) in layers {
        match kind {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            other => panic!("unknown layer kind: {other}"),
        }
    }
    composer
}

fn resolve(layers: Layers<'_>) -> VitrineConfig {
    VitrineConfig::from_layers(&compose(layers).layers()).expect("layers should merge")
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"input": "default.json"})), ("file", json!({"input": "file.json"}))],
    "input",
    "file.json"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"format": "markdown"})), ("environment", json!({"format": "html"}))],
    "format",
    "html"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"output": "env.txt"})), ("cli", json!({"output": "cli.txt"}))],
    "output",
    "cli.txt"
)]
#[case::cli_wins_across_every_layer(
    vec![
        ("defaults", json!({"template": "default.j2"})),
        ("file", json!({"template": "file.j2"})),
        ("environment", json!({"template": "env.j2"})),
        ("cli", json!({"template": "cli.j2"}))
    ],
    "template",
    "cli.j2"
)]
fn higher_layer_wins(#[case] layers: Layers<'_>, #[case] field: &str, #[case] expected: &str) {
    let config = resolve(layers);

    let actual = match field {
        "input" => config.input.as_deref(),
        "format" => config.format.as_deref(),
        "template" => config.template.as_deref(),
        "output" => config.output.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{field} should come from the highest layer");
}

#[rstest]
fn defaults_are_none_when_no_sources_provided() {
    let config = resolve(vec![("defaults", json!({"input": null, "format": null}))]);

    assert!(config.input.is_none(), "input should be None");
    assert!(config.format.is_none(), "format should be None");
    assert!(config.template.is_none(), "template should be None");
    assert!(config.output.is_none(), "output should be None");
    assert!(!config.telemetry, "telemetry should default to false");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = resolve(vec![
        ("defaults", json!({"input": "default.json", "format": "markdown"})),
        ("cli", json!({"input": "cli.json"})),
    ]);

    assert_eq!(config.input.as_deref(), Some("cli.json"));
    assert_eq!(config.format.as_deref(), Some("markdown"), "default format is kept");
}

#[rstest]
fn telemetry_loads_from_file_layer() {
    let config = resolve(vec![("file", json!({"telemetry": true}))]);

    assert!(config.telemetry, "file layer should enable telemetry");
}

#[rstest]
#[case::cli_template_over_file_format(
    vec![("file", json!({"format": "html"})), ("cli", json!({"template": "cards.j2"}))],
    OutputMode::Template("cards.j2".into())
)]
#[case::cli_template_over_env_format(
    vec![("environment", json!({"format": "markdown"})), ("cli", json!({"template": "cards.j2"}))],
    OutputMode::Template("cards.j2".into())
)]
#[case::cli_format_over_env_template(
    vec![("environment", json!({"template": "cards.j2"})), ("cli", json!({"format": "html"}))],
    OutputMode::Format(CardFormat::Html)
)]
#[case::env_format_over_file_template(
    vec![("file", json!({"template": "cards.j2"})), ("environment", json!({"format": "jsonl"}))],
    OutputMode::Format(CardFormat::Jsonl)
)]
fn output_choice_follows_layer_precedence(#[case] layers: Layers<'_>, #[case] expected: OutputMode) {
    assert_eq!(resolve(layers).output_mode(), Ok(expected));
}

#[rstest]
#[case::same_cli_layer(vec![("cli", json!({"format": "html", "template": "cards.j2"}))])]
#[case::same_file_layer(vec![
    ("file", json!({"format": "html", "template": "cards.j2"})),
    ("cli", json!({"input": "products.json"}))
])]
fn output_choice_conflict_within_one_layer_is_rejected(#[case] layers: Layers<'_>) {
    let result = resolve(layers).output_mode();

    assert!(
        matches!(result, Err(CardError::Configuration { ref message }) if message.contains("not both")),
        "expected a conflict error, got {result:?}"
    );
}
