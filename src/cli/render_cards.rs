//! Card rendering operation.
//!
//! Loads product records, renders one card per record with the built-in
//! reviews collaborator, and writes the cards in the configured shape.

use std::io::Write;

use vitrine::{
    CardError, CardOutput, OutputMode, ProductRecord, ProductView, TelemetryEvent, TelemetrySink,
    VitrineConfig, write_cards,
};

use super::io::{read_input, read_template, with_output};

/// Renders the configured input to the configured output.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is inconsistent or names an unknown format
/// - The input or template cannot be read
/// - The input does not hold product records
/// - A template fails to compile or render
/// - Writing to the output fails
pub fn run(config: &VitrineConfig, telemetry: &dyn TelemetrySink) -> Result<(), CardError> {
    let mode = config.output_mode()?;
    let records = read_input(&config.input_source())?;

    let template;
    let output = match &mode {
        OutputMode::Format(format) => CardOutput::Format(*format),
        OutputMode::Template(path) => {
            template = read_template(path)?;
            CardOutput::Template(&template)
        }
    };
    let format_name = match output {
        CardOutput::Format(format) => format.to_string(),
        CardOutput::Template(_) => "template".to_owned(),
    };

    // Render fully before touching the output so a failing template leaves
    // any previous output file intact.
    let mut rendered = Vec::new();
    let count = render_to(&mut rendered, &records, output)?;
    with_output(config.output_path(), |writer| {
        writer.write_all(&rendered).map_err(|e| CardError::io(&e))
    })?;

    tracing::info!("rendered {count} product cards as {format_name}");
    telemetry.record(TelemetryEvent::CardsRendered {
        count,
        format: format_name,
    });
    Ok(())
}

/// Renders records with the default product view into `writer`.
fn render_to<W: Write>(
    writer: &mut W,
    records: &[ProductRecord],
    output: CardOutput<'_>,
) -> Result<usize, CardError> {
    write_cards(writer, &ProductView::default(), records, output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;
    use vitrine::telemetry::test_support::RecordingTelemetrySink;

    use super::*;

    const HAMMER_JSON: &str = r#"[{"id": 1, "brand": "Acme", "category": "Tools", "type": "Hammer",
        "description": "Steel", "weight": 2, "discount": 0, "taxes": 0.1, "subtotal": 10,
        "total": 11, "reviews": []}]"#;

    struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        fn path(&self, name: &str) -> Utf8PathBuf {
            Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("temp path should be UTF-8")
        }

        fn write(&self, name: &str, content: &str) -> String {
            let path = self.path(name);
            fs::write(&path, content).expect("write workspace file");
            path.into_string()
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.path(name)).expect("read workspace file")
        }
    }

    #[fixture]
    fn workspace() -> Workspace {
        Workspace {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn config_for(workspace: &Workspace) -> VitrineConfig {
        VitrineConfig {
            input: Some(workspace.write("products.json", HAMMER_JSON)),
            output: Some(workspace.path("cards.out").into_string()),
            ..Default::default()
        }
    }

    #[rstest]
    fn renders_text_cards_by_default(workspace: Workspace) {
        let sink = RecordingTelemetrySink::default();

        run(&config_for(&workspace), &sink).expect("run should succeed");

        let output = workspace.read("cards.out");
        assert!(output.contains("| ID: 1"), "got:\n{output}");
        assert!(output.contains("| Total: 11"), "got:\n{output}");
        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::CardsRendered {
                count: 1,
                format: "text".to_owned(),
            }]
        );
    }

    #[rstest]
    fn renders_configured_format(workspace: Workspace) {
        let config = VitrineConfig {
            format: Some("html".to_owned()),
            ..config_for(&workspace)
        };

        run(&config, &RecordingTelemetrySink::default()).expect("run should succeed");

        let output = workspace.read("cards.out");
        assert!(output.contains(r#"<p class="card-text">Brand: Acme</p>"#), "got:\n{output}");
    }

    #[rstest]
    fn renders_template_file(workspace: Workspace) {
        let sink = RecordingTelemetrySink::default();
        let config = VitrineConfig {
            template: Some(workspace.write(
                "cards.j2",
                "{% for c in cards %}{{ c.product.brand }}={{ c.product.total }}{% endfor %}",
            )),
            ..config_for(&workspace)
        };

        run(&config, &sink).expect("run should succeed");

        assert_eq!(workspace.read("cards.out"), "Acme=11");
        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::CardsRendered {
                count: 1,
                format: "template".to_owned(),
            }]
        );
    }

    #[rstest]
    fn rejects_invalid_input_without_writing(workspace: Workspace) {
        let sink = RecordingTelemetrySink::default();
        let config = VitrineConfig {
            input: Some(workspace.write("invalid.json", "[1, 2]")),
            ..config_for(&workspace)
        };

        let result = run(&config, &sink);

        assert!(matches!(result, Err(CardError::InvalidInput { .. })), "got {result:?}");
        assert!(sink.take().is_empty(), "no telemetry for failed runs");
        assert!(!workspace.path("cards.out").exists());
    }

    #[rstest]
    fn template_error_keeps_existing_output(workspace: Workspace) {
        let sink = RecordingTelemetrySink::default();
        workspace.write("cards.out", "previous cards");
        let config = VitrineConfig {
            template: Some(workspace.write(
                "cards.j2",
                "{% for c in cards %}{{ c.product.colour }}{% endfor %}",
            )),
            ..config_for(&workspace)
        };

        let result = run(&config, &sink);

        assert!(matches!(result, Err(CardError::Template { .. })), "got {result:?}");
        assert_eq!(workspace.read("cards.out"), "previous cards");
        assert!(sink.take().is_empty(), "no telemetry for failed runs");
    }

    #[rstest]
    fn rejects_conflicting_output_options(workspace: Workspace) {
        let config = VitrineConfig {
            format: Some("html".to_owned()),
            template: Some("cards.j2".to_owned()),
            ..config_for(&workspace)
        };

        let result = run(&config, &RecordingTelemetrySink::default());

        assert!(matches!(result, Err(CardError::Configuration { .. })), "got {result:?}");
    }
}
