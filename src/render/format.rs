//! Output format selection for rendered cards.

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;

/// Built-in card output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFormat {
    /// Boxed plain-text cards for terminals.
    #[default]
    Text,
    /// HTML card markup with escaped values.
    Html,
    /// Human-readable Markdown sections.
    Markdown,
    /// Machine-readable JSON Lines (one card per line).
    Jsonl,
}

impl FromStr for CardFormat {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "jsonl" | "json-lines" | "jsonlines" => Ok(Self::Jsonl),
            _ => Err(CardError::Configuration {
                message: format!(
                    "unsupported output format '{s}': valid options are 'text', 'html', 'markdown' or 'jsonl'"
                ),
            }),
        }
    }
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("text", CardFormat::Text)]
    #[case("TXT", CardFormat::Text)]
    #[case("html", CardFormat::Html)]
    #[case("Htm", CardFormat::Html)]
    #[case("markdown", CardFormat::Markdown)]
    #[case("md", CardFormat::Markdown)]
    #[case("jsonl", CardFormat::Jsonl)]
    #[case("JSON-Lines", CardFormat::Jsonl)]
    #[case("jsonlines", CardFormat::Jsonl)]
    fn parses_valid_values(
        #[case] input: &str,
        #[case] expected: CardFormat,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let parsed: CardFormat = input.parse()?;
        if parsed != expected {
            return Err(format!("expected {expected:?}, got {parsed:?}").into());
        }
        Ok(())
    }

    #[rstest]
    #[case("xml")]
    #[case("csv")]
    #[case("")]
    fn rejects_invalid_values(#[case] input: &str) {
        let result: Result<CardFormat, _> = input.parse();

        assert!(
            matches!(result, Err(CardError::Configuration { ref message }) if message.contains("unsupported output format")),
            "expected Configuration error, got {result:?}"
        );
    }

    #[rstest]
    fn display_round_trips_through_parse() -> Result<(), CardError> {
        for format in [
            CardFormat::Text,
            CardFormat::Html,
            CardFormat::Markdown,
            CardFormat::Jsonl,
        ] {
            assert_eq!(format.to_string().parse::<CardFormat>()?, format);
        }
        Ok(())
    }
}
