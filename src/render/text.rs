//! Plain-text card writer.
//!
//! Each card is drawn as an ASCII box sized to its widest line, measured in
//! terminal columns so wide characters keep the frame aligned.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::CardError;
use crate::view::{Card, REVIEWS_HEADING};

/// Shown under the reviews heading when a card has no review lines.
const NO_REVIEWS_PLACEHOLDER: &str = "(no reviews)";

/// Writes cards as boxed plain text, separated by blank lines.
///
/// # Errors
///
/// Returns [`CardError::Io`] if writing to the output fails.
pub fn write_text<W: Write>(writer: &mut W, cards: &[Card]) -> Result<(), CardError> {
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| CardError::io(&e))?;
        }
        write_boxed(writer, &card_body(card))?;
    }
    Ok(())
}

/// Collects the physical lines of a card, splitting multi-line values.
fn card_body(card: &Card) -> Vec<String> {
    let mut lines: Vec<String> = card
        .field_lines()
        .iter()
        .flat_map(|line| line.lines().map(str::to_owned).collect::<Vec<_>>())
        .collect();

    lines.push(String::new());
    lines.push(REVIEWS_HEADING.to_owned());

    if card.reviews.is_empty() {
        lines.push(format!("  {NO_REVIEWS_PLACEHOLDER}"));
    } else {
        for review in &card.reviews {
            let mut review_lines = review.lines();
            if let Some(first) = review_lines.next() {
                lines.push(format!("  - {first}"));
            }
            lines.extend(review_lines.map(|rest| format!("    {rest}")));
        }
    }
    lines
}

fn write_boxed<W: Write>(writer: &mut W, lines: &[String]) -> Result<(), CardError> {
    let width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    writeln!(writer, "{border}").map_err(|e| CardError::io(&e))?;
    for line in lines {
        let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(line.as_str())));
        writeln!(writer, "| {line}{padding} |").map_err(|e| CardError::io(&e))?;
    }
    writeln!(writer, "{border}").map_err(|e| CardError::io(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::write_text;
    use crate::render::test_helpers::{ProductBuilder, assert_contains, render_cards};
    use crate::view::{Card, ProductView};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn render(cards: &[Card]) -> Result<String, Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        write_text(&mut buffer, cards)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[rstest]
    fn draws_sample_card() -> TestResult {
        let cards = render_cards(&[ProductBuilder::hammer().build()]);

        let output = render(&cards)?;

        insta::assert_snapshot!(output, @r"
        +--------------------+
        | ID: 1              |
        | Brand: Acme        |
        | Category: Tools    |
        | Type: Hammer       |
        | Description: Steel |
        | Weight: 2          |
        | Discount: 0        |
        | Taxes: 0.1         |
        | Subtotal: 10       |
        | Total: 11          |
        |                    |
        | Reviews            |
        |   (no reviews)     |
        +--------------------+
        ");
        Ok(())
    }

    #[rstest]
    fn lists_review_lines_as_bullets() -> TestResult {
        let record = ProductBuilder::new(5).review(4, "Solid").build();

        let output = render(&[ProductView::default().render(&record)])?;

        assert_contains(&output, "|   - 4/5 Solid")?;
        Ok(())
    }

    #[rstest]
    fn aligns_wide_characters() -> TestResult {
        let record = ProductBuilder::new(9).brand("東京").build();

        let output = render(&[ProductView::default().render(&record)])?;

        let widths: Vec<usize> = output
            .lines()
            .map(unicode_width::UnicodeWidthStr::width)
            .collect();
        assert!(
            widths.windows(2).all(|pair| pair.first() == pair.last()),
            "every line should have the same column width:\n{output}"
        );
        Ok(())
    }

    #[rstest]
    fn splits_multi_line_values() -> TestResult {
        let record = ProductBuilder::new(2).description("Line one\nLine two").build();

        let output = render(&[ProductView::default().render(&record)])?;

        assert_contains(&output, "| Description: Line one")?;
        assert_contains(&output, "| Line two")?;
        Ok(())
    }

    #[rstest]
    fn separates_cards_with_blank_line() -> TestResult {
        let cards = render_cards(&[ProductBuilder::new(1).build(), ProductBuilder::new(2).build()]);

        let output = render(&cards)?;

        assert_contains(&output, "+\n\n+")?;
        Ok(())
    }

    #[rstest]
    fn no_cards_writes_nothing() -> TestResult {
        assert_eq!(render(&[])?, "");
        Ok(())
    }
}
