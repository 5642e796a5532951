//! HTML card writer.
//!
//! Cards are rendered through a built-in `minijinja` template registered
//! under an `.html` name, so the engine's auto-escaping applies to every
//! interpolated value.

use std::io::Write;

use minijinja::{Environment, context};

use crate::error::CardError;
use crate::view::{Card, REVIEWS_HEADING};

const CARD_TEMPLATE_NAME: &str = "card.html";

const CARD_TEMPLATE: &str = r#"{% for card in cards -%}
<div class="card text-black bg-transparent m-3 mr-4">
    <div class="card-body">
{%- for field in card.fields %}
        <p class="card-text">{{ field.label }}: {{ field.value }}</p>
{%- endfor %}

        <p class="card-text"><strong>{{ heading }}</strong></p>
        <ul class="reviews">
{%- for review in card.reviews %}
            <li>{{ review }}</li>
{%- endfor %}
        </ul>
    </div>
</div>
{% endfor %}"#;

/// Writes cards as HTML markup, one `div.card` per card.
///
/// # Errors
///
/// Returns [`CardError::Template`] if the built-in template fails to render
/// and [`CardError::Io`] if writing fails.
pub fn write_html<W: Write>(writer: &mut W, cards: &[Card]) -> Result<(), CardError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(CARD_TEMPLATE_NAME, CARD_TEMPLATE)
        .map_err(|e| CardError::Template {
            message: format!("built-in HTML template is invalid: {e}"),
        })?;

    let tmpl = env
        .get_template(CARD_TEMPLATE_NAME)
        .map_err(|e| CardError::Template {
            message: format!("failed to retrieve HTML template: {e}"),
        })?;

    let output = tmpl
        .render(context! {
            cards => cards,
            heading => REVIEWS_HEADING,
        })
        .map_err(|e| CardError::Template {
            message: format!("HTML rendering failed: {e}"),
        })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| CardError::io(&e))
}
