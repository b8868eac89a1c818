use scraper::{ElementRef, Html};

const RCDATA_TAG: &str = "textarea";

/// Renders a job description body for display.
pub trait DescriptionRenderer: Send + Sync {
    fn render(&self, html: &str) -> String;
}

/// Decodes entities, then converts the markup to markdown for the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownDescriptionRenderer;

impl DescriptionRenderer for MarkdownDescriptionRenderer {
    fn render(&self, html: &str) -> String {
        html2md::parse_html(&decode_entities(html))
            .trim()
            .to_string()
    }
}

/// Replaces named and numeric character references with the characters they
/// stand for. Markup is left in place, so `&lt;b&gt;` becomes `<b>`.
///
/// The text is parsed as the content of a `<textarea>`, where the HTML5
/// tokenizer resolves references but never builds elements.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    // A newline right after the start tag is dropped by the parser, so one is
    // supplied to keep a leading newline in `text`.
    let wrapped = format!("<{RCDATA_TAG}>\n{}</{RCDATA_TAG}>", escape_end_tag(text));
    let fragment = Html::parse_fragment(&wrapped);
    fragment
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == RCDATA_TAG)
        .map(|element| element.text().collect())
        .unwrap_or_else(|| text.to_string())
}

/// Escapes any `</textarea` so the input cannot end the wrapper early.
fn escape_end_tag(text: &str) -> String {
    let needle = format!("</{RCDATA_TAG}");
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..idx]);
        out.push_str("&lt;/");
        last = idx + 2;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::{decode_entities, escape_end_tag};

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_entities("no references here"), "no references here");
    }

    #[test]
    fn end_tag_is_escaped_case_insensitively() {
        assert_eq!(
            escape_end_tag("a</TextArea>b</textarea>"),
            "a&lt;/TextArea>b&lt;/textarea>"
        );
    }
}
