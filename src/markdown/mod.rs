//! Markdown rendering for dialog content.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render markdown to an HTML fragment.
///
/// With `external_links` set, links open in a new browsing context
/// (`target="_blank" rel="noreferrer"`) instead of navigating the host away.
pub fn render_html(content: &str, external_links: bool) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(content, options);

    let mut out = String::new();
    if external_links {
        let events = parser.map(|event| match event {
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => {
                let mut a = format!("<a href=\"{}\"", escape_attr(&dest_url));
                if !title.is_empty() {
                    a.push_str(&format!(" title=\"{}\"", escape_attr(&title)));
                }
                a.push_str(" rel=\"noreferrer\" target=\"_blank\">");
                Event::Html(a.into())
            }
            Event::End(TagEnd::Link) => Event::Html("</a>".into()),
            other => other,
        });
        html::push_html(&mut out, events);
    } else {
        html::push_html(&mut out, parser);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let out = render_html("Some **bold** text", false);
        assert!(out.contains("<strong>bold</strong>"));
    }

    #[test]
    fn plain_links_keep_default_rendering() {
        let out = render_html("[docs](https://example.com)", false);
        assert!(out.contains("<a href=\"https://example.com\">docs</a>"));
        assert!(!out.contains("target"));
    }

    #[test]
    fn external_links_open_in_new_context() {
        let out = render_html("[docs](https://example.com)", true);
        assert!(out.contains("href=\"https://example.com\""));
        assert!(out.contains("rel=\"noreferrer\""));
        assert!(out.contains("target=\"_blank\""));
        assert!(out.contains(">docs</a>"));
    }

    #[test]
    fn external_mode_escapes_attribute_text() {
        let out = render_html("[x](https://example.com/?a=1&b=2)", true);
        assert!(out.contains("a=1&amp;b=2"));
    }
}
