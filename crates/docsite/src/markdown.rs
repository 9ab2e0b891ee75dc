// SPDX-FileCopyrightText: 2026 Circuitdocs Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for card descriptions and announcement content.
//!
//! Uses pulldown-cmark with GFM extensions. Raw HTML fragments pass
//! through unchanged per the CommonMark spec, which is how descriptions
//! embed arbitrary markup. Headings get `id` anchors so long-form
//! fragments remain linkable.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html};

/// Render markdown to HTML.
///
/// Pure function: no I/O, no caching, recomputed per call.
pub fn render_markdown(content: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(content, options);
    let events = anchor_headings(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Slugify text for use as an HTML id attribute.
///
/// Lowercases, collapses non-alphanumeric runs to single hyphens, strips
/// leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn level_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Rewrite heading events so each heading carries an `id` derived from
/// its text content.
fn anchor_headings<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut open_level: Option<u8> = None;
    let mut text = String::new();
    let mut inner: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if open_level.is_none() => {
                open_level = Some(level_num(level));
                text.clear();
                inner.clear();
            }
            Event::End(TagEnd::Heading(_)) if open_level.is_some() => {
                let num = open_level.take().unwrap_or(1);
                let slug = slugify(&text);
                if slug.is_empty() {
                    events.push(Event::Html(format!("<h{num}>").into()));
                } else {
                    events.push(Event::Html(format!("<h{num} id=\"{slug}\">").into()));
                }
                events.append(&mut inner);
                events.push(Event::Html(format!("</h{num}>").into()));
            }
            ev if open_level.is_some() => {
                match &ev {
                    Event::Text(t) => text.push_str(t),
                    Event::Code(c) => text.push_str(c),
                    _ => {}
                }
                inner.push(ev);
            }
            ev => events.push(ev),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let html = render_markdown("# Hello\n\nWorld");
        assert!(html.contains(r#"<h1 id="hello">"#));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_inline_text_stays_in_paragraph() {
        let html = render_markdown("Create and verify your first circuit.");
        assert_eq!(html.trim(), "<p>Create and verify your first circuit.</p>");
    }

    #[test]
    fn test_raw_html_passthrough() {
        let html = render_markdown("Text with <strong>markup</strong> inline.");
        assert!(html.contains("<strong>markup</strong>"));
    }

    #[test]
    fn test_gfm_table() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_heading_with_code() {
        let html = render_markdown("## Using `api.Compile`\n");
        assert!(html.contains(r#"<h2 id="using-api-compile">"#));
        assert!(html.contains("<code>api.Compile</code>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Leading & Trailing  "), "leading-trailing");
        assert_eq!(slugify("CamelCase123"), "camelcase123");
        assert_eq!(slugify("api.Compile"), "api-compile");
        assert_eq!(slugify("!!!"), "");
    }
}
