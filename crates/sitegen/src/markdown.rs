// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for long-form catalog fields.
//!
//! Uses pulldown-cmark directly. Headings get `id` anchors so sections can be
//! linked from elsewhere on the site.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html};

/// Render markdown to HTML.
///
/// Raw HTML in the source is escaped rather than passed through; catalog
/// text is content, not markup.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });

    let events = inject_heading_anchors(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Slugify text for use as an HTML id attribute.
///
/// Lowercases, replaces non-alphanumeric runs with hyphens, strips
/// leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Replace each heading's start/end tags with `<hN id="slug">…</hN>`.
fn inject_heading_anchors<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out: Vec<Event<'a>> = Vec::new();
    let mut heading: Option<(HeadingLevel, String, Vec<Event<'a>>)> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((level, String::new(), Vec::new()));
            }
            Event::End(TagEnd::Heading(level)) => {
                let (_, text, inner) = heading.take().unwrap_or((level, String::new(), Vec::new()));
                let n = heading_number(level);
                let slug = slugify(&text);
                if slug.is_empty() {
                    out.push(Event::Html(format!("<h{}>", n).into()));
                } else {
                    out.push(Event::Html(format!("<h{} id=\"{}\">", n, slug).into()));
                }
                out.extend(inner);
                out.push(Event::Html(format!("</h{}>\n", n).into()));
            }
            other => match heading.as_mut() {
                Some((_, text, inner)) => {
                    if let Event::Text(t) | Event::Code(t) = &other {
                        text.push_str(t);
                    }
                    inner.push(other);
                }
                None => out.push(other),
            },
        }
    }

    out
}
