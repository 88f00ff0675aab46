//! HTML snippets used in report fragments and the report page.

use crate::orbit::Instrument;

pub const SECTION_CLOSE: &str = "</section>\n";

const PAGE_TEMPLATE_HEAD: &str = r#"<html>
    <head>
        <title>Cassini traceback</title>
        <meta charset="utf-8">
        <link href="https://fonts.googleapis.com/css?family=Fira+Sans:400,900&display=swap" rel="stylesheet">
        <link href="https://fonts.googleapis.com/css?family=Fira+Mono&display=swap" rel="stylesheet">
        <link href="styles.css" rel="stylesheet">
    </head>
    <body>
        <h1>Cassini Traceback</h1>
"#;

const PAGE_TEMPLATE_TAIL: &str = r#"    </body>
</html>
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A link whose text is the URL itself.
pub fn anchor(url: &str) -> String {
    let url = escape_html(url);
    format!("<a href=\"{url}\">{url}</a>")
}

/// Orbit notes as paragraphs, one per line of the source text.
pub fn orbit_notes_html(notes: &str) -> String {
    let paragraphs = escape_html(notes).replace('\n', "</p><p>");
    format!("<div class=\"orbit-notes\"><p>{}</p></div>", paragraphs)
}

/// Opening of an orbit section: heading plus notes.
pub fn orbit_intro(number: i64, date_range: &str, notes: &str) -> String {
    format!(
        "\n<section>\n    <h2>Orbit {} &mdash; {}</h2>{}\n",
        number,
        escape_html(date_range),
        orbit_notes_html(notes)
    )
}

/// Figure showing one instrument's animation with its time window.
pub fn figure(src: &str, instrument: Instrument, start: &str, finish: &str) -> String {
    format!(
        "<figure class=\"opus-gif\"><img src=\"{}\"/><figcaption>{}<br/>{}&ndash;{}</figcaption></figure>",
        escape_html(src),
        instrument.full_name(),
        escape_html(start),
        escape_html(finish)
    )
}

/// Wrap the concatenated orbit fragments in the report page.
pub fn render_page(body: &str) -> String {
    let mut page = String::with_capacity(PAGE_TEMPLATE_HEAD.len() + body.len() + 32);
    page.push_str(PAGE_TEMPLATE_HEAD);
    page.push_str(body);
    page.push_str(PAGE_TEMPLATE_TAIL);
    page
}
