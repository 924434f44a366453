//! Renders the emitted node sequence to an HTML body.

use std::borrow::Cow;

use crate::inline_parser::{self, InlineRules};
use crate::syntax::Node;

/// Render nodes to HTML block elements, joined by newlines.
///
/// Inline substitution applies to heading, list item, and paragraph text.
/// Fence content is HTML-escaped and emitted as one `<pre><code>` element
/// per fence; raw HTML lines pass through byte for byte.
pub fn render_body<'a>(nodes: impl IntoIterator<Item = Node<'a>>, rules: InlineRules) -> String {
    let mut blocks: Vec<String> = Vec::new();
    // Lines of the currently open fence, escaped on arrival.
    let mut code: Option<Vec<Cow<'a, str>>> = None;

    for node in nodes {
        match node {
            Node::CodeFenceOpen => code = Some(Vec::new()),
            Node::CodeLine(raw) => {
                if let Some(lines) = code.as_mut() {
                    lines.push(html_escape::encode_text(raw));
                }
            }
            Node::CodeFenceClose => {
                if let Some(lines) = code.take() {
                    blocks.push(format!("<pre><code>{}</code></pre>", lines.join("\n")));
                }
            }
            Node::Heading { level, text } => {
                let text = inline_parser::apply(text, rules);
                blocks.push(format!("<h{level}>{text}</h{level}>"));
            }
            Node::HorizontalRule => blocks.push("<hr>".to_string()),
            Node::Paragraph(text) => {
                blocks.push(format!("<p>{}</p>", inline_parser::apply(text, rules)));
            }
            Node::RawHtml(line) => blocks.push(line.to_string()),
            Node::ListOpen => blocks.push("<ul>".to_string()),
            Node::ListItem(text) => {
                blocks.push(format!("<li>{}</li>", inline_parser::apply(text, rules)));
            }
            Node::ListClose => blocks.push("</ul>".to_string()),
        }
    }

    blocks.join("\n")
}
