use crate::syntax::{Mode, Node};

mod code_blocks;
mod headings;
mod lists;
mod utils;

use code_blocks::is_fence_delimiter;
use headings::try_parse_atx_heading;
use lists::try_parse_list_item;
use utils::{is_horizontal_rule, is_raw_html_line};

/// Line-oriented block parser.
///
/// Classifies each input line against the current [`Mode`] and lazily yields
/// [`Node`]s through its [`Iterator`] impl. All state lives in the parser
/// value itself, so separate documents can be parsed concurrently and a
/// fresh parser is cheap to build per invocation.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    mode: Mode,
    /// Demote level-1 headings to level 2 and drop the first one entirely.
    /// Used when the page banner already shows the document title.
    suppress_title: bool,
    title_seen: bool,
    /// Second node produced by a line that triggered a list close.
    pending: Option<Node<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, suppress_title: bool) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
            mode: Mode::Normal,
            suppress_title,
            title_seen: false,
            pending: None,
        }
    }

    fn heading_node(&mut self, level: u8, text: &'a str) -> Option<Node<'a>> {
        if !self.suppress_title || level != 1 {
            return Some(Node::Heading { level, text });
        }
        if !self.title_seen {
            // The banner already shows the title; drop the duplicate.
            self.title_seen = true;
            log::debug!("suppressing document title {:?}", text);
            return None;
        }
        Some(Node::Heading { level: 2, text })
    }

    /// Close an open list and queue `node` behind the emitted `ListClose`.
    fn close_list_then(&mut self, node: Node<'a>) -> Node<'a> {
        self.mode = Mode::Normal;
        self.pending = Some(node);
        Node::ListClose
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        if let Some(node) = self.pending.take() {
            return Some(node);
        }

        loop {
            let Some(&line) = self.lines.get(self.pos) else {
                // End of document: auto-close whatever is still open.
                return match self.mode {
                    Mode::List => {
                        self.mode = Mode::Normal;
                        Some(Node::ListClose)
                    }
                    Mode::Fence => {
                        log::debug!("unterminated code fence at end of input");
                        self.mode = Mode::Normal;
                        Some(Node::CodeFenceClose)
                    }
                    Mode::Normal => None,
                };
            };
            self.pos += 1;
            let trimmed = line.trim();

            // A fence delimiter always toggles fence mode and is never
            // reinterpreted under any other rule.
            if is_fence_delimiter(trimmed) {
                return Some(match self.mode {
                    Mode::Fence => {
                        self.mode = Mode::Normal;
                        Node::CodeFenceClose
                    }
                    Mode::List => {
                        // Lists never span into a fence.
                        self.mode = Mode::Fence;
                        self.pending = Some(Node::CodeFenceOpen);
                        Node::ListClose
                    }
                    Mode::Normal => {
                        self.mode = Mode::Fence;
                        Node::CodeFenceOpen
                    }
                });
            }

            // Everything between the delimiters is literal content.
            if self.mode == Mode::Fence {
                return Some(Node::CodeLine(line));
            }

            if let Some((level, text)) = try_parse_atx_heading(trimmed) {
                let heading = self.heading_node(level, text);
                if self.mode == Mode::List {
                    self.mode = Mode::Normal;
                    self.pending = heading;
                    return Some(Node::ListClose);
                }
                match heading {
                    Some(node) => return Some(node),
                    None => continue,
                }
            }

            if is_horizontal_rule(trimmed) {
                if self.mode == Mode::List {
                    return Some(self.close_list_then(Node::HorizontalRule));
                }
                return Some(Node::HorizontalRule);
            }

            // Blank lines separate blocks but emit nothing. Inside a list
            // they are tolerated without closing it.
            if trimmed.is_empty() {
                continue;
            }

            if let Some(text) = try_parse_list_item(trimmed) {
                if self.mode != Mode::List {
                    self.mode = Mode::List;
                    self.pending = Some(Node::ListItem(text));
                    return Some(Node::ListOpen);
                }
                return Some(Node::ListItem(text));
            }

            let node = if is_raw_html_line(trimmed) {
                Node::RawHtml(line)
            } else {
                Node::Paragraph(trimmed)
            };
            if self.mode == Mode::List {
                return Some(self.close_list_then(node));
            }
            return Some(node);
        }
    }
}
