//! Structural node and parser mode definitions.

/// One structural element emitted by the block parser, in input order.
///
/// Text payloads borrow from the input document. `CodeLine` and `RawHtml`
/// carry the line untouched; the other text-bearing variants carry the
/// line with markers and surrounding whitespace stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// ATX heading, level 1-4.
    Heading { level: u8, text: &'a str },
    /// Thematic break (`---`).
    HorizontalRule,
    Paragraph(&'a str),
    /// A line that is already HTML; passes through unmodified.
    RawHtml(&'a str),
    ListOpen,
    ListItem(&'a str),
    ListClose,
    CodeFenceOpen,
    /// Literal fence content, stored raw and escaped at render time.
    CodeLine(&'a str),
    CodeFenceClose,
}

/// Block-level parse mode.
///
/// `Fence` and `List` are mutually exclusive: a fence delimiter closes an
/// open list before the fence opens, so lists never span into a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Fence,
    List,
}
