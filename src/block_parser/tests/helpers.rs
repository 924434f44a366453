//! Shared helpers for block parser tests.

use crate::block_parser::Parser;
use crate::syntax::Node;

/// Collect the full node sequence without title suppression.
pub(crate) fn nodes(input: &str) -> Vec<Node<'_>> {
    Parser::new(input, false).collect()
}

/// Collect the full node sequence with title suppression enabled.
pub(crate) fn nodes_suppressed(input: &str) -> Vec<Node<'_>> {
    Parser::new(input, true).collect()
}
