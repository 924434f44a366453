//! Inline span substitution.
//!
//! Rewrites recognized inline patterns inside heading, list item, and
//! paragraph text. The rule order is a behavioral contract: bold, then
//! italic, then inline code, then links. Each pass is a single
//! non-overlapping, non-backtracking sweep; unbalanced delimiters are left
//! as literal characters rather than failing the run.
//!
//! Fenced code content never passes through here. It is HTML-escaped
//! verbatim by the renderer instead.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Which inline substitutions are active.
///
/// The report template historically applies italic substitution and the
/// guide template does not. The divergence is kept as an explicit flag so
/// neither document's rendered output changes silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRules {
    pub italics: bool,
}

/// Apply the inline substitution rules to one text span.
pub fn apply(text: &str, rules: InlineRules) -> String {
    let mut out = BOLD.replace_all(text, "<strong>${1}</strong>").into_owned();
    if rules.italics {
        out = ITALIC.replace_all(&out, "<em>${1}</em>").into_owned();
    }
    out = CODE.replace_all(&out, "<code>${1}</code>").into_owned();
    LINK.replace_all(&out, "<a href=\"${2}\">${1}</a>").into_owned()
}
