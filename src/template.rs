//! Fixed page shells with embedded CSS.
//!
//! Each template is a complete HTML5 document with its stylesheet inlined,
//! so the rendered page needs no external assets and prints cleanly.

use crate::config::Config;
use crate::inline_parser::InlineRules;

/// The two page variants, selected by entry point rather than at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Print-first technical report chrome.
    Report,
    /// Gradient-banner usage guide chrome.
    Guide,
}

impl Template {
    /// Inline substitutions active for this template. The report variant
    /// applies italic substitution and the guide variant does not; the
    /// divergence is deliberate and kept explicit here.
    pub fn inline_rules(self) -> InlineRules {
        InlineRules {
            italics: matches!(self, Template::Report),
        }
    }

    /// The guide banner already shows the document title, so the first
    /// level-1 heading in the body is dropped and later ones demoted.
    pub fn suppresses_title(self) -> bool {
        matches!(self, Template::Guide)
    }

    fn shell(self) -> &'static str {
        match self {
            Template::Report => include_str!("templates/report.html"),
            Template::Guide => include_str!("templates/guide.html"),
        }
    }

    fn styles(self) -> &'static str {
        match self {
            Template::Report => include_str!("templates/report.css"),
            Template::Guide => include_str!("templates/guide.css"),
        }
    }
}

/// Substitute the rendered body and page metadata into the shell.
///
/// The body goes in last so placeholder-looking text inside the document
/// is never re-substituted.
pub fn render_page(template: Template, body: &str, config: &Config) -> String {
    let date = match &config.date {
        Some(date) => date.clone(),
        None => chrono::Local::now().format("%B %Y").to_string(),
    };

    template
        .shell()
        .replace("{{styles}}", template.styles())
        .replace("{{title}}", &config.title)
        .replace("{{subtitle}}", &config.subtitle)
        .replace("{{version}}", &config.version)
        .replace("{{date}}", &date)
        .replace("{{content}}", body)
}
