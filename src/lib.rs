pub mod block_parser;
pub mod config;
pub mod inline_parser;
pub mod renderer;
pub mod syntax;
pub mod template;

pub use config::Config;
pub use config::ConfigBuilder;
pub use syntax::Node;
pub use template::Template;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document into its lazily emitted node sequence.
///
/// The parser is an iterator: nothing is classified until the sequence is
/// consumed, and a fresh parser carries no state from earlier runs. The
/// template decides whether the first level-1 heading is suppressed.
///
/// # Examples
///
/// ```rust
/// use vellum::{Node, Template, parse};
///
/// let nodes: Vec<Node> = parse("# Title", Template::Report).collect();
/// assert_eq!(nodes, vec![Node::Heading { level: 1, text: "Title" }]);
/// ```
pub fn parse(input: &str, template: Template) -> block_parser::Parser<'_> {
    block_parser::Parser::new(input, template.suppresses_title())
}

/// Converts a document to its HTML body, without the page shell.
///
/// Block structure comes from [`parse`]; inline substitution follows the
/// template's rule set. Fenced content is HTML-escaped and never
/// inline-formatted.
pub fn to_html(input: &str, template: Template) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    renderer::render_body(parse(input, template), template.inline_rules())
}

/// Renders a document to a complete, self-contained HTML page.
///
/// The body from [`to_html`] is substituted into the template's fixed
/// shell together with the banner and footer metadata from `config`.
///
/// # Examples
///
/// ```rust
/// use vellum::{Config, Template, render_page};
///
/// let page = render_page("# Title\n\nHello.", Template::Report, &Config::default());
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(input: &str, template: Template, config: &Config) -> String {
    let body = to_html(input, template);
    template::render_page(template, &body, config)
}
