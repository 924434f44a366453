use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vellum")]
#[command(author, version)]
#[command(about = "Renders a constrained Markdown dialect into self-contained HTML pages")]
#[command(
    long_about = "Vellum converts documentation written in a restricted Markdown dialect \
    (ATX headings, unordered lists, fenced code blocks, inline bold/italic/code/links, \
    horizontal rules, raw-HTML passthrough) into fully self-contained, print-ready HTML \
    pages with embedded CSS. Two fixed page templates are available, one per subcommand."
)]
#[command(after_help = "\
EXAMPLES:

    # Render the technical-report template
    vellum report ANALYSIS.md

    # Render the usage-guide template to an explicit destination
    vellum guide PURPOSE.md -o site/purpose.html

    # Inspect the node sequence the parser emits
    vellum parse ANALYSIS.md

    # Use custom page metadata
    vellum report --config vellum.toml ANALYSIS.md

CONFIGURATION:

Vellum looks for configuration files in this order:
  1. Explicit --config path
  2. vellum.toml or .vellum.toml in the input file's directory or its parents
  3. ~/.config/vellum/config.toml (XDG)
  4. Built-in defaults

Example .vellum.toml:

    title = \"Monitoring Stack\"
    subtitle = \"Purpose & Real-World Usage Guide\"
    version = \"1.0\"
    date = \"January 2026\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file carrying the page title, subtitle, \
        version, and footer date. If not specified, vellum searches for .vellum.toml or \
        vellum.toml next to the input file and in its parent directories, then falls back \
        to ~/.config/vellum/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a document with the technical-report template
    #[command(
        long_about = "Render a Markdown document with the technical-report template: \
        print-first styling, bordered headings, dark code panels. This variant applies \
        italic substitution (*text*) in addition to bold, inline code, and links."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Write ANALYSIS.html next to the input
    vellum report ANALYSIS.md

    # Choose the destination
    vellum report ANALYSIS.md -o report.html

The output is a single HTML file with all CSS inlined; open it in a browser
and print to PDF for distribution.")]
    Report {
        /// Input Markdown file
        #[arg(help = "Input file path")]
        file: PathBuf,

        /// Output file (defaults to the input path with an .html extension)
        #[arg(short, long)]
        #[arg(help = "Output file path")]
        output: Option<PathBuf>,
    },
    /// Render a document with the usage-guide template
    #[command(
        long_about = "Render a Markdown document with the usage-guide template: gradient \
        banner, styled lists and links, dark footer. The banner shows the document title, \
        so the first level-1 heading in the body is suppressed and later level-1 headings \
        are demoted to level 2. Italic substitution is not applied by this variant."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Write PURPOSE.html next to the input
    vellum guide PURPOSE.md

    # Choose the destination
    vellum guide PURPOSE.md -o site/purpose.html")]
    Guide {
        /// Input Markdown file
        #[arg(help = "Input file path")]
        file: PathBuf,

        /// Output file (defaults to the input path with an .html extension)
        #[arg(short, long)]
        #[arg(help = "Output file path")]
        output: Option<PathBuf>,
    },
    /// Parse a document and print the emitted node sequence for debugging
    #[command(
        long_about = "Parse a document and print the structural nodes the block parser \
        emits, one per line, without rendering any HTML. Useful for understanding how a \
        document is classified: headings, paragraphs, list boundaries, fence content."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Show the node sequence
    vellum parse document.md")]
    Parse {
        /// Input Markdown file
        #[arg(help = "Input file path")]
        file: PathBuf,
    },
}
