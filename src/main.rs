use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use vellum::Template;

mod cli;
use cli::{Cli, Commands};

fn start_dir_for(input_path: &Path) -> PathBuf {
    input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
}

/// Read, render, and write one document with the given template.
///
/// The whole document is buffered before the single destination write, so
/// a missing input never leaves a partial output behind.
fn convert(
    file: &Path,
    output: Option<PathBuf>,
    template: Template,
    explicit_config: Option<&Path>,
) -> io::Result<()> {
    let (cfg, cfg_path) = vellum::config::load(explicit_config, &start_dir_for(file))?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    let input = fs::read_to_string(file)?;
    let page = vellum::render_page(&input, template, &cfg);

    let dest = output.unwrap_or_else(|| file.with_extension("html"));
    fs::write(&dest, &page)?;

    println!("Wrote {} ({} KB)", dest.display(), page.len() / 1024);
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { file, output } => {
            convert(&file, output, Template::Report, cli.config.as_deref())
        }
        Commands::Guide { file, output } => {
            convert(&file, output, Template::Guide, cli.config.as_deref())
        }
        Commands::Parse { file } => {
            let input = fs::read_to_string(&file)?;
            for node in vellum::parse(&input, Template::Report) {
                println!("{node:?}");
            }
            Ok(())
        }
    }
}
