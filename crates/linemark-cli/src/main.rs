use anyhow::{Context, Result};
use clap::Parser;
use linemark_config::Config;
use linemark_engine::{convert, io};
use std::path::PathBuf;

mod sink;

/// Convert a Markdown document to HTML, one line at a time.
#[derive(Parser)]
#[command(name = "linemark", version, about)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Write the HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template to splice the converted output into
    #[arg(long)]
    template: Option<PathBuf>,

    /// Element id in the template that receives the output
    #[arg(long)]
    target_id: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;

    let markdown = io::read_file(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let html = convert(&markdown);

    let rendered = match &cli.template {
        Some(template_path) => {
            let target_id = cli
                .target_id
                .clone()
                .or_else(|| config.as_ref().and_then(|c| c.target_id.clone()))
                .context("--template needs --target-id (or target_id in the config file)")?;
            let template = io::read_file(template_path)
                .with_context(|| format!("failed to read {}", template_path.display()))?;
            sink::set_content(&template, &target_id, &html)?
        }
        None => html,
    };

    match output_path(&cli, config.as_ref()) {
        Some(path) => io::write_file(&path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

/// `-o` wins; otherwise a configured `output_dir` maps `doc.md` to
/// `<output_dir>/doc.html`; otherwise stdout.
fn output_path(cli: &Cli, config: Option<&Config>) -> Option<PathBuf> {
    if let Some(path) = &cli.output {
        return Some(path.clone());
    }
    let dir = config.and_then(|c| c.output_dir.as_ref())?;
    let stem = cli.input.file_stem()?;
    Some(dir.join(stem).with_extension("html"))
}
