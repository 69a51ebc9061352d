use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use vecsketch::export::{SvgOptions, write_svg_file};
use vecsketch::{Config, Sketchpad};

#[derive(Parser, Debug)]
#[command(name = "vecsketch")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VECSKETCH_GIT_HASH"), ")"),
    about = "Grid-snapping vector sketch engine with a turtle command language"
)]
struct Cli {
    /// Command script to run, one command per line (stdin when omitted)
    script: Option<PathBuf>,

    /// Write the SVG document to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Abort on the first rejected command instead of dropping it
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let mut pad = Sketchpad::new(&config);

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut applied = 0usize;
    let mut rejected = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read command input")?;
        let trimmed = line.trim();

        // Script conveniences only: the interpreter itself treats blank
        // lines as no-ops and knows nothing about comments.
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match pad.run_command(trimmed) {
            Ok(()) => applied += 1,
            Err(err) => {
                if cli.strict {
                    anyhow::bail!("line {}: {err}", idx + 1);
                }
                log::warn!("Dropped line {}: {err}", idx + 1);
                rejected += 1;
            }
        }
    }

    log::info!(
        "Applied {applied} command(s), dropped {rejected}; scene has {} shape(s)",
        pad.scene().shapes().len()
    );
    if let Some(bounds) = pad.scene().content_bounds() {
        log::debug!(
            "Content bounds: origin ({:.1}, {:.1}), {:.1} x {:.1}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
    }

    let options = SvgOptions::from(&config.export);
    match &cli.output {
        Some(path) => write_svg_file(pad.scene(), &options, path)?,
        None => print!("{}", pad.export_svg(&options)),
    }

    Ok(())
}
