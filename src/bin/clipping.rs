//! Liang-Barsky line clipping.
//!
//! Reads a clip window and a list of lines from stdin (or `--scene`), then
//! shows the original lines, the window and the clipped segments.

use clap::Parser;
use rasterlab::config::ClipScene;
use rasterlab::demos::{self, ClippingDemo, Output};
use rasterlab::input::TokenReader;
use rasterlab::util::init_logging;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "clipping", version)]
#[command(about = "Clip lines against a rectangle with the Liang-Barsky algorithm", long_about = None)]
struct Cli {
    /// Read the window and lines from a JSON scene instead of stdin
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Write the scene that was read to a JSON file
    #[arg(long, value_name = "FILE")]
    save_scene: Option<PathBuf>,

    /// Print the draw commands as JSON instead of opening a window
    #[arg(long)]
    dump: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> rasterlab::Result<()> {
    let demo = match &cli.scene {
        Some(path) => ClippingDemo::new(ClipScene::load(path)?),
        None => {
            let mut input = TokenReader::new(io::stdin().lock());
            let mut prompts: Box<dyn Write> = if cli.dump {
                Box::new(io::stderr())
            } else {
                Box::new(io::stdout())
            };
            ClippingDemo::read(&mut input, prompts.as_mut())?
        },
    };

    if let Some(path) = &cli.save_scene {
        demo.scene().save(path)?;
        info!(path = %path.display(), "scene saved");
    }

    let output = if cli.dump { Output::Dump } else { Output::Window };
    demos::run(&demo, output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
