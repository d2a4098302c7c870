//! Concentric circles with a color and thickness gradient.
//!
//! No input: draws 20 rings in a 700x700 window. `--config` loads the
//! ring parameters from a JSON file instead.

use clap::Parser;
use rasterlab::config::load_circles;
use rasterlab::demos::{self, CirclesDemo, Output};
use rasterlab::util::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "circles", version)]
#[command(about = "Draw concentric circles with a color and thickness gradient", long_about = None)]
struct Cli {
    /// JSON file overriding ring parameters (count, min_radius, max_radius,
    /// base_thickness, thickness_step, segments, center)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the draw commands as JSON instead of opening a window
    #[arg(long)]
    dump: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> rasterlab::Result<()> {
    let demo = match &cli.config {
        Some(path) => CirclesDemo::new(load_circles(path)?),
        None => CirclesDemo::default(),
    };

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
