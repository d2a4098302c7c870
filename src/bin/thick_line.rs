//! Thick line with Bresenham's algorithm.
//!
//! Reads `x1 y1 x2 y2` and a width from stdin, then shows the line in a
//! 500x500 window until it is closed.

use clap::Parser;
use rasterlab::demos::{self, Output, ThickLineDemo};
use rasterlab::input::TokenReader;
use rasterlab::util::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "thick-line", version)]
#[command(about = "Draw a thick line with Bresenham's algorithm", long_about = None)]
struct Cli {
    /// Print the draw commands as JSON instead of opening a window
    #[arg(long)]
    dump: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> rasterlab::Result<()> {
    let mut input = TokenReader::new(io::stdin().lock());
    // Keep stdout clean for the JSON dump
    let mut prompts: Box<dyn Write> = if cli.dump {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let demo = ThickLineDemo::read(&mut input, prompts.as_mut())?;

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
