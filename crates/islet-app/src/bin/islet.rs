//! Command-line tile map generator.
//!
//! Prints water and land maps built by wave function collapse, optionally
//! animating every collapse step.

use std::{io, process};

use clap::Parser as _;
use islet_app::{args::Args, runner, version};

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting islet, version={}", version::build_version());

    if let Err(err) = args.config().validate() {
        eprintln!("Invalid configuration: {err}");
        process::exit(2);
    }
    if args.maps == 0 {
        eprintln!("--maps must be at least 1.");
        process::exit(2);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(err) = runner::run(&args, &mut out) {
        eprintln!("{err}");
        process::exit(1);
    }
}
