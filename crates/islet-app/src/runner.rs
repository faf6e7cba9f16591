//! Drives generation sessions and writes their output.

use std::{io::Write, thread, time::Duration};

use islet_generator::{GenerationSession, MapSeed, SessionError};
use islet_solver::{CollapseSolver, SolverError};

use crate::{
    args::{Args, OutputFormat},
    render,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RunError {
    #[display("failed to write output: {_0}")]
    Io(std::io::Error),
    #[display("failed to encode JSON: {_0}")]
    Json(serde_json::Error),
    #[display("{_0}")]
    Generation(SolverError),
}

/// Returns the seed that follows `seed` in a multi-map run.
///
/// Chaining through the hash keeps every map of a seeded run reproducible.
#[must_use]
pub fn next_seed(seed: MapSeed) -> MapSeed {
    MapSeed::from_phrase(&seed.to_string())
}

/// Generates `args.maps` maps in one session and writes them to `out`.
///
/// The configuration must already be validated.
pub fn run<W>(args: &Args, out: &mut W) -> Result<(), RunError>
where
    W: Write,
{
    let solver = CollapseSolver::permissive();
    let mut session = GenerationSession::new(args.config(), solver, args.initial_seed());
    let frame_delay = Duration::from_millis(args.frame_delay_ms);

    for index in 0..args.maps {
        let token = if index == 0 {
            session.token()
        } else {
            session.regenerate(next_seed(session.seed()))
        };
        log::info!("generating map {}/{} with seed {}", index + 1, args.maps, session.seed());

        if args.animate {
            loop {
                let step = session.step(token).map_err(|err| match err {
                    SessionError::Solver(err) => err,
                    SessionError::Cancelled => {
                        unreachable!("no regeneration happens while animating")
                    }
                })?;
                if step.done {
                    break;
                }
                write_frame(args.format, &session, out)?;
                if !frame_delay.is_zero() {
                    thread::sleep(frame_delay);
                }
            }
        } else {
            session.run_to_completion()?;
        }

        write_map(args.format, index, args.maps, &session, out)?;
        log::debug!(
            "map {} finished: {} collapses, {} propagation pops",
            index + 1,
            session.stats().collapses(),
            session.stats().propagation_pops()
        );
    }
    out.flush()?;
    Ok(())
}

fn write_frame<W>(
    format: OutputFormat,
    session: &GenerationSession,
    out: &mut W,
) -> Result<(), RunError>
where
    W: Write,
{
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", render::render_frame(session.grid(), &[]))?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &session.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_map<W>(
    format: OutputFormat,
    index: usize,
    total: usize,
    session: &GenerationSession,
    out: &mut W,
) -> Result<(), RunError>
where
    W: Write,
{
    match format {
        OutputFormat::Text => {
            let (trees, buildings) = render::decoration_counts(session.decorations());
            writeln!(out, "Map {}/{total}", index + 1)?;
            writeln!(out, "Seed: {}", session.seed())?;
            writeln!(out, "{}", render::render_frame(session.grid(), session.decorations()))?;
            writeln!(out, "Decorations: {trees} trees, {buildings} buildings")?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &session.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
