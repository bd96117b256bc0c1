//! Implementation of the `lazyseq seq` command.
//!
//! Responsibility: resolve start/step/count from flags and config, drive one
//! progression of the requested element type, and print its terms.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, instrument};

use lazyseq_core::generator::{Accumulate, progression};

use crate::{
    cli::{ElementType, SeqArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, join_terms},
};

/// Execute the `lazyseq seq` command.
#[instrument(skip_all, fields(element = %args.element))]
pub fn execute(args: SeqArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let start = args.start.unwrap_or_else(|| config.seq.start.to_string());
    let step = args.step.unwrap_or_else(|| config.seq.step.to_string());
    let count = args.count.unwrap_or(config.seq.count);

    debug!(%start, %step, count, "Progression resolved");

    match args.element {
        ElementType::I8 => emit(&drive::<i8>(&start, &step, count)?, &output),
        ElementType::I32 => emit(&drive::<i32>(&start, &step, count)?, &output),
        ElementType::I64 => emit(&drive::<i64>(&start, &step, count)?, &output),
        ElementType::U64 => emit(&drive::<u64>(&start, &step, count)?, &output),
        ElementType::F64 => emit(&drive::<f64>(&start, &step, count)?, &output),
    }
}

/// Parse the bounds as `T` and pull `count` terms from a fresh progression.
fn drive<T>(start: &str, step: &str, count: usize) -> CliResult<Vec<T>>
where
    T: Accumulate + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let start = parse::<T>("start", start)?;
    let step = parse::<T>("step", step)?;
    let terms = progression(start, step).advance_n(count)?;
    Ok(terms)
}

fn parse<T>(what: &str, raw: &str) -> CliResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim().parse::<T>().map_err(|e| CliError::InvalidInput {
        message: format!(
            "{what} '{raw}' is not a valid {}",
            std::any::type_name::<T>()
        ),
        source: Some(Box::new(e)),
    })
}

fn emit<T: Display + Serialize>(terms: &[T], output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&terms)?;
    } else {
        output.print(&join_terms(terms))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
