//! Tracing subscriber setup for the `lazyseq` binary.
//!
//! The core library only emits events; this is the one place a subscriber is
//! installed. Generator events carry their own target
//! ([`lazyseq_core::generator::LOG_TARGET`]) and get a separate level, because
//! at trace level they fire once per yielded term.
//!
//! | Flag(s)   | lazyseq, lazyseq_core | generator |
//! |-----------|-----------------------|-----------|
//! | (none)    | warn                  | warn      |
//! | `-v`      | info                  | info      |
//! | `-vv`     | debug                 | debug     |
//! | `-vvv`    | trace                 | debug     |
//! | `-vvvv`   | trace                 | trace     |
//! | `--quiet` | error                 | error     |
//!
//! A set `RUST_LOG` replaces the whole table.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lazyseq_core::generator::LOG_TARGET as GENERATOR_TARGET;

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(args)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(args.verbose >= 3)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Filter directives for the flags in `args`.
fn directives(args: &GlobalArgs) -> String {
    let level = derive_level(args);
    let generator = generator_level(args);
    format!("lazyseq={level},lazyseq_core={level},{GENERATOR_TARGET}={generator}")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Per-term events need one `-v` more than the rest.
fn generator_level(args: &GlobalArgs) -> &'static str {
    match derive_level(args) {
        "trace" if args.verbose < 4 => "debug",
        level => level,
    }
}
