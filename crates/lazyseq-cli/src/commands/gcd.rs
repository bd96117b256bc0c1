//! `lazyseq gcd` — greatest common divisor of two integers.

use lazyseq_core::showcase::gcd;

use crate::{cli::GcdArgs, error::CliResult, output::OutputManager};

pub fn execute(args: GcdArgs, output: OutputManager) -> CliResult<()> {
    let value = gcd(args.a, args.b);
    if output.is_json() {
        output.json(&value)?;
    } else {
        output.print(&value.to_string())?;
    }
    Ok(())
}
