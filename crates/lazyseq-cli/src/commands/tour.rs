//! Implementation of the `lazyseq tour` command.
//!
//! Runs every illustration once, in order, and renders the report.

use chrono::Utc;
use tracing::{info, instrument};

use lazyseq_core::showcase::{TourReport, run_tour};

use crate::{
    cli::TourArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, join_terms},
};

/// Execute the `lazyseq tour` command.
#[instrument(skip_all)]
pub fn execute(args: TourArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let report = run_tour(&config.tour, Utc::now(), lazyseq_core::call_site!())?;
    info!(sequences = report.sequences.len(), "Tour finished");

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for line in render(&report, &config, !args.no_clock) {
        match line {
            Line::Header(text) => output.header(&text)?,
            Line::Text(text) => output.print(&text)?,
        }
    }
    Ok(())
}

enum Line {
    Header(String),
    Text(String),
}

fn render(report: &TourReport, config: &AppConfig, with_clock: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    let (a, b) = config.tour.gcd;

    lines.push(Line::Header("Constrained generics".into()));
    lines.push(Line::Text(format!("gcd({a}, {b}) = {}", report.gcd)));

    lines.push(Line::Header("Lazy pipeline".into()));
    lines.push(Line::Text(join_terms(&report.even_squares)));

    lines.push(Line::Header("Generators".into()));
    for run in &report.sequences {
        lines.push(Line::Text(format!(
            "progression({}, {}): {}",
            run.start,
            run.step,
            join_terms(&run.terms)
        )));
    }

    lines.push(Line::Header("Derived ordering".into()));
    lines.push(Line::Text(report.seniority.clone()));

    if with_clock {
        lines.push(Line::Header("Time zones".into()));
        for zoned in &report.clock {
            lines.push(Line::Text(format!("{:<18} {}", zoned.label, zoned.rendered)));
        }
    }

    lines.push(Line::Header("Formatting".into()));
    lines.push(Line::Text(report.answer.clone()));
    lines.push(Line::Text(report.pi.to_string()));

    lines.push(Line::Header("Call site".into()));
    lines.push(Line::Text(report.call_site.line.to_string()));
    lines.push(Line::Text(report.call_site.file.to_owned()));
    lines.push(Line::Text(report.call_site.function.to_owned()));

    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|l| match l {
                Line::Text(t) => Some(t.as_str()),
                Line::Header(_) => None,
            })
            .collect()
    }

    fn report(config: &AppConfig) -> TourReport {
        run_tour(&config.tour, Utc::now(), lazyseq_core::call_site!()).unwrap()
    }

    #[test]
    fn renders_in_tour_order() {
        let config = AppConfig::default();
        let lines = render(&report(&config), &config, false);
        let texts = texts(&lines);
        assert_eq!(texts[0], "gcd(20, 25) = 5");
        assert_eq!(texts[1], "0 4 16");
        assert_eq!(texts[2], "progression(0, 1): 0 1 2 3 4 5 6 7 8 9 10");
        assert!(texts[3].starts_with("progression(100, -10): 100 90 80"));
        assert!(texts[3].ends_with("-90 -100"));
        assert_eq!(texts[4], "A is older!");
        assert_eq!(texts[5], "The answer is 42.");
        assert_eq!(texts[6], "3.141592653589793");
    }

    #[test]
    fn clock_section_is_optional() {
        let config = AppConfig::default();
        let report = report(&config);
        let without = render(&report, &config, false).len();
        let with = render(&report, &config, true).len();
        assert_eq!(with - without, 1 + report.clock.len());
    }
}
