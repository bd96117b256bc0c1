//! The linear tour: every illustration, run once, in a fixed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    CallSite, PI, SAMPLE, Student, ZonedClock, ZonedTime, answer_line, clock::DEFAULT_ZONES,
    even_squares, gcd, seniority,
};
use crate::error::LazySeqResult;
use crate::generator::progression;

/// One progression to drive during the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSpec {
    pub start: i64,
    pub step: i64,
    pub count: usize,
}

/// Inputs of the tour. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourPlan {
    pub gcd: (i64, i64),
    pub students: (u32, u32),
    pub zones: Vec<String>,
    pub answer: i64,
    // Last: serialises as an array of tables.
    pub sequences: Vec<SequenceSpec>,
}

impl Default for TourPlan {
    fn default() -> Self {
        Self {
            gcd: (20, 25),
            students: (18, 17),
            zones: DEFAULT_ZONES.iter().map(|z| (*z).to_owned()).collect(),
            answer: 42,
            sequences: vec![
                SequenceSpec {
                    start: 0,
                    step: 1,
                    count: 11,
                },
                SequenceSpec {
                    start: 100,
                    step: -10,
                    count: 21,
                },
            ],
        }
    }
}

/// Terms produced for one [`SequenceSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRun {
    pub start: i64,
    pub step: i64,
    pub terms: Vec<i64>,
}

/// Everything the tour computed, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourReport {
    pub gcd: i64,
    pub even_squares: Vec<i64>,
    pub sequences: Vec<SequenceRun>,
    pub seniority: String,
    pub clock: Vec<ZonedTime>,
    pub answer: String,
    pub pi: f64,
    pub call_site: CallSite,
}

/// Run the tour for `plan`, reading clocks at `instant`.
///
/// `call_site` is whatever location the caller wants reported, normally
/// captured with [`call_site!`](crate::call_site) at the driver.
#[instrument(skip_all, fields(sequences = plan.sequences.len()))]
pub fn run_tour(
    plan: &TourPlan,
    instant: DateTime<Utc>,
    call_site: CallSite,
) -> LazySeqResult<TourReport> {
    let gcd = gcd(plan.gcd.0, plan.gcd.1);
    let even_squares = even_squares(SAMPLE).collect();

    let mut sequences = Vec::with_capacity(plan.sequences.len());
    for planned in &plan.sequences {
        let mut generator = progression(planned.start, planned.step);
        let terms = generator.advance_n(planned.count)?;
        debug!(start = planned.start, step = planned.step, terms = terms.len(), "sequence driven");
        sequences.push(SequenceRun {
            start: planned.start,
            step: planned.step,
            terms,
        });
    }

    let (a, b) = (Student::new(plan.students.0), Student::new(plan.students.1));
    let clock = ZonedClock::at(instant).with_zones(&plan.zones)?.render();

    Ok(TourReport {
        gcd,
        even_squares,
        sequences,
        seniority: seniority(&a, &b).to_owned(),
        clock,
        answer: answer_line(plan.answer),
        pi: PI,
        call_site,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LazySeqError, SeqError, ShowcaseError};

    fn site() -> CallSite {
        crate::call_site!()
    }

    #[test]
    fn default_tour() {
        let report = run_tour(&TourPlan::default(), Utc::now(), site()).unwrap();
        assert_eq!(report.gcd, 5);
        assert_eq!(report.even_squares, vec![0, 4, 16]);
        assert_eq!(report.sequences[0].terms, (0..=10).collect::<Vec<_>>());
        assert_eq!(report.sequences[1].terms.len(), 21);
        assert_eq!(report.sequences[1].terms.last(), Some(&-100));
        assert_eq!(report.seniority, "A is older!");
        assert_eq!(report.clock.len(), 5);
        assert_eq!(report.answer, "The answer is 42.");
        assert!(report.call_site.function.ends_with("site"));
    }

    #[test]
    fn overflowing_sequence_fails_the_tour() {
        let plan = TourPlan {
            sequences: vec![SequenceSpec {
                start: i64::MAX - 1,
                step: 1,
                count: usize::MAX,
            }],
            ..TourPlan::default()
        };
        let err = run_tour(&plan, Utc::now(), site()).unwrap_err();
        assert!(matches!(
            err,
            LazySeqError::Sequence(SeqError::RoutineFault { .. })
        ));
    }

    #[test]
    fn unknown_zone_fails_the_tour() {
        let plan = TourPlan {
            zones: vec!["Nowhere/Special".into()],
            ..TourPlan::default()
        };
        let err = run_tour(&plan, Utc::now(), site()).unwrap_err();
        assert!(matches!(
            err,
            LazySeqError::Showcase(ShowcaseError::UnknownTimeZone { .. })
        ));
    }

    #[test]
    fn report_serialises_to_json() {
        let report = run_tour(&TourPlan::default(), Utc::now(), site()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["gcd"], 5);
        assert_eq!(json["seniority"], "A is older!");
    }
}
