//! Small, independent illustrations run by the tour.
//!
//! None of these keep state between calls; each is a thin use of the
//! standard library or of a library crate.

pub mod clock;
pub mod numeric;
pub mod ordering;
pub mod pipeline;
pub mod site;
pub mod tour;

pub use clock::{DEFAULT_ZONES, ZonedClock, ZonedTime, parse_zone};
pub use numeric::gcd;
pub use ordering::{Student, seniority};
pub use pipeline::{SAMPLE, even_squares};
pub use site::{CallSite, PI, answer_line};
pub use tour::{SequenceRun, SequenceSpec, TourPlan, TourReport, run_tour};
