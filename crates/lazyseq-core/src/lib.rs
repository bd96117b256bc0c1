//! lazyseq core - lazy, pull-driven sequence generators
//!
//! The heart of this crate is [`generator::Generator`]: a uniquely owned
//! handle over a suspended routine that computes one element per demand.
//! [`showcase`] holds the small illustrations the CLI tour runs around it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           lazyseq-cli (CLI)             │
//! │  (parses args, logs, renders, exits)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │               showcase                  │
//! │  (tour, gcd, pipeline, clock, ...)      │
//! └──────────────────┬──────────────────────┘
//!                    │ drives
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │               generator                 │
//! │  (Generator, Routine, Progression)      │
//! │       No I/O, no global state           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::generator::progression;
//!
//! let mut up = progression(0, 1);
//! for expected in 0..=10 {
//!     assert!(up.advance().unwrap());
//!     assert_eq!(up.current_value().unwrap(), expected);
//! }
//! ```

pub mod error;
pub mod generator;
pub mod showcase;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{ErrorCategory, LazySeqError, LazySeqResult, SeqError, ShowcaseError};
    pub use crate::generator::{
        Accumulate, Generator, Progression, Routine, State, Step, bounded_progression, progression,
    };
    pub use crate::showcase::{TourPlan, TourReport, run_tour};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
