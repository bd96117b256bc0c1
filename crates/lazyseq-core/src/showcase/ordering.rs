//! Derived total ordering on a record.

use serde::{Deserialize, Serialize};

/// A record compared field by field through derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Student {
    age: u32,
}

impl Student {
    pub const fn new(age: u32) -> Self {
        Self { age }
    }

    pub const fn age(&self) -> u32 {
        self.age
    }
}

/// Verdict line for comparing `a` against `b`.
pub fn seniority(a: &Student, b: &Student) -> &'static str {
    if a > b { "A is older!" } else { "A is younger!" }
}
