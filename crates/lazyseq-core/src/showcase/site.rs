//! Call-site introspection and the small formatting examples.

use std::fmt;

use serde::Serialize;

/// π, as printed by the tour.
pub const PI: f64 = std::f64::consts::PI;

/// `"The answer is {n}."`
pub fn answer_line(n: impl fmt::Display) -> String {
    format!("The answer is {n}.")
}

/// Where a [`call_site!`](crate::call_site) invocation was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: &'static str,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} in {}",
            self.file, self.line, self.column, self.function
        )
    }
}

/// Capture the file, line, column and enclosing function of the invocation.
///
/// ```
/// fn locate() -> lazyseq_core::showcase::CallSite {
///     lazyseq_core::call_site!()
/// }
///
/// let site = locate();
/// assert!(site.function.ends_with("locate"));
/// assert!(site.line > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = name_of(here);
        $crate::showcase::CallSite {
            file: file!(),
            line: line!(),
            column: column!(),
            function: name.strip_suffix("::here").unwrap_or(name),
        }
    }};
}
