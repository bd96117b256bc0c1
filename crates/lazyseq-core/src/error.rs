//! Unified error handling for lazyseq core.
//!
//! Generator contract violations and routine faults live in [`SeqError`];
//! the showcase routines report through [`ShowcaseError`]. Both are wrapped by
//! [`LazySeqError`], which carries categories and user-actionable suggestions
//! for the CLI layer.

use thiserror::Error;

/// Errors raised by a [`Generator`](crate::generator::Generator) handle.
///
/// Every variant except [`SeqError::RoutineFault`] is a contract violation:
/// the caller used the handle in a state where the operation has no meaning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("no value has been produced yet; call advance() first")]
    NotStarted,

    #[error("the sequence is exhausted")]
    Exhausted,

    #[error("the sequence stopped after a routine fault")]
    Faulted,

    #[error("the generator was moved out of this handle")]
    Detached,

    /// The generating routine failed while being resumed.
    #[error("generating routine failed: {message}")]
    RoutineFault { message: String },
}

impl SeqError {
    /// Build a [`SeqError::RoutineFault`] from anything printable.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::RoutineFault {
            message: message.into(),
        }
    }

    /// `true` for misuse of the handle, `false` for failures of the routine.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::RoutineFault { .. })
    }
}

/// Errors raised by the showcase routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("unknown time zone '{name}'")]
    UnknownTimeZone { name: String },
}

/// Root error type for lazyseq core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LazySeqError {
    #[error("Sequence error: {0}")]
    Sequence(#[from] SeqError),

    #[error("Showcase error: {0}")]
    Showcase(#[from] ShowcaseError),
}

impl LazySeqError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Sequence(SeqError::RoutineFault { message }) => vec![
                format!("The generating routine stopped: {message}"),
                "Use a wider element type (e.g. --type f64) or a smaller --count".into(),
            ],
            Self::Sequence(SeqError::NotStarted) => {
                vec!["Advance the generator at least once before reading its value".into()]
            }
            Self::Sequence(SeqError::Exhausted | SeqError::Faulted) => vec![
                "A finished generator cannot be resumed".into(),
                "Create a new generator to start over".into(),
            ],
            Self::Sequence(SeqError::Detached) => {
                vec!["Drive the handle returned by transfer() instead".into()]
            }
            Self::Showcase(ShowcaseError::UnknownTimeZone { name }) => vec![
                format!("'{name}' is not an IANA time zone name"),
                "Examples: Europe/Berlin, America/New_York, Asia/Tokyo".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Sequence(SeqError::RoutineFault { .. }) => ErrorCategory::RoutineFault,
            Self::Sequence(_) => ErrorCategory::ContractViolation,
            Self::Showcase(_) => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    ContractViolation,
    RoutineFault,
}

/// Convenient result type alias.
pub type LazySeqResult<T> = Result<T, LazySeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routine_fault_is_not_a_contract_violation() {
        assert!(!SeqError::fault("overflow").is_contract_violation());
        assert!(SeqError::NotStarted.is_contract_violation());
        assert!(SeqError::Detached.is_contract_violation());
    }

    #[test]
    fn categories() {
        assert_eq!(
            LazySeqError::from(SeqError::fault("x")).category(),
            ErrorCategory::RoutineFault
        );
        assert_eq!(
            LazySeqError::from(SeqError::Exhausted).category(),
            ErrorCategory::ContractViolation
        );
        let tz = ShowcaseError::UnknownTimeZone {
            name: "Mars/Olympus".into(),
        };
        assert_eq!(LazySeqError::from(tz).category(), ErrorCategory::Validation);
    }

    #[test]
    fn every_error_comes_with_suggestions() {
        let all = [
            LazySeqError::from(SeqError::NotStarted),
            LazySeqError::from(SeqError::Exhausted),
            LazySeqError::from(SeqError::Faulted),
            LazySeqError::from(SeqError::Detached),
            LazySeqError::from(SeqError::fault("overflow")),
            LazySeqError::from(ShowcaseError::UnknownTimeZone {
                name: "Mars/Olympus".into(),
            }),
        ];
        for err in all {
            assert!(!err.suggestions().is_empty(), "{err}");
        }
    }

    #[test]
    fn fault_suggestions_mention_type() {
        let err = LazySeqError::from(SeqError::fault("i8 overflow"));
        assert!(err.suggestions().iter().any(|s| s.contains("--type")));
    }

    #[test]
    fn display_includes_message() {
        let err = LazySeqError::from(SeqError::fault("boom"));
        assert_eq!(
            err.to_string(),
            "Sequence error: generating routine failed: boom"
        );
    }
}
