//! Non-fatal problems found while reading an edge list.
//!
//! A resilient read never stops at a bad line. It records a [`Warning`]
//! for the line in a shared [`WarningCollector`] and moves on.
//!
//! ```
//! use wayfinder_edgelist::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::MalformedRecord {
//!     line_number: 5,
//!     error: "weight `-3` is negative".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings[0].line_number(), 5);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A line that was left out of the loaded graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line is neither a node record nor an edge record.
    MalformedRecord {
        /// 1-based line number.
        line_number: usize,
        /// What the parser objected to.
        error: String,
    },

    /// The line parsed, but a validation rule rejected it.
    SkippedLine {
        /// 1-based line number.
        line_number: usize,
        /// Why the line was rejected.
        reason: String,
    },
}

impl Warning {
    /// 1-based line number of the offending line.
    #[must_use]
    pub fn line_number(&self) -> usize {
        let (Self::MalformedRecord { line_number, .. } | Self::SkippedLine { line_number, .. }) =
            self;
        *line_number
    }

    /// Stable machine-readable tag, used in JSON output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        if matches!(self, Self::MalformedRecord { .. }) {
            "malformed_record"
        } else {
            "skipped_line"
        }
    }

    /// One-line message naming the line and the cause.
    ///
    /// ```
    /// use wayfinder_edgelist::warning::Warning;
    ///
    /// let warning = Warning::SkippedLine {
    ///     line_number: 3,
    ///     reason: "identifier too long".to_string(),
    /// };
    /// assert_eq!(warning.description(), "line 3: skipped: identifier too long");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { line_number, error } => {
                write!(f, "line {line_number}: malformed record: {error}")
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => write!(f, "line {line_number}: skipped: {reason}"),
        }
    }
}

impl std::error::Error for Warning {}

/// Shared sink for warnings.
///
/// Cloning is cheap and every clone appends to the same list, so the caller
/// can keep one handle while a reader holds another.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    inner: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic in another holder cannot leave a Vec half-pushed.
    fn entries(&self) -> MutexGuard<'_, Vec<Warning>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a warning.
    pub fn add(&self, warning: Warning) {
        tracing::debug!(
            line = warning.line_number(),
            kind = warning.kind(),
            "edge list warning"
        );
        self.entries().push(warning);
    }

    /// Number of warnings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Snapshot of the warnings gathered so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.entries().clone()
    }

    /// Takes the warnings out, cloning only when other handles are still alive.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => Self { inner: shared }.warnings(),
        }
    }
}
