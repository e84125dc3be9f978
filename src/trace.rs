//! Diagnostic cause chains attached to failed outcomes.
//!
//! A [`Trace`] is an ordered list of cause entries, newest first. Each entry
//! records where one failure was observed: a captured backtrace, or a message
//! attached deliberately by the caller. When a failed outcome is recovered
//! into another failure (via `or` / `or_else`), the recovery's trace is
//! chained in front of the original, so reading a rendered trace top to
//! bottom walks from the most recent failure back to the first.
//!
//! Traces are advisory diagnostics only. They never participate in outcome
//! equality or hashing, and never influence which combinator branch runs.
//!
//! # Examples
//!
//! ```
//! use watershed::Trace;
//!
//! let older = Trace::message("parse failed");
//! let newer = Trace::message("retry failed");
//!
//! let chained = newer.chain(older);
//! assert_eq!(chained.causes(), &["retry failed", "parse failed"]);
//! assert_eq!(chained.to_string(), "retry failed\nparse failed");
//! ```

use std::backtrace::Backtrace;
use std::fmt;

/// An ordered chain of failure causes, newest first.
///
/// Kept as a structured list rather than a pre-formatted string so tooling
/// can inspect individual causes; [`fmt::Display`] joins them with newlines
/// for human consumption.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trace {
    causes: Vec<String>,
}

impl Trace {
    /// Create an empty trace (no diagnostics recorded).
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Trace;
    ///
    /// assert!(Trace::empty().is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Trace { causes: Vec::new() }
    }

    /// Capture a trace at the current call site.
    ///
    /// Records a single cause holding the rendered [`Backtrace`]. Whether the
    /// backtrace carries frames follows the standard library's rules
    /// (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`); when capture is disabled
    /// the cause still marks that a failure was observed here.
    pub fn capture() -> Self {
        Trace {
            causes: vec![Backtrace::capture().to_string()],
        }
    }

    /// Create a trace from a single caller-supplied cause message.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Trace;
    ///
    /// let trace = Trace::message("connection refused");
    /// assert_eq!(trace.causes(), &["connection refused"]);
    /// ```
    pub fn message(cause: impl Into<String>) -> Self {
        Trace {
            causes: vec![cause.into()],
        }
    }

    /// Chain this trace in front of an older one.
    ///
    /// `self` is the newer failure; its causes come first, followed by all
    /// of `older`'s causes.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Trace;
    ///
    /// let chained = Trace::message("b").chain(Trace::message("a"));
    /// assert_eq!(chained.causes(), &["b", "a"]);
    /// ```
    pub fn chain(mut self, older: Trace) -> Self {
        self.causes.extend(older.causes);
        self
    }

    /// All recorded causes, newest first.
    #[inline]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Returns `true` if no causes have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Number of recorded causes.
    #[inline]
    pub fn len(&self) -> usize {
        self.causes.len()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", cause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trace_has_no_causes() {
        let trace = Trace::empty();
        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
        assert_eq!(trace.to_string(), "");
    }

    #[test]
    fn message_records_single_cause() {
        let trace = Trace::message("boom");
        assert_eq!(trace.causes(), &["boom"]);
        assert_eq!(trace.to_string(), "boom");
    }

    #[test]
    fn capture_records_one_cause() {
        let trace = Trace::capture();
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn chain_orders_newest_first() {
        let older = Trace::message("first failure");
        let newer = Trace::message("second failure");

        let chained = newer.chain(older);
        assert_eq!(chained.causes(), &["second failure", "first failure"]);
    }

    #[test]
    fn chain_is_associative_on_rendering() {
        let a = Trace::message("a");
        let b = Trace::message("b");
        let c = Trace::message("c");

        let left = c.clone().chain(b.clone()).chain(a.clone());
        let right = c.chain(b.chain(a));
        assert_eq!(left, right);
        assert_eq!(left.to_string(), "c\nb\na");
    }

    #[test]
    fn display_joins_with_newlines() {
        let trace = Trace::message("newer").chain(Trace::message("older"));
        assert_eq!(trace.to_string(), "newer\nolder");
    }

    #[test]
    fn chain_with_empty_is_identity() {
        let trace = Trace::message("only");
        assert_eq!(trace.clone().chain(Trace::empty()), trace);
        assert_eq!(Trace::empty().chain(trace.clone()), trace);
    }
}
