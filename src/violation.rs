//! Contract-violation reporting for misuse of the outcome API.
//!
//! A represented failure lives inside an [`Err`](crate::Outcome::Err) payload
//! and is handled through combinators. Misusing the API itself — unwrapping
//! the wrong variant — is a different failure domain entirely: it raises a
//! [`ContractViolation`] as a typed panic payload, synchronously, at the call
//! site. It is never retried and never converted into an `Err`.
//!
//! The payload can be recovered with `std::panic::catch_unwind` and a
//! downcast when a caller genuinely wants to observe it:
//!
//! ```
//! use watershed::{ContractViolation, Outcome};
//!
//! let result = std::panic::catch_unwind(|| {
//!     Outcome::<i32, &str>::err("nope").expect("wanted a value")
//! });
//!
//! let payload = result.unwrap_err();
//! let violation = payload.downcast_ref::<ContractViolation>().unwrap();
//! assert_eq!(violation.message(), Some("wanted a value: \"nope\""));
//! ```

use std::fmt;

/// Raised when the outcome API's own contract is violated.
///
/// Holds an optional message describing the violation. Equality and hashing
/// are defined purely by message content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContractViolation {
    message: Option<String>,
}

impl ContractViolation {
    /// A violation with no message.
    pub fn new() -> Self {
        ContractViolation { message: None }
    }

    /// A violation carrying a message.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::ContractViolation;
    ///
    /// let violation = ContractViolation::with_message("expected an Ok value");
    /// assert_eq!(violation.message(), Some("expected an Ok value"));
    /// ```
    pub fn with_message(message: impl Into<String>) -> Self {
        ContractViolation {
            message: Some(message.into()),
        }
    }

    /// The message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Raise this violation as a panic payload.
    ///
    /// Kept separate from construction so tests can build violations without
    /// unwinding.
    pub(crate) fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "outcome contract violated: {}", msg),
            None => write!(f, "outcome contract violated"),
        }
    }
}

impl std::error::Error for ContractViolation {}
