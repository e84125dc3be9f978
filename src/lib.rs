//! # Watershed
//!
//! > *Every computation flows to one of two sides.*
//!
//! A Rust library for explicit success/failure outcomes with traceable
//! diagnostics and async-composable combinators.
//!
//! ## Philosophy
//!
//! A fallible computation finishes exactly once, as either a success or a
//! failure. **Watershed** makes that divide a first-class value:
//! - [`Outcome`] holds the finished result and never an exception in flight.
//! - Failures carry a [`Trace`] — structured diagnostics that follow the
//!   value through transforms and recoveries without ever steering them.
//! - Misusing the API (unwrapping the wrong variant) is a different failure
//!   domain entirely, reported as a typed [`ContractViolation`].
//! - [`FutureOutcome`] replays the identical combinator protocol over a
//!   computation that has not finished yet.
//!
//! ## Quick Example
//!
//! ```rust
//! use watershed::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! enum Version {
//!     V1,
//!     V2,
//! }
//!
//! fn parse_version(header: &[u8]) -> Outcome<Version, String> {
//!     match header.first().copied() {
//!         None => Outcome::err("invalid header length".to_string()),
//!         Some(1) => Outcome::ok(Version::V1),
//!         Some(2) => Outcome::ok(Version::V2),
//!         Some(_) => Outcome::err("invalid version".to_string()),
//!     }
//! }
//!
//! let version = parse_version(&[1, 2, 3, 4])
//!     .inspect(|v| println!("parsed {:?}", v))
//!     .map(|v| format!("working with {:?}", v))
//!     .unwrap_or_else(|e| format!("failed: {}", e));
//!
//! assert_eq!(version, "working with V1");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod future;
pub mod outcome;
pub mod testing;
pub mod trace;
pub mod violation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use future::FutureOutcome;
pub use outcome::Outcome;
pub use trace::Trace;
pub use violation::ContractViolation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::future::FutureOutcome;
    pub use crate::outcome::Outcome;
    pub use crate::trace::Trace;
    pub use crate::violation::ContractViolation;
}
