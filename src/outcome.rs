//! The two-variant outcome value and its combinator protocol.
//!
//! # Outcome vs std Result
//!
//! [`Outcome<T, E>`] plays the same role as `Result<T, E>`: a fallible
//! computation finished as either a success payload or a failure payload.
//! It differs in two deliberate ways:
//!
//! - Failed outcomes carry a [`Trace`] — an ordered diagnostic cause chain
//!   captured at failure time (or attached deliberately) and threaded through
//!   recoveries, without ever affecting equality or branching.
//! - Wrong-variant extraction raises a typed [`ContractViolation`] panic
//!   payload rather than a bare string, separating API misuse from
//!   represented failure.
//!
//! Conversions to and from `Result` are lossless apart from the trace.
//!
//! # Examples
//!
//! ```
//! use watershed::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::of(|| raw.parse::<u16>().map_err(|e| e.to_string()))
//! }
//!
//! let port = parse_port("8080")
//!     .map(|p| p + 1)
//!     .unwrap_or(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("not a port")
//!     .or_else(|_| parse_port("9090"))
//!     .unwrap_or(80);
//! assert_eq!(fallback, 9090);
//! ```

use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::trace::Trace;
use crate::violation::ContractViolation;

/// The outcome of a fallible computation: `Ok(T)` or `Err(E)` plus a
/// diagnostic [`Trace`].
///
/// Exactly one variant is active. Values are immutable once constructed;
/// every combinator returns a new `Outcome`. The trace on `Err` is advisory
/// only: it is excluded from [`PartialEq`] and [`Hash`] (so equal outcomes
/// always hash identically) and never influences which combinator branch
/// runs.
///
/// # Example
///
/// ```
/// use watershed::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::ok(42);
/// let err: Outcome<i32, &str> = Outcome::err("nope");
///
/// assert_eq!(ok.map(|n| n * 2), Outcome::ok(84));
/// assert_eq!(err.map(|n| n * 2), Outcome::err("nope"));
/// ```
#[derive(Clone, Debug)]
pub enum Outcome<T, E> {
    /// A successful outcome holding the success payload.
    Ok(T),
    /// A failed outcome holding the failure payload and its diagnostics.
    Err(E, Trace),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::ok(42);
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a failed outcome with no diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::err("nope");
    /// assert!(o.is_err());
    /// assert!(o.trace().is_none());
    /// ```
    #[inline]
    pub fn err(error: E) -> Self {
        Outcome::Err(error, Trace::empty())
    }

    /// Alias for [`Outcome::ok`].
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::ok(value)
    }

    /// Alias for [`Outcome::err`].
    ///
    /// This is the only alternate spelling for failure construction: an
    /// `error(..)` constructor is deliberately not provided, since
    /// `Outcome::error` reads as a payload accessor rather than a
    /// constructor.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::err(error)
    }

    /// Create a failed outcome with a deliberately attached trace.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::{Outcome, Trace};
    ///
    /// let o: Outcome<i32, &str> =
    ///     Outcome::err_with_trace("nope", Trace::message("while reading config"));
    /// assert_eq!(o.trace().unwrap().causes(), &["while reading config"]);
    /// ```
    #[inline]
    pub fn err_with_trace(error: E, trace: Trace) -> Self {
        Outcome::Err(error, trace)
    }

    /// Run a fallible callback, capturing a trace at the failure site.
    ///
    /// A normal `Ok` return becomes [`Outcome::Ok`]; an `Err` return becomes
    /// [`Outcome::Err`] with a [`Trace::capture`]d cause. A panic inside the
    /// callback is a caller bug, not a represented failure, and propagates.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let parsed = Outcome::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.ok_value(), Some(42));
    ///
    /// let failed = Outcome::of(|| "x".parse::<i32>());
    /// assert!(failed.is_err());
    /// assert!(failed.trace().is_some());
    /// ```
    pub fn of<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match f() {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error, Trace::capture()),
        }
    }

    /// Await a fallible asynchronous callback, capturing a trace on failure.
    ///
    /// The asynchronous counterpart of [`Outcome::of`]: a trace is captured
    /// whenever the awaited computation fails, regardless of how far into the
    /// future the failure arose.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::of_async(|| async { "7".parse::<i32>() }).await;
    /// assert_eq!(o.ok_value(), Some(7));
    /// # });
    /// ```
    pub async fn of_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match f().await {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error, Trace::capture()),
        }
    }

    /// Convert from a std `Result`, attaching no trace.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::from_result(Ok::<_, &str>(1)), Outcome::ok(1));
    /// assert_eq!(Outcome::from_result(Err::<i32, _>("e")), Outcome::err("e"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::err(error),
        }
    }

    /// Select a variant from an already-evaluated condition and payloads.
    ///
    /// Eager: both `value` and `error` must already exist. Use
    /// [`Outcome::from_condition_lazy`] when either side is costly.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::from_condition(true, 1, "e"), Outcome::ok(1));
    /// assert_eq!(Outcome::from_condition(false, 1, "e"), Outcome::err("e"));
    /// ```
    #[inline]
    pub fn from_condition(condition: bool, value: T, error: E) -> Self {
        if condition {
            Outcome::ok(value)
        } else {
            Outcome::err(error)
        }
    }

    /// Select a variant from a condition, invoking only the matching supplier.
    ///
    /// The supplier for the non-selected variant is never called.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::from_condition_lazy(
    ///     true,
    ///     || 42,
    ///     || unreachable!("error supplier must not run"),
    /// );
    /// assert_eq!(o, Outcome::ok(42));
    /// ```
    #[inline]
    pub fn from_condition_lazy<V, F>(condition: bool, value_fn: V, error_fn: F) -> Self
    where
        V: FnOnce() -> T,
        F: FnOnce() -> E,
    {
        if condition {
            Outcome::ok(value_fn())
        } else {
            Outcome::err(error_fn())
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for the `Ok` variant.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` for the `Err` variant.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(..))
    }

    // ========== Accessors ==========

    /// Returns the success payload if present, consuming self.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(42).ok_value(), Some(42));
    /// assert_eq!(Outcome::<i32, &str>::err("e").ok_value(), None);
    /// ```
    #[inline]
    pub fn ok_value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(..) => None,
        }
    }

    /// Returns the failure payload if present, consuming self.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::err("e").err_value(), Some("e"));
    /// assert_eq!(Outcome::<i32, &str>::ok(42).err_value(), None);
    /// ```
    #[inline]
    pub fn err_value(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error, _) => Some(error),
        }
    }

    /// Borrow both variants as a std `Result` of references.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::ok(42);
    /// assert_eq!(o.as_result(), Ok(&42));
    /// ```
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error, _) => Err(error),
        }
    }

    /// Convert to a std `Result`, discarding diagnostics.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error, _) => Err(error),
        }
    }

    /// The diagnostic trace, present only on a failed outcome that recorded
    /// one.
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Outcome::Err(_, trace) if !trace.is_empty() => Some(trace),
            _ => None,
        }
    }

    // ========== Extraction with escalation ==========

    /// Return the success payload, or raise a [`ContractViolation`] whose
    /// message is `msg` followed by the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload if the outcome is `Err`.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::ok(42);
    /// assert_eq!(o.expect("wanted a value"), 42);
    /// ```
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, _) => escalate(Some(msg), format!("{:?}", error)),
        }
    }

    /// Return the failure payload, or raise a [`ContractViolation`].
    ///
    /// Mirror of [`Outcome::expect`].
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload if the outcome is `Ok`.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => escalate(Some(msg), format!("{:?}", value)),
            Outcome::Err(error, _) => error,
        }
    }

    /// [`Outcome::expect`] without a caller message.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload if the outcome is `Err`.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, _) => escalate(None, format!("{:?}", error)),
        }
    }

    /// [`Outcome::expect_err`] without a caller message.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload if the outcome is `Ok`.
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => escalate(None, format!("{:?}", value)),
            Outcome::Err(error, _) => error,
        }
    }

    /// Return the success payload or an eagerly-supplied default.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(42).unwrap_or(0), 42);
    /// assert_eq!(Outcome::<i32, &str>::err("e").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(..) => default,
        }
    }

    /// Return the success payload or compute one from the failure payload.
    ///
    /// The supplier runs only on `Err`.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<usize, &str> = Outcome::err("four");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, _) => f(error),
        }
    }

    // ========== Containment ==========

    /// Returns `true` if this is `Ok` holding a payload equal to `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::ok(2).contains(&2));
    /// assert!(!Outcome::<i32, &str>::ok(3).contains(&2));
    /// assert!(!Outcome::<i32, &str>::err("e").contains(&2));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Outcome::Ok(v) => v == value,
            Outcome::Err(..) => false,
        }
    }

    /// Returns `true` if this is `Err` holding a payload equal to `error`.
    #[inline]
    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(e, _) => e == error,
        }
    }

    /// Like [`Outcome::contains`], with the comparison value supplied lazily.
    ///
    /// The supplier runs only when the variant is `Ok`; a mismatched variant
    /// returns `false` without evaluating anything.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::err("e");
    /// assert!(!err.contains_lazy(|| unreachable!("supplier must not run")));
    /// ```
    #[inline]
    pub fn contains_lazy<F>(&self, f: F) -> bool
    where
        T: PartialEq,
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Ok(v) => *v == f(),
            Outcome::Err(..) => false,
        }
    }

    /// Like [`Outcome::contains_err`], with the comparison error supplied
    /// lazily. The supplier runs only when the variant is `Err`.
    #[inline]
    pub fn contains_err_lazy<F>(&self, f: F) -> bool
    where
        E: PartialEq,
        F: FnOnce() -> E,
    {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(e, _) => *e == f(),
        }
    }

    // ========== Transformations ==========

    /// Transform the success payload; failures pass through with payload and
    /// trace untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(21).map(|n| n * 2), Outcome::ok(42));
    /// assert_eq!(Outcome::<i32, &str>::err("e").map(|n| n * 2), Outcome::err("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// Transform the failure payload; successes pass through unchanged.
    ///
    /// The original trace is preserved: the diagnostic history of the failure
    /// outranks the context of the transform site.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::err("disk full");
    /// assert_eq!(o.map_err(|e| e.len()), Outcome::err(9));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, trace) => Outcome::Err(f(error), trace),
        }
    }

    /// Collapse to a plain value: `f(payload)` on `Ok`, the eager `default`
    /// on `Err`.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(21).map_or(0, |n| n * 2), 42);
    /// assert_eq!(Outcome::<i32, &str>::err("e").map_or(0, |n| n * 2), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(..) => default,
        }
    }

    /// Collapse to a plain value with the default computed lazily from the
    /// failure payload.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::err("four");
    /// assert_eq!(o.map_or_else(|e| e.len(), |n| n as usize), 4);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error, _) => default(error),
        }
    }

    /// Collapse both variants into one value, success handler first.
    ///
    /// [`Outcome::map_or_else`] with the argument order swapped.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// let err: Outcome<i32, &str> = Outcome::err("e");
    ///
    /// assert_eq!(ok.fold(|n| n.to_string(), |e| e.to_string()), "42");
    /// assert_eq!(err.fold(|n| n.to_string(), |e| e.to_string()), "e");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, ok_fn: F, err_fn: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(error, _) => err_fn(error),
        }
    }

    // ========== Composition ==========

    /// Return `other` if this is `Ok`, otherwise the original failure.
    ///
    /// Short-circuits: `other` is already evaluated, so prefer
    /// [`Outcome::and_then`] when it is costly to produce.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::ok(1);
    /// assert_eq!(a.and(Outcome::<&str, &str>::ok("b")), Outcome::ok("b"));
    ///
    /// let e: Outcome<i32, &str> = Outcome::err("e");
    /// assert_eq!(e.and(Outcome::<&str, &str>::ok("b")), Outcome::err("e"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// Chain a fallible continuation on the success payload.
    ///
    /// Lazy: the continuation runs only on `Ok`. Failures pass through with
    /// payload and trace untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     Outcome::from_condition(n % 2 == 0, n / 2, "odd")
    /// }
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(42).and_then(halve), Outcome::ok(21));
    /// assert_eq!(Outcome::<i32, &str>::ok(7).and_then(halve), Outcome::err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// Return this outcome if `Ok`, otherwise `other`.
    ///
    /// When both are failures, `other`'s trace is chained in front of this
    /// outcome's trace (newest first), so the returned failure records the
    /// whole recovery history.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(1);
    /// assert_eq!(ok.or(Outcome::<i32, &str>::ok(2)), Outcome::ok(1));
    ///
    /// let err: Outcome<i32, &str> = Outcome::err("a");
    /// assert_eq!(err.or(Outcome::<i32, &str>::err("b")), Outcome::err("b"));
    /// ```
    pub fn or<E2>(self, other: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_, older) => match other {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error, newer) => Outcome::Err(error, newer.chain(older)),
            },
        }
    }

    /// Recover from a failure with a lazy continuation.
    ///
    /// The continuation runs only on `Err`. If it also fails, its trace is
    /// chained in front of the original (newest first).
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::err("missing");
    /// assert_eq!(o.or_else(|_| Outcome::<i32, &str>::ok(7)), Outcome::ok(7));
    /// ```
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, older) => match f(error) {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error, newer) => Outcome::Err(error, newer.chain(older)),
            },
        }
    }

    // ========== Inspection ==========

    /// Observe the success payload without altering the chain.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::ok(42).inspect(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(o, Outcome::ok(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the failure payload without altering the chain.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(error, _) = &self {
            f(error);
        }
        self
    }

    // ========== Asynchronous transforms ==========
    //
    // Each method matches its synchronous twin exactly, with the transform
    // awaited. The pending-computation proxy in `future.rs` delegates here.

    /// [`Outcome::map`] with an asynchronous transform.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::<i32, &str>::ok(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(o, Outcome::ok(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value).await),
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// [`Outcome::map_err`] with an asynchronous transform. The original
    /// trace is preserved, as in the synchronous form.
    pub async fn map_err_async<E2, F, Fut>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, trace) => Outcome::Err(f(error).await, trace),
        }
    }

    /// [`Outcome::map_or`] with an asynchronous transform.
    pub async fn map_or_async<U, F, Fut>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => f(value).await,
            Outcome::Err(..) => default,
        }
    }

    /// [`Outcome::map_or_else`] with asynchronous handlers.
    pub async fn map_or_else_async<U, D, DFut, F, Fut>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => f(value).await,
            Outcome::Err(error, _) => default(error).await,
        }
    }

    /// [`Outcome::fold`] with asynchronous handlers, success handler first.
    pub async fn fold_async<U, F, FFut, G, GFut>(self, ok_fn: F, err_fn: G) -> U
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
        G: FnOnce(E) -> GFut,
        GFut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => ok_fn(value).await,
            Outcome::Err(error, _) => err_fn(error).await,
        }
    }

    /// [`Outcome::and_then`] with an asynchronous continuation.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Ok(value) => f(value).await,
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// [`Outcome::or_else`] with an asynchronous continuation, chaining
    /// traces the same way when the recovery also fails.
    pub async fn or_else_async<E2, F, Fut>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E2>>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, older) => match f(error).await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error, newer) => Outcome::Err(error, newer.chain(older)),
            },
        }
    }
}

// Flatten for nested outcomes. The method exists only on the nested type, so
// a "wrong shape" flatten is a compile error rather than a runtime probe.
impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapse one level of nesting.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::ok(42));
    /// assert_eq!(nested.flatten(), Outcome::ok(42));
    ///
    /// let inner_err: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::err("inner"));
    /// assert_eq!(inner_err.flatten(), Outcome::err("inner"));
    ///
    /// let outer_err: Outcome<Outcome<i32, &str>, &str> = Outcome::err("outer");
    /// assert_eq!(outer_err.flatten(), Outcome::err("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Ok(inner) => inner,
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }
}

fn escalate(message: Option<&str>, payload: String) -> ! {
    let message = match message {
        Some(msg) => format!("{}: {}", msg, payload),
        None => payload,
    };
    ContractViolation::with_message(message).raise()
}

// ========== Trait Implementations ==========

// Equality and hashing compare the variant tag and payload only; the trace
// is diagnostic and excluded from both, keeping eq and hash consistent.
impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a == b,
            (Outcome::Err(a, _), Outcome::Err(b, _)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Outcome::Ok(value) => value.hash(state),
            Outcome::Err(error, _) => error.hash(state),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(error, _) => write!(f, "Err({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    /// Returns `Outcome::Ok(T::default())`.
    fn default() -> Self {
        Outcome::Ok(T::default())
    }
}
