//! A pending outcome that replays the combinator protocol asynchronously.
//!
//! [`FutureOutcome<T, E>`] wraps a boxed future that will eventually yield an
//! [`Outcome<T, E>`]. It exposes the same method names as the synchronous
//! protocol; each method awaits the pending outcome and delegates to the
//! synchronous combinator, so the two surfaces cannot drift apart. `*_async`
//! variants accept asynchronous transforms and await those too.
//!
//! Operations within one chain run strictly in sequence: each suspends until
//! its predecessor resolves, then runs its transform to completion. There is
//! no fan-out, no cancellation primitive, and no timeout handling here —
//! those belong to the caller's runtime.
//!
//! `FutureOutcome` itself implements [`Future`], so a chain is awaited once
//! at the end:
//!
//! ```
//! use watershed::{FutureOutcome, Outcome};
//!
//! # tokio_test::block_on(async {
//! let outcome = FutureOutcome::of(|| async { "21".parse::<i32>() })
//!     .map(|n| n * 2)
//!     .map_err(|e| e.to_string())
//!     .await;
//! assert_eq!(outcome, Outcome::ok(42));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::outcome::Outcome;
use crate::trace::Trace;

/// A pending computation of an [`Outcome`], with the full combinator
/// protocol available before the result exists.
///
/// Transform combinators return a new `FutureOutcome`; collapsing operations
/// (`map_or`, `fold`, `unwrap_or`, containment checks) are `async` methods
/// awaited directly.
pub struct FutureOutcome<T, E> {
    inner: BoxFuture<'static, Outcome<T, E>>,
}

impl<T, E> fmt::Debug for FutureOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureOutcome")
            .field("inner", &"<pending outcome>")
            .finish()
    }
}

impl<T, E> FutureOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    // ========== Constructors ==========

    /// Wrap a future that resolves to an [`Outcome`].
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        FutureOutcome {
            inner: future.boxed(),
        }
    }

    /// A proxy over an already-resolved outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::{FutureOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(42)).await;
    /// assert_eq!(outcome, Outcome::ok(42));
    /// # });
    /// ```
    pub fn ready(outcome: Outcome<T, E>) -> Self {
        FutureOutcome::new(std::future::ready(outcome))
    }

    /// Run a fallible asynchronous callback, capturing a trace on failure.
    ///
    /// The non-awaiting counterpart of [`Outcome::of_async`]: the callback is
    /// not started until the proxy is first polled.
    pub fn of<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        FutureOutcome::new(async move {
            match f().await {
                Ok(value) => Outcome::Ok(value),
                Err(error) => Outcome::Err(error, Trace::capture()),
            }
        })
    }

    // ========== The await-then-delegate seam ==========
    //
    // Every combinator below goes through one of these two helpers, keeping
    // the async surface a thin replay of the synchronous one.

    fn lift<T2, E2, F>(self, f: F) -> FutureOutcome<T2, E2>
    where
        T2: Send + 'static,
        E2: Send + 'static,
        F: FnOnce(Outcome<T, E>) -> Outcome<T2, E2> + Send + 'static,
    {
        FutureOutcome::new(async move { f(self.inner.await) })
    }

    fn lift_async<T2, E2, F, Fut>(self, f: F) -> FutureOutcome<T2, E2>
    where
        T2: Send + 'static,
        E2: Send + 'static,
        F: FnOnce(Outcome<T, E>) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T2, E2>> + Send + 'static,
    {
        FutureOutcome::new(async move { f(self.inner.await).await })
    }

    // ========== Transform combinators ==========

    /// [`Outcome::map`] over the pending outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::{FutureOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(21))
    ///     .map(|n| n * 2)
    ///     .await;
    /// assert_eq!(outcome, Outcome::ok(42));
    /// # });
    /// ```
    pub fn map<U, F>(self, f: F) -> FutureOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.lift(move |outcome| outcome.map(f))
    }

    /// [`Outcome::map_async`] over the pending outcome.
    pub fn map_async<U, F, Fut>(self, f: F) -> FutureOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        self.lift_async(move |outcome| outcome.map_async(f))
    }

    /// [`Outcome::map_err`] over the pending outcome; the original trace is
    /// preserved, as in the synchronous form.
    pub fn map_err<E2, F>(self, f: F) -> FutureOutcome<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        self.lift(move |outcome| outcome.map_err(f))
    }

    /// [`Outcome::map_err_async`] over the pending outcome.
    pub fn map_err_async<E2, F, Fut>(self, f: F) -> FutureOutcome<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = E2> + Send + 'static,
    {
        self.lift_async(move |outcome| outcome.map_err_async(f))
    }

    /// [`Outcome::and`] over the pending outcome.
    pub fn and<U>(self, other: Outcome<U, E>) -> FutureOutcome<U, E>
    where
        U: Send + 'static,
    {
        self.lift(move |outcome| outcome.and(other))
    }

    /// [`Outcome::and_then`] over the pending outcome.
    pub fn and_then<U, F>(self, f: F) -> FutureOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        self.lift(move |outcome| outcome.and_then(f))
    }

    /// [`Outcome::and_then_async`] over the pending outcome.
    pub fn and_then_async<U, F, Fut>(self, f: F) -> FutureOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<U, E>> + Send + 'static,
    {
        self.lift_async(move |outcome| outcome.and_then_async(f))
    }

    /// [`Outcome::or`] over the pending outcome, chaining traces when both
    /// sides fail.
    pub fn or<E2>(self, other: Outcome<T, E2>) -> FutureOutcome<T, E2>
    where
        E2: Send + 'static,
    {
        self.lift(move |outcome| outcome.or(other))
    }

    /// [`Outcome::or_else`] over the pending outcome.
    pub fn or_else<E2, F>(self, f: F) -> FutureOutcome<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> Outcome<T, E2> + Send + 'static,
    {
        self.lift(move |outcome| outcome.or_else(f))
    }

    /// [`Outcome::or_else_async`] over the pending outcome.
    pub fn or_else_async<E2, F, Fut>(self, f: F) -> FutureOutcome<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
    {
        self.lift_async(move |outcome| outcome.or_else_async(f))
    }

    /// [`Outcome::inspect`] over the pending outcome.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.lift(move |outcome| outcome.inspect(f))
    }

    /// [`Outcome::inspect_err`] over the pending outcome.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        self.lift(move |outcome| outcome.inspect_err(f))
    }

    // ========== Collapsing operations ==========

    /// [`Outcome::map_or`] over the pending outcome.
    pub async fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.inner.await.map_or(default, f)
    }

    /// [`Outcome::map_or_else`] over the pending outcome.
    pub async fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.inner.await.map_or_else(default, f)
    }

    /// [`Outcome::fold`] over the pending outcome, success handler first.
    pub async fn fold<U, F, G>(self, ok_fn: F, err_fn: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        self.inner.await.fold(ok_fn, err_fn)
    }

    /// [`Outcome::fold_async`] over the pending outcome.
    pub async fn fold_async<U, F, FFut, G, GFut>(self, ok_fn: F, err_fn: G) -> U
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
        G: FnOnce(E) -> GFut,
        GFut: Future<Output = U>,
    {
        self.inner.await.fold_async(ok_fn, err_fn).await
    }

    /// [`Outcome::unwrap_or`] over the pending outcome.
    pub async fn unwrap_or(self, default: T) -> T {
        self.inner.await.unwrap_or(default)
    }

    /// [`Outcome::unwrap_or_else`] over the pending outcome.
    pub async fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.inner.await.unwrap_or_else(f)
    }

    /// [`Outcome::contains`] over the pending outcome.
    pub async fn contains(self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.await.contains(value)
    }

    /// [`Outcome::contains_err`] over the pending outcome.
    pub async fn contains_err(self, error: &E) -> bool
    where
        E: PartialEq,
    {
        self.inner.await.contains_err(error)
    }
}

// Flatten for a proxy whose success payload is itself an outcome.
impl<T, E> FutureOutcome<Outcome<T, E>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Collapse one level of nesting once the pending outcome resolves.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::{FutureOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let nested = FutureOutcome::ready(
    ///     Outcome::<Outcome<i32, &str>, &str>::ok(Outcome::ok(42)),
    /// );
    /// assert_eq!(nested.flatten().await, Outcome::ok(42));
    /// # });
    /// ```
    pub fn flatten(self) -> FutureOutcome<T, E> {
        self.lift(Outcome::flatten)
    }
}

// Flatten for an outcome whose success payload is a pending computation.
impl<T, E> Outcome<FutureOutcome<T, E>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Collapse a pending inner computation into a single proxy.
    ///
    /// A failed outer outcome resolves immediately, payload and trace
    /// untouched; a successful one defers to the inner computation.
    ///
    /// # Example
    ///
    /// ```
    /// use watershed::{FutureOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let inner = FutureOutcome::ready(Outcome::<i32, &str>::ok(42));
    /// let nested: Outcome<FutureOutcome<i32, &str>, &str> = Outcome::ok(inner);
    /// assert_eq!(nested.flatten_async().await, Outcome::ok(42));
    /// # });
    /// ```
    pub fn flatten_async(self) -> FutureOutcome<T, E> {
        match self {
            Outcome::Ok(inner) => inner,
            Outcome::Err(error, trace) => FutureOutcome::ready(Outcome::Err(error, trace)),
        }
    }
}

impl<T, E> Future for FutureOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // BoxFuture is Unpin, so the wrapper is too.
        Pin::into_inner(self).inner.as_mut().poll(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traced_err(error: &'static str, cause: &str) -> Outcome<i32, &'static str> {
        Outcome::err_with_trace(error, Trace::message(cause))
    }

    #[tokio::test]
    async fn ready_resolves_to_the_wrapped_outcome() {
        let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(42)).await;
        assert_eq!(outcome, Outcome::ok(42));
    }

    #[tokio::test]
    async fn of_wraps_success_and_failure() {
        let ok = FutureOutcome::of(|| async { "42".parse::<i32>() }).await;
        assert_eq!(ok.ok_value(), Some(42));

        let err = FutureOutcome::of(|| async { "x".parse::<i32>() }).await;
        assert!(err.is_err());
        assert!(err.trace().is_some());
    }

    #[tokio::test]
    async fn chains_compose_without_intermediate_awaits() {
        let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(10))
            .map(|n| n + 1)
            .and_then(|n| Outcome::from_condition(n > 10, n * 2, "too small"))
            .map_err(|e| e.len())
            .await;
        assert_eq!(outcome, Outcome::ok(22));
    }

    #[tokio::test]
    async fn async_transforms_are_awaited_in_sequence() {
        let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(10))
            .map_async(|n| async move { n + 1 })
            .and_then_async(|n| async move { Outcome::<i32, &str>::ok(n * 2) })
            .await;
        assert_eq!(outcome, Outcome::ok(22));
    }

    #[tokio::test]
    async fn or_else_chains_traces_like_sync() {
        let outcome = FutureOutcome::ready(traced_err("e", "trace a"))
            .or_else(|e| traced_err(e, "trace b"))
            .await;
        assert_eq!(outcome, Outcome::err("e"));
        assert_eq!(outcome.trace().unwrap().to_string(), "trace b\ntrace a");
    }

    #[tokio::test]
    async fn collapsing_operations_await_directly() {
        assert_eq!(
            FutureOutcome::ready(Outcome::<i32, &str>::ok(21))
                .map_or(0, |n| n * 2)
                .await,
            42
        );
        assert_eq!(
            FutureOutcome::ready(Outcome::<i32, &str>::err("four"))
                .map_or_else(|e| e.len(), |n| n as usize)
                .await,
            4
        );
        assert_eq!(
            FutureOutcome::ready(Outcome::<i32, &str>::err("e"))
                .unwrap_or(7)
                .await,
            7
        );
        assert!(
            FutureOutcome::ready(Outcome::<i32, &str>::ok(2))
                .contains(&2)
                .await
        );
        assert!(
            FutureOutcome::ready(Outcome::<i32, &str>::err("e"))
                .contains_err(&"e")
                .await
        );
    }

    #[tokio::test]
    async fn inspect_observes_without_change() {
        use std::sync::atomic::{AtomicI32, Ordering};
        use std::sync::Arc;

        let seen = Arc::new(AtomicI32::new(0));
        let hook = Arc::clone(&seen);
        let outcome = FutureOutcome::ready(Outcome::<i32, &str>::ok(42))
            .inspect(move |n| hook.store(*n, Ordering::SeqCst))
            .await;
        assert_eq!(outcome, Outcome::ok(42));
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[tokio::test]
    async fn flatten_collapses_nested_proxy() {
        let nested = FutureOutcome::ready(Outcome::<Outcome<i32, &str>, &str>::ok(Outcome::ok(1)));
        assert_eq!(nested.flatten().await, Outcome::ok(1));

        let outer_err = FutureOutcome::ready(Outcome::<Outcome<i32, &str>, &str>::err("outer"));
        assert_eq!(outer_err.flatten().await, Outcome::err("outer"));
    }

    #[tokio::test]
    async fn flatten_async_defers_to_inner_computation() {
        let inner = FutureOutcome::ready(Outcome::<i32, &str>::ok(42));
        let nested: Outcome<FutureOutcome<i32, &str>, &str> = Outcome::ok(inner);
        assert_eq!(nested.flatten_async().await, Outcome::ok(42));

        let failed: Outcome<FutureOutcome<i32, &str>, &str> =
            Outcome::err_with_trace("outer", Trace::message("origin"));
        let resolved = failed.flatten_async().await;
        assert_eq!(resolved, Outcome::err("outer"));
        assert_eq!(resolved.trace().unwrap().causes(), &["origin"]);
    }

    #[tokio::test]
    async fn debug_renders_opaque_future() {
        let proxy = FutureOutcome::ready(Outcome::<i32, &str>::ok(1));
        let rendered = format!("{:?}", proxy);
        assert!(rendered.contains("FutureOutcome"));
        assert!(rendered.contains("<pending outcome>"));
    }
}
