//! In-flight values.
//!
//! [`AsyncFallible`] adds a `Pending` state in front of [`Fallible`], which is the
//! usual shape of a loading indicator: nothing yet, then a value or an error.
//! This module never tracks transitions; callers replace one value with the next
//! as their operation progresses.
//!
//! ```rust
//! use fallible::{pending, success, AsyncFallible};
//!
//! let mut current: AsyncFallible<u32, String> = pending();
//! assert!(current.is_pending());
//!
//! current = success(7).into();
//! assert_eq!(current.settled(), Some(success(7)));
//! ```
use std::any::Any;
use std::future::IntoFuture;

use crate::Fallible;

/// Payload-free tag of an [`AsyncFallible`] or a [`Fallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Still in flight
    Pending,
    /// Settled with a value
    Success,
    /// Settled with an error
    Failure,
}

/// A [`Fallible`] that may not have settled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AsyncFallible<V, E> {
    /// No outcome yet
    Pending,
    /// Settled with a value
    Success(V),
    /// Settled with an error
    Failure(E),
}

/// The pending state. Every call returns the same payload-free value.
#[inline]
pub const fn pending<V, E>() -> AsyncFallible<V, E> {
    AsyncFallible::Pending
}

impl<V, E> Default for AsyncFallible<V, E> {
    fn default() -> Self {
        AsyncFallible::Pending
    }
}

impl<V, E> From<Fallible<V, E>> for AsyncFallible<V, E> {
    fn from(result: Fallible<V, E>) -> Self {
        match result {
            Fallible::Success(v) => AsyncFallible::Success(v),
            Fallible::Failure(e) => AsyncFallible::Failure(e),
        }
    }
}

impl<V, E> AsyncFallible<V, E> {
    /// Returns `true` if nothing has settled yet.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, AsyncFallible::Pending)
    }

    /// Returns `true` if this has settled, either way.
    #[inline]
    pub const fn is_result(&self) -> bool {
        !self.is_pending()
    }

    /// Returns `true` if this settled with a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, AsyncFallible::Success(_))
    }

    /// Returns `true` if this settled with an error.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, AsyncFallible::Failure(_))
    }

    /// The [`State`] tag, without the payload.
    ///
    /// ```rust
    /// use fallible::{pending, AsyncFallible, State};
    ///
    /// assert_eq!(pending::<u8, ()>().state(), State::Pending);
    /// assert_eq!(AsyncFallible::<u8, ()>::Success(1).state(), State::Success);
    /// ```
    #[inline]
    pub const fn state(&self) -> State {
        match self {
            AsyncFallible::Pending => State::Pending,
            AsyncFallible::Success(_) => State::Success,
            AsyncFallible::Failure(_) => State::Failure,
        }
    }

    /// The settled outcome, or `None` while pending.
    #[inline]
    pub fn settled(self) -> Option<Fallible<V, E>> {
        match self {
            AsyncFallible::Pending => None,
            AsyncFallible::Success(v) => Some(Fallible::Success(v)),
            AsyncFallible::Failure(e) => Some(Fallible::Failure(e)),
        }
    }

    /// Maps a settled value; `Pending` and failures pass through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> AsyncFallible<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            AsyncFallible::Pending => AsyncFallible::Pending,
            AsyncFallible::Success(v) => AsyncFallible::Success(f(v)),
            AsyncFallible::Failure(e) => AsyncFallible::Failure(e),
        }
    }

    /// Maps a settled error; `Pending` and successes pass through.
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> AsyncFallible<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            AsyncFallible::Pending => AsyncFallible::Pending,
            AsyncFallible::Success(v) => AsyncFallible::Success(v),
            AsyncFallible::Failure(e) => AsyncFallible::Failure(f(e)),
        }
    }

    /// Runs exactly one of the three handlers and returns what it returns.
    pub fn match_with<R, P, S, F>(self, pending: P, success: S, failure: F) -> R
    where
        P: FnOnce() -> R,
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self.settled() {
            None => pending(),
            Some(result) => result.match_with(success, failure),
        }
    }

    /// Asynchronous three-way match.
    ///
    /// Each handler returns something that can be awaited, so plain values go
    /// through [`std::future::ready`]. Exactly one handler runs, and its result
    /// is awaited even when the value is `Pending`.
    ///
    /// ```rust
    /// use std::future::ready;
    /// use fallible::{pending, AsyncFallible};
    ///
    /// let loading: AsyncFallible<u32, String> = pending();
    /// let label = futures::executor::block_on(loading.match_async(
    ///     || ready("loading"),
    ///     |_| ready("done"),
    ///     |_| ready("error"),
    /// ));
    /// assert_eq!(label, "loading");
    /// ```
    pub async fn match_async<R, P, PF, S, SF, F, FF>(self, pending: P, success: S, failure: F) -> R
    where
        P: FnOnce() -> PF,
        PF: IntoFuture<Output = R>,
        S: FnOnce(V) -> SF,
        SF: IntoFuture<Output = R>,
        F: FnOnce(E) -> FF,
        FF: IntoFuture<Output = R>,
    {
        match self {
            AsyncFallible::Pending => pending().await,
            AsyncFallible::Success(v) => success(v).await,
            AsyncFallible::Failure(e) => failure(e).await,
        }
    }
}

/// Returns `true` if `value` is a settled outcome over `V` and `E`: either a
/// [`Fallible<V, E>`] or an [`AsyncFallible<V, E>`] that is not pending.
///
/// Accepts any value and never panics.
///
/// ```rust
/// use fallible::{is_result, pending, success, AsyncFallible, Fallible};
///
/// let done: Fallible<i32, String> = success(1);
/// let loading: AsyncFallible<i32, String> = pending();
///
/// assert!(is_result::<i32, String>(&done));
/// assert!(!is_result::<i32, String>(&loading));
/// assert!(!is_result::<i32, String>(&"success"));
/// ```
pub fn is_result<V: 'static, E: 'static>(value: &dyn Any) -> bool {
    value.is::<Fallible<V, E>>()
        || value
            .downcast_ref::<AsyncFallible<V, E>>()
            .is_some_and(AsyncFallible::is_result)
}

/// Returns `true` if `value` is the pending state of an [`AsyncFallible<V, E>`].
pub fn is_pending<V: 'static, E: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<AsyncFallible<V, E>>()
        .is_some_and(AsyncFallible::is_pending)
}

/// Returns `true` if `value` is pending or a settled outcome over `V` and `E`.
///
/// Anything else, including `Option`, `std::result::Result` or outcomes over other
/// types, is rejected.
pub fn is_async_result<V: 'static, E: 'static>(value: &dyn Any) -> bool {
    is_pending::<V, E>(value) || is_result::<V, E>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{failure, success};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::future::ready;

    #[test]
    fn test_states_are_exclusive() {
        let p: AsyncFallible<i32, &str> = pending();
        let s: AsyncFallible<i32, &str> = success(1).into();
        let f: AsyncFallible<i32, &str> = failure("e").into();

        assert!(p.is_pending() && !p.is_result());
        assert!(s.is_result() && s.is_success() && !s.is_failure());
        assert!(f.is_result() && f.is_failure() && !f.is_success());

        assert_eq!(p.state(), State::Pending);
        assert_eq!(s.state(), State::Success);
        assert_eq!(f.state(), State::Failure);
    }

    #[test]
    fn test_pending_is_shared_and_default() {
        assert_eq!(pending::<i32, &str>(), pending());
        assert_eq!(AsyncFallible::<i32, &str>::default(), pending());
    }

    #[test]
    fn test_settled() {
        assert_eq!(pending::<i32, &str>().settled(), None);
        assert_eq!(AsyncFallible::<i32, &str>::Success(2).settled(), Some(success(2)));
        assert_eq!(AsyncFallible::<i32, &str>::Failure("e").settled(), Some(failure("e")));
    }

    #[test]
    fn test_map_and_map_failure() {
        let p: AsyncFallible<i32, &str> = pending();
        assert_eq!(p.map(|v| v + 1), pending());
        assert_eq!(
            AsyncFallible::<i32, &str>::Success(1).map(|v| v + 1),
            AsyncFallible::Success(2)
        );
        assert_eq!(
            AsyncFallible::<i32, &str>::Failure("abc").map_failure(str::len),
            AsyncFallible::Failure(3)
        );
    }

    #[test]
    fn test_match_with() {
        let label = |r: AsyncFallible<i32, &str>| r.match_with(|| "p", |_| "s", |_| "f");
        assert_eq!(label(pending()), "p");
        assert_eq!(label(success(1).into()), "s");
        assert_eq!(label(failure("e").into()), "f");
    }

    #[test]
    fn test_match_async_pending_only_runs_pending_handler() {
        let calls = Cell::new((0, 0, 0));
        let r: AsyncFallible<i32, &str> = pending();

        let out = block_on(r.match_async(
            || {
                let (p, s, f) = calls.get();
                calls.set((p + 1, s, f));
                ready("p")
            },
            |_| {
                let (p, s, f) = calls.get();
                calls.set((p, s + 1, f));
                ready("s")
            },
            |_| {
                let (p, s, f) = calls.get();
                calls.set((p, s, f + 1));
                ready("f")
            },
        ));

        assert_eq!(out, "p");
        assert_eq!(calls.get(), (1, 0, 0));
    }

    #[test]
    fn test_match_async_with_async_handlers() {
        let r: AsyncFallible<i32, &str> = success(20).into();
        let out = block_on(r.match_async(
            || ready(0),
            |v| async move { v + 1 },
            |_| async { -1 },
        ));
        assert_eq!(out, 21);

        let r: AsyncFallible<i32, &str> = failure("bad").into();
        let out = block_on(r.match_async(
            || ready(0),
            |v| ready(v),
            |e| async move { e.len() as i32 },
        ));
        assert_eq!(out, 3);
    }

    #[test]
    fn test_dynamic_classifiers_accept_own_types() {
        let done: Fallible<i32, String> = success(1);
        let failed: Fallible<i32, String> = failure("e".to_string());
        let settled: AsyncFallible<i32, String> = success(1).into();
        let loading: AsyncFallible<i32, String> = pending();

        assert!(is_result::<i32, String>(&done));
        assert!(is_result::<i32, String>(&failed));
        assert!(is_result::<i32, String>(&settled));
        assert!(!is_result::<i32, String>(&loading));

        assert!(is_pending::<i32, String>(&loading));
        assert!(!is_pending::<i32, String>(&settled));
        assert!(!is_pending::<i32, String>(&done));

        let ours: [&dyn Any; 4] = [&done, &failed, &settled, &loading];
        for value in ours {
            assert!(is_async_result::<i32, String>(value));
        }
    }

    #[test]
    fn test_dynamic_classifiers_reject_foreign_values() {
        let ok: Result<i32, String> = Ok(1);
        let some: Option<i32> = Some(1);
        let other_types: Fallible<u8, String> = success(1);
        let closure = || 1;
        let foreign: [&dyn Any; 7] =
            [&(), &0_i32, &"success", &vec![1, 2], &ok, &some, &other_types];

        for value in foreign {
            assert!(!is_async_result::<i32, String>(value));
            assert!(!is_result::<i32, String>(value));
            assert!(!is_pending::<i32, String>(value));
        }
        assert!(!is_async_result::<i32, String>(&closure));
    }
}
