//! Adapters that turn panicking calls, futures and nullable values into [`Fallible`].
//!
//! | source                              | adapter             |
//! |-------------------------------------|---------------------|
//! | closure that may panic              | [`from_try`]        |
//! | closure returning a future          | [`from_try_async`]  |
//! | future of `Result<V, E>`            | [`from_promise`]    |
//! | `Option<V>` plus a fallback error   | [`from_nullable`]   |
//!
//! Error-first callbacks go through [`from_outcome`](crate::from_outcome) and
//! its companions.
use std::future::IntoFuture;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[cfg(feature = "async")]
use futures::FutureExt;

use crate::{Fallible, Panic};

pub(crate) fn captured(payload: Box<dyn std::any::Any + Send>) -> Panic {
    let panic = Panic::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(%panic, "captured panic from wrapped call");
    panic
}

/// Calls `f`, turning a panic into a `Failure`.
///
/// `f` runs exactly once, synchronously. If it returns a future, that future is
/// the success value and is never polled here; see [`from_try_async`] for that.
///
/// ```rust
/// use fallible::from_try;
///
/// assert_eq!(from_try(|| 2 + 2).unwrap_or(0), 4);
///
/// let failed = from_try(|| -> i32 { panic!("no luck") });
/// assert_eq!(failed.unwrap_failure().message(), Some("no luck"));
/// ```
pub fn from_try<V, F>(f: F) -> Fallible<V, Panic>
where
    F: FnOnce() -> V,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Fallible::Success(value),
        Err(payload) => Fallible::Failure(captured(payload)),
    }
}

#[cfg(feature = "async")]
pub(crate) async fn catch_future<Fut>(future: Fut) -> Fallible<Fut::Output, Panic>
where
    Fut: std::future::Future,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Fallible::Success(value),
        Err(payload) => Fallible::Failure(captured(payload)),
    }
}

/// Calls `f` and awaits what it returns, turning a panic in either step into a
/// `Failure`.
///
/// Anything implementing [`IntoFuture`] may be returned, so a plain value goes
/// through [`std::future::ready`]. The returned future always resolves.
#[cfg(feature = "async")]
pub async fn from_try_async<F, Fut>(f: F) -> Fallible<Fut::Output, Panic>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
{
    match from_try(|| f().into_future()) {
        Fallible::Success(future) => catch_future(future).await,
        Fallible::Failure(panic) => Fallible::Failure(panic),
    }
}

/// Awaits a future of `Result<V, E>`: `Ok` becomes `Success`, `Err` becomes
/// `Failure`.
///
/// ```rust
/// use fallible::{failure, from_promise, success};
///
/// let ok = futures::executor::block_on(from_promise(async { Ok::<_, String>(3) }));
/// assert_eq!(ok, success(3));
///
/// let err = futures::executor::block_on(from_promise(async { Err::<i32, _>("refused") }));
/// assert_eq!(err, failure("refused"));
/// ```
pub async fn from_promise<Fut, V, E>(promise: Fut) -> Fallible<V, E>
where
    Fut: IntoFuture<Output = Result<V, E>>,
{
    promise.await.into()
}

/// `Success(v)` for `Some(v)`, otherwise `Failure(error)`.
///
/// Only `None` counts as missing: `0`, `false` and `""` are present values.
#[inline]
pub fn from_nullable<V, E>(value: Option<V>, error: E) -> Fallible<V, E> {
    match value {
        Some(v) => Fallible::Success(v),
        None => Fallible::Failure(error),
    }
}
