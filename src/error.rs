//! Helpers at the boundary between panics and values.
//!
//! [`raise`], [`must`], [`strict_must`], [`assert`] and [`assert_never`] panic on
//! purpose, for call sites that want to fail fast. [`safely`] and [`attempt`] go
//! the other way and turn a panic back into a value.
//!
//! Panics raised here carry an [`Error`] payload, so code that catches them (for
//! instance through [`attempt`]) can tell them apart from other panics.
use std::any::Any;
use std::fmt::Debug;
#[cfg(feature = "async")]
use std::future::IntoFuture;

use crate::interop::from_try;
use crate::{Fallible, Panic};

/// Failures reported by the boundary helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required value was missing.
    #[error("{message}")]
    Missing { message: String },

    /// An asserted condition did not hold.
    #[error("{message}")]
    Assertion { message: String },

    /// A value reached a branch that should be impossible.
    #[error("{message}")]
    Unreachable { message: String },
}

impl Error {
    /// The human-readable message, also used for `Display`.
    ///
    /// ```rust
    /// use fallible::Error;
    ///
    /// let e = Error::Missing { message: "no id".to_string() };
    /// assert_eq!(e.message(), "no id");
    /// ```
    pub fn message(&self) -> &str {
        match self {
            Error::Missing { message }
            | Error::Assertion { message }
            | Error::Unreachable { message } => message,
        }
    }
}

/// Panics with `error` as the payload. Never returns, so it fits in expression
/// position.
///
/// ```rust
/// use fallible::{attempt, raise};
///
/// let parsed = attempt(|| "12".parse::<u8>().unwrap_or_else(|e| raise(e)));
/// assert_eq!(parsed.unwrap_or(0), 12);
/// ```
#[track_caller]
pub fn raise<E>(error: E) -> !
where
    E: Any + Send,
{
    std::panic::panic_any(error)
}

/// Returns the value, or panics with [`Error::Missing`] if there is none.
#[track_caller]
pub fn must<T>(value: Option<T>, message: Option<&str>) -> T {
    match value {
        Some(v) => v,
        None => raise(Error::Missing {
            message: message.unwrap_or("value is missing").to_owned(),
        }),
    }
}

/// Like [`must`], but only an absent value (the outer `None`) panics. A present
/// null (`Some(None)`) passes through as `None`.
///
/// ```rust
/// use fallible::strict_must;
///
/// assert_eq!(strict_must(Some(Some(1)), None), Some(1));
/// assert_eq!(strict_must(Some(None::<i32>), None), None);
/// ```
#[track_caller]
pub fn strict_must<T>(value: Option<Option<T>>, message: Option<&str>) -> Option<T> {
    match value {
        Some(v) => v,
        None => raise(Error::Missing {
            message: message.unwrap_or("value is absent").to_owned(),
        }),
    }
}

/// Panics with [`Error::Assertion`] unless `condition` holds.
#[track_caller]
pub fn assert(condition: bool, message: Option<&str>) {
    if !condition {
        raise(Error::Assertion {
            message: message.unwrap_or("assertion failed").to_owned(),
        })
    }
}

/// Marks a branch that should never run, panicking with [`Error::Unreachable`].
///
/// ```rust,should_panic
/// use fallible::assert_never;
///
/// #[derive(Debug)]
/// enum Light { Red, Green }
///
/// fn go(light: Light) -> bool {
///     match light {
///         Light::Green => true,
///         other => assert_never(other),
///     }
/// }
///
/// go(Light::Red);
/// ```
#[track_caller]
pub fn assert_never<T: Debug>(value: T) -> ! {
    raise(Error::Unreachable {
        message: format!("unexpected value: {value:?}"),
    })
}

/// Calls `f`, turning a panic into a [`Panic`] failure. Same as
/// [`from_try`](crate::from_try).
pub fn attempt<V, F>(f: F) -> Fallible<V, Panic>
where
    F: FnOnce() -> V,
{
    from_try(f)
}

/// Calls `f`, or returns `default` if it panics.
///
/// ```rust
/// use fallible::safely;
///
/// assert_eq!(safely(|| -> &'static str { panic!("x") }, "default"), "default");
/// assert_eq!(safely(|| "value", "default"), "value");
/// ```
pub fn safely<V, F>(f: F, default: V) -> V
where
    F: FnOnce() -> V,
{
    attempt(f).unwrap_or(default)
}

/// Awaits `future`, turning a panic while it is polled into a [`Panic`] failure.
#[cfg(feature = "async")]
pub async fn attempt_async<Fut>(future: Fut) -> Fallible<Fut::Output, Panic>
where
    Fut: IntoFuture,
{
    crate::interop::catch_future(future.into_future()).await
}

/// Awaits `future`, or returns `default` if it panics.
#[cfg(feature = "async")]
pub async fn safely_async<Fut>(future: Fut, default: Fut::Output) -> Fut::Output
where
    Fut: IntoFuture,
{
    attempt_async(future).await.unwrap_or(default)
}
