//! Error-first callback interop.
//!
//! An [`Outcome`] is the `(error, value)` pair a conventional error-first
//! callback receives. It only exists at the boundary: [`from_outcome`] turns it
//! into a [`Fallible`] and [`to_outcome`] turns a `Fallible` back into one.
//!
//! The value slot holds `V` itself, and nothing is filled in for it. Callbacks
//! that report completion without a value use `V = ()`; callbacks whose value
//! may be missing use `V = Option<T>` and get that `Option` back as the success.
#[cfg(feature = "async")]
use futures::channel::oneshot;

use crate::Fallible;

/// `(error, value)`. A filled error slot wins over the value.
pub type Outcome<V, E> = (Option<E>, V);

/// `Failure(e)` when the error slot is filled, otherwise `Success` of the value.
///
/// ```rust
/// use fallible::{failure, from_outcome, success, Fallible};
///
/// assert_eq!(from_outcome::<i32, &str>((None, 42)), success(42));
/// assert_eq!(from_outcome::<Option<i32>, &str>((Some("err"), None)), failure("err"));
///
/// let done: Fallible<(), &str> = from_outcome((None, ()));
/// assert_eq!(done, success(()));
/// ```
pub fn from_outcome<V, E>(outcome: Outcome<V, E>) -> Fallible<V, E> {
    match outcome {
        (Some(error), _) => Fallible::Failure(error),
        (None, value) => Fallible::Success(value),
    }
}

/// The `(error, value)` pair for a [`Fallible`].
///
/// A failure leaves `V::default()` in the value slot, the way error-first
/// callbacks leave it empty. `from_outcome(to_outcome(r)) == r` for every `r`.
///
/// ```rust
/// use fallible::{failure, success, to_outcome};
///
/// assert_eq!(to_outcome::<Option<u8>, &str>(success(Some(1))), (None, Some(1)));
/// assert_eq!(to_outcome::<Option<u8>, &str>(failure("closed")), (Some("closed"), None));
/// ```
pub fn to_outcome<V, E>(result: Fallible<V, E>) -> Outcome<V, E>
where
    V: Default,
{
    match result {
        Fallible::Success(value) => (None, value),
        Fallible::Failure(error) => (Some(error), V::default()),
    }
}

/// Builds an error-first callback that hands each `(error, value)` pair to
/// `consumer` as a [`Fallible`].
///
/// ```rust
/// use fallible::{lift_outcome, success, Fallible};
///
/// let mut seen = Vec::new();
/// let mut callback = lift_outcome(|r: Fallible<u8, String>| seen.push(r));
/// callback(None, 1);
/// callback(Some("closed".to_string()), 0);
/// drop(callback);
///
/// assert_eq!(seen, vec![success(1), Fallible::Failure("closed".to_string())]);
/// ```
pub fn lift_outcome<V, E, C>(mut consumer: C) -> impl FnMut(Option<E>, V)
where
    C: FnMut(Fallible<V, E>),
{
    move |error, value| consumer(from_outcome((error, value)))
}

/// The error-first callback given to the function wrapped by [`from_node_callback`].
///
/// Calling it consumes it, so the outcome is settled at most once.
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Callback<V, E> {
    sender: oneshot::Sender<Fallible<V, E>>,
}

#[cfg(feature = "async")]
impl<V, E> Callback<V, E> {
    /// Settles the pending [`from_node_callback`] future.
    pub fn call(self, error: Option<E>, value: V) {
        // receiver gone: the caller stopped waiting
        let _ = self.sender.send(from_outcome((error, value)));
    }

    /// This callback as a plain closure, for APIs that take one.
    pub fn into_fn(self) -> impl FnOnce(Option<E>, V) {
        move |error, value| self.call(error, value)
    }
}

/// Runs `f` with an error-first [`Callback`] and resolves once it is called.
///
/// The result is `from_outcome((error, value))` for the pair passed to the
/// callback. There is no timeout: if `f` drops the callback without calling it,
/// the returned future never resolves.
///
/// ```rust
/// use fallible::{from_node_callback, success};
///
/// fn read_len(path: &str, done: impl FnOnce(Option<String>, usize)) {
///     done(None, path.len())
/// }
///
/// let len = from_node_callback(|cb| read_len("a.txt", cb.into_fn()));
/// assert_eq!(futures::executor::block_on(len), success(5));
/// ```
#[cfg(feature = "async")]
pub async fn from_node_callback<V, E, F>(f: F) -> Fallible<V, E>
where
    F: FnOnce(Callback<V, E>),
{
    let (sender, receiver) = oneshot::channel();
    f(Callback { sender });
    match receiver.await {
        Ok(result) => result,
        Err(oneshot::Canceled) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("error-first callback dropped without being called");
            std::future::pending().await
        }
    }
}
