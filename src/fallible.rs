use std::any::Any;

use crate::pending::State;

/// The outcome of a fallible operation: either a success value or a failure error.
///
/// `Fallible` is a plain value. Combinators consume `self` and hand back a new
/// value, so a `Fallible` is never changed in place once built.
///
/// # Examples
///
/// ```rust
/// use fallible::{failure, success, Fallible};
///
/// let parsed: Fallible<i32, &str> = success(21);
/// assert_eq!(parsed.map(|x| x * 2), success(42));
///
/// let broken: Fallible<i32, &str> = failure("not a number");
/// assert_eq!(broken.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fallible<V, E> {
    /// The operation produced a value
    Success(V),
    /// The operation failed with an error
    Failure(E),
}

/// Wrap `value` as a success.
#[inline]
pub const fn success<V, E>(value: V) -> Fallible<V, E> {
    Fallible::Success(value)
}

/// Wrap `error` as a failure.
///
/// Any error value is accepted, including `()` or `None`: the variant, not the
/// payload, decides what a `Fallible` is.
///
/// ```rust
/// use fallible::{failure, Fallible};
///
/// let r: Fallible<i32, Option<&str>> = failure(None);
/// assert!(r.is_failure());
/// ```
#[inline]
pub const fn failure<V, E>(error: E) -> Fallible<V, E> {
    Fallible::Failure(error)
}

impl<V, E> Fallible<V, E> {
    /// Returns `true` if this is a `Success`.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// assert!(success::<i32, ()>(1).is_success());
    /// assert!(!failure::<i32, ()>(()).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Fallible::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Fallible::Failure(_))
    }

    /// The payload-free tag of this value.
    #[inline]
    pub const fn state(&self) -> State {
        match self {
            Fallible::Success(_) => State::Success,
            Fallible::Failure(_) => State::Failure,
        }
    }

    /// Converts into `Option<V>`, discarding the error, if any.
    #[inline]
    pub fn success_value(self) -> Option<V> {
        match self {
            Fallible::Success(v) => Some(v),
            Fallible::Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding the value, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Fallible::Success(_) => None,
            Fallible::Failure(e) => Some(e),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. The error itself is the panic payload, so a
    /// `catch_unwind` further up recovers the original value with `downcast`.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// assert_eq!(success::<_, &str>(5).unwrap(), 5);
    ///
    /// let caught = std::panic::catch_unwind(|| failure::<i32, _>("boom").unwrap());
    /// let payload = caught.unwrap_err();
    /// assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> V
    where
        E: Any + Send,
    {
        match self {
            Fallible::Success(v) => v,
            Fallible::Failure(e) => std::panic::panic_any(e),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> V {
        match self {
            Fallible::Success(v) => v,
            Fallible::Failure(_) => panic!("{}", msg),
        }
    }

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Fallible::Success(_) => {
                panic!("called `Fallible::unwrap_failure()` on a `Success` value")
            }
            Fallible::Failure(e) => e,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Fallible::Success(v) => v,
            Fallible::Failure(_) => default,
        }
    }

    /// Returns the success value, or `None` when there is none.
    ///
    /// Same as [`success_value`](Self::success_value); kept for symmetry with the
    /// rest of the `unwrap_or*` family.
    #[inline]
    pub fn unwrap_or_undefined(self) -> Option<V> {
        self.success_value()
    }

    /// Returns the success value or `V::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> V
    where
        V: Default,
    {
        match self {
            Fallible::Success(v) => v,
            Fallible::Failure(_) => V::default(),
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// `f` only runs for a `Failure`.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// let ok: Fallible<usize, &str> = success(5);
    /// assert_eq!(ok.unwrap_or_else(|_| unreachable!()), 5);
    ///
    /// let err: Fallible<usize, &str> = failure("four");
    /// assert_eq!(err.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Fallible::Success(v) => v,
            Fallible::Failure(e) => f(e),
        }
    }

    /// Turns a failure into a success computed from the error.
    ///
    /// The result is always a `Success`; its error type is free so it can join any
    /// pipeline.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// let err: Fallible<usize, &str> = failure("oops");
    /// let fixed: Fallible<usize, ()> = err.recover(|e| e.len());
    /// assert_eq!(fixed, success(4));
    /// ```
    #[inline]
    pub fn recover<E2, F>(self, f: F) -> Fallible<V, E2>
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Fallible::Success(v) => Fallible::Success(v),
            Fallible::Failure(e) => Fallible::Success(f(e)),
        }
    }

    /// Maps the success value; a failure passes through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Fallible::Success(v) => Fallible::Success(f(v)),
            Fallible::Failure(e) => Fallible::Failure(e),
        }
    }

    /// Maps the failure error; a success passes through untouched.
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Fallible<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Fallible::Success(v) => Fallible::Success(v),
            Fallible::Failure(e) => Fallible::Failure(f(e)),
        }
    }

    /// Applies `f` to the success value, or returns `default` for a failure.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Fallible::Success(v) => f(v),
            Fallible::Failure(_) => default,
        }
    }

    /// Sequences another fallible step after a success.
    ///
    /// A failure is returned as-is and `f` never runs.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// fn half(x: i32) -> Fallible<i32, String> {
    ///     if x % 2 == 0 { success(x / 2) } else { failure(format!("{x} is odd")) }
    /// }
    ///
    /// assert_eq!(success(8).chain(half).chain(half), success(2));
    /// assert_eq!(success(6).chain(half).chain(half), failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(V) -> Fallible<U, E>,
    {
        match self {
            Fallible::Success(v) => f(v),
            Fallible::Failure(e) => Fallible::Failure(e),
        }
    }

    /// Alias of [`chain`](Self::chain).
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(V) -> Fallible<U, E>,
    {
        self.chain(f)
    }

    /// Tries an alternative after a failure; a success passes through.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Fallible<V, E2>
    where
        F: FnOnce(E) -> Fallible<V, E2>,
    {
        match self {
            Fallible::Success(v) => Fallible::Success(v),
            Fallible::Failure(e) => f(e),
        }
    }

    /// Calls `f` with a reference to the success value, if any.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Fallible::Success(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `f` with a reference to the failure error, if any.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Fallible::Failure(e) = &self {
            f(e);
        }
        self
    }

    /// Runs exactly one of the two handlers and returns what it returns.
    ///
    /// ```rust
    /// use fallible::{failure, Fallible};
    ///
    /// let r: Fallible<u8, &str> = failure("nope");
    /// let text = r.match_with(|v| format!("got {v}"), |e| format!("failed: {e}"));
    /// assert_eq!(text, "failed: nope");
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Fallible::Success(v) => success(v),
            Fallible::Failure(e) => failure(e),
        }
    }

    /// Converts from `&Fallible<V, E>` to `Fallible<&V, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Fallible<&V, &E> {
        match self {
            Fallible::Success(v) => Fallible::Success(v),
            Fallible::Failure(e) => Fallible::Failure(e),
        }
    }

    /// Converts from `&mut Fallible<V, E>` to `Fallible<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Fallible<&mut V, &mut E> {
        match self {
            Fallible::Success(v) => Fallible::Success(v),
            Fallible::Failure(e) => Fallible::Failure(e),
        }
    }

    /// Swaps the variants.
    #[inline]
    pub fn flip(self) -> Fallible<E, V> {
        match self {
            Fallible::Success(v) => Fallible::Failure(v),
            Fallible::Failure(e) => Fallible::Success(e),
        }
    }

    /// Returns `true` if this is a `Success` holding a value equal to `value`.
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: PartialEq<V>,
    {
        matches!(self, Fallible::Success(v) if value == v)
    }
}

/// Collects every success value, stopping at the first failure.
///
/// Elements are pulled from `results` in order. The first `Failure` is returned
/// exactly as it was found and nothing after it is pulled. Otherwise the values
/// come back in input order.
///
/// ```rust
/// use fallible::{all, failure, success, Fallible};
///
/// let ok: Vec<Fallible<i32, &str>> = vec![success(1), success(2), success(3)];
/// assert_eq!(all(ok), success(vec![1, 2, 3]));
///
/// let mixed: Vec<Fallible<i32, &str>> = vec![success(1), failure("x"), success(3)];
/// assert_eq!(all(mixed), failure("x"));
/// ```
pub fn all<V, E, I>(results: I) -> Fallible<Vec<V>, E>
where
    I: IntoIterator<Item = Fallible<V, E>>,
{
    let results = results.into_iter();
    let mut values = Vec::with_capacity(results.size_hint().0);
    for result in results {
        match result {
            Fallible::Success(v) => values.push(v),
            Fallible::Failure(e) => return Fallible::Failure(e),
        }
    }
    Fallible::Success(values)
}

/// Returns the first success, or every error if nothing succeeded.
///
/// Elements are pulled from `results` in order and nothing after the first
/// `Success` is pulled. When every element fails, the errors come back in input
/// order.
///
/// ```rust
/// use fallible::{any, failure, success, Fallible};
///
/// let some_ok: Vec<Fallible<i32, &str>> = vec![failure("a"), success(2), failure("c")];
/// assert_eq!(any(some_ok), success(2));
///
/// let none_ok: Vec<Fallible<i32, &str>> = vec![failure("a"), failure("b")];
/// assert_eq!(any(none_ok), failure(vec!["a", "b"]));
/// ```
pub fn any<V, E, I>(results: I) -> Fallible<V, Vec<E>>
where
    I: IntoIterator<Item = Fallible<V, E>>,
{
    let results = results.into_iter();
    let mut errors = Vec::with_capacity(results.size_hint().0);
    for result in results {
        match result {
            Fallible::Success(v) => return Fallible::Success(v),
            Fallible::Failure(e) => errors.push(e),
        }
    }
    Fallible::Failure(errors)
}

impl<V, E> FromIterator<Fallible<V, E>> for Fallible<Vec<V>, E> {
    /// Same semantics as [`all`].
    fn from_iter<I: IntoIterator<Item = Fallible<V, E>>>(iter: I) -> Self {
        all(iter)
    }
}
