//! Optional values as a special case of [`Fallible`].
//!
//! A [`Maybe<T>`] is a `Fallible<T, Absent>`: `some` is a success and `none` is a
//! failure whose error is the [`Absent`] marker. Every `Fallible` combinator
//! therefore works on `Maybe` with no conversion.
//!
//! ```rust
//! use fallible::{none, some, Maybe};
//!
//! let port: Maybe<u16> = some(8080);
//! assert_eq!(port.map(|p| p + 1).unwrap_or(80), 8081);
//!
//! let missing: Maybe<u16> = none();
//! assert_eq!(missing.map(|p| p + 1).unwrap_or(80), 80);
//! ```
use crate::Fallible;

/// Marker error of an empty [`Maybe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Absent;

impl std::fmt::Display for Absent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("absent")
    }
}

/// A value that may be missing.
pub type Maybe<T> = Fallible<T, Absent>;

/// A present value.
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Fallible::Success(value)
}

/// The missing value. Every call returns the same payload-free value.
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Fallible::Failure(Absent)
}

impl<T> Fallible<T, Absent> {
    /// Same as [`is_success`](Fallible::is_success).
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.is_success()
    }

    /// Same as [`is_failure`](Fallible::is_failure).
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.is_failure()
    }

    /// `some(v)` for `Some(v)`, `none()` for `None`.
    ///
    /// ```rust
    /// use fallible::{none, some, Maybe};
    ///
    /// assert_eq!(Maybe::from_option(Some(3)), some(3));
    /// assert_eq!(Maybe::<u8>::from_option(None), none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => some(v),
            None => none(),
        }
    }

    /// The present value, or `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.success_value()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{all, any, success};
    use std::cell::Cell;

    #[test]
    fn test_some_is_success() {
        let x: Maybe<i32> = some(3);
        assert!(x.is_some());
        assert!(x.is_success());
        assert!(!x.is_none());
        assert_eq!(x, success(3));
    }

    #[test]
    fn test_none_is_shared_failure() {
        let x: Maybe<i32> = none();
        assert!(x.is_none());
        assert!(x.is_failure());
        assert_eq!(x, none());
        assert_eq!(x.failure_value(), Some(Absent));
        assert_eq!(std::mem::size_of::<Absent>(), 0);
    }

    #[test]
    fn test_result_combinators_apply() {
        let calls = Cell::new(0);
        let inc = |v: i32| {
            calls.set(calls.get() + 1);
            v + 1
        };

        assert_eq!(some(1).map(inc), some(2));
        assert_eq!(none::<i32>().map(inc), none());
        assert_eq!(calls.get(), 1);

        assert_eq!(some(4).chain(|v| if v > 3 { some(v) } else { none() }), some(4));
        assert_eq!(some(2).chain(|v| if v > 3 { some(v) } else { none() }), none());
        assert_eq!(none::<i32>().unwrap_or_else(|Absent| 9), 9);
    }

    #[test]
    fn test_aggregation_over_maybe() {
        assert_eq!(all(vec![some(1), some(2)]), some(vec![1, 2]));
        assert_eq!(all(vec![some(1), none()]), none());
        assert_eq!(any(vec![none(), some(5)]), success(5));
    }

    #[test]
    #[should_panic]
    fn test_unwrap_none_panics() {
        none::<i32>().unwrap();
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Maybe::from(Some(0)), some(0));
        assert_eq!(Maybe::<i32>::from(None), none());
        assert_eq!(some("x").into_option(), Some("x"));
        assert_eq!(none::<&str>().into_option(), None);
    }
}
