//! Conversions between [`Fallible`] and the standard and `either` sum types.
//!
//! With [`Either`], `Right` is the success side and `Left` the failure side.
use either::Either;

use crate::Fallible;

impl<V, E> From<Result<V, E>> for Fallible<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => Fallible::Success(v),
            Err(e) => Fallible::Failure(e),
        }
    }
}

impl<V, E> From<Fallible<V, E>> for Result<V, E> {
    fn from(result: Fallible<V, E>) -> Self {
        result.into_result()
    }
}

impl<V, E> From<Either<E, V>> for Fallible<V, E> {
    fn from(either: Either<E, V>) -> Self {
        match either {
            Either::Left(e) => Fallible::Failure(e),
            Either::Right(v) => Fallible::Success(v),
        }
    }
}

impl<V, E> From<Fallible<V, E>> for Either<E, V> {
    fn from(result: Fallible<V, E>) -> Self {
        result.into_either()
    }
}

impl<V, E> Fallible<V, E> {
    /// Converts into a standard `Result`, so `?` can take over.
    ///
    /// ```rust
    /// use fallible::{failure, success, Fallible};
    ///
    /// fn total(a: Fallible<u32, String>, b: Fallible<u32, String>) -> Result<u32, String> {
    ///     Ok(a.into_result()? + b.into_result()?)
    /// }
    ///
    /// assert_eq!(total(success(1), success(2)), Ok(3));
    /// assert_eq!(total(success(1), failure("b".into())), Err("b".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Fallible::Success(v) => Ok(v),
            Fallible::Failure(e) => Err(e),
        }
    }

    /// `Right` for a success, `Left` for a failure.
    ///
    /// ```rust
    /// use either::Either;
    /// use fallible::{failure, success, Fallible};
    ///
    /// assert_eq!(success::<u8, &str>(1).into_either(), Either::Right(1));
    /// assert_eq!(failure::<u8, &str>("no").into_either(), Either::Left("no"));
    /// ```
    #[inline]
    pub fn into_either(self) -> Either<E, V> {
        match self {
            Fallible::Success(v) => Either::Right(v),
            Fallible::Failure(e) => Either::Left(e),
        }
    }
}
