//! # Fallible: Failures as Values
//!
//! Represent the outcome of fallible work as plain values, transform and combine
//! them, and bridge to code that panics, returns futures or reports through
//! error-first callbacks.
//!
//! ## Core Types
//!
//! - **[`Fallible<V, E>`]**: `Success(V)` or `Failure(E)`
//! - **[`Maybe<T>`]**: a `Fallible<T, Absent>`, so every combinator applies to it as-is
//! - **[`AsyncFallible<V, E>`]**: `Pending`, `Success(V)` or `Failure(E)`
//! - **[`Outcome<V, E>`]**: the `(error, value)` pair of an error-first callback
//!
//! ## Example
//!
//! ```
//! use fallible::*;
//!
//! fn parse(input: &str) -> Fallible<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! // Transform and combine
//! let sum = all(["1", "2", "3"].map(parse)).map(|xs| xs.iter().sum::<i32>());
//! assert_eq!(sum, success(6));
//!
//! // First failure wins
//! let bad = all(["1", "x"].map(parse));
//! assert!(bad.is_failure());
//!
//! // Lift a panicking call into a value
//! let caught = from_try(|| must(None::<i32>, Some("no id")));
//! assert_eq!(caught.unwrap_failure().message(), Some("no id"));
//! ```
//!
//! ## Common Functions
//!
//! **Building values:**
//! - [`success(v)`] / [`failure(e)`] - Wrap a value or an error
//! - [`some(v)`] / [`none()`] - Present or missing [`Maybe`] values
//! - [`pending()`] - The in-flight [`AsyncFallible`] state
//!
//! **Combining:**
//! - [`all(results)`] - Every value, or the first failure
//! - [`any(results)`] - The first success, or every error
//!
//! **Interop:**
//! - [`from_try(f)`] / [`from_try_async(f)`] - Catch panics
//! - [`from_promise(future)`] - Await a future of `Result`
//! - [`from_nullable(value, error)`] - Treat `None` as a failure
//! - [`from_outcome(pair)`] / [`from_node_callback(f)`] / [`lift_outcome(consumer)`] -
//!   Error-first callbacks
//!
//! **Boundaries:**
//! - [`raise`], [`must`], [`strict_must`], [`assert`], [`assert_never`] - Fail fast
//! - [`safely`], [`attempt`] - Turn a panic back into a value
//!
//! ## Features
//!
//! - `async` (default): future and callback adapters, built on `futures`
//! - `tracing` (default): debug events when an adapter captures a panic

mod convert;
mod error;
mod fallible;
mod interop;
mod maybe;
mod outcome;
mod panic;
mod pending;
pub mod prelude;

pub use error::*;
pub use fallible::*;
pub use interop::*;
pub use maybe::*;
pub use outcome::*;
pub use panic::Panic;
pub use pending::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum FetchError {
        Offline,
        NotFound(String),
    }

    fn lookup(key: &str) -> Fallible<u32, FetchError> {
        match key {
            "a" => success(1),
            "b" => success(2),
            "offline" => failure(FetchError::Offline),
            other => failure(FetchError::NotFound(other.to_string())),
        }
    }

    #[test]
    fn test_lookup_pipeline() {
        let total = all(["a", "b"].map(lookup)).map(|xs| xs.into_iter().sum::<u32>());
        assert_eq!(total, success(3));

        let missing = all(["a", "zzz", "offline"].map(lookup));
        assert_eq!(missing, failure(FetchError::NotFound("zzz".to_string())));

        let fallback = any(["offline", "b"].map(lookup));
        assert_eq!(fallback, success(2));
    }

    #[test]
    fn test_maybe_feeds_result_combinators() {
        let port: Maybe<&str> = from_nullable(Some("8080"), Absent);
        let parsed = port.chain(|p| Fallible::from(p.parse::<u16>().map_err(|_| Absent)));
        assert_eq!(parsed, some(8080));
        assert_eq!(parsed.recover::<Absent, _>(|Absent| 80), some(8080));
        assert_eq!(none::<u16>().recover::<Absent, _>(|Absent| 80), some(80));
    }

    #[test]
    fn test_loading_state_flow() {
        let mut view: AsyncFallible<u32, FetchError> = pending();
        let render = |v: &AsyncFallible<u32, FetchError>| {
            v.clone().match_with(
                || "loading".to_string(),
                |n| format!("{n} items"),
                |e| format!("error: {e:?}"),
            )
        };

        assert_eq!(render(&view), "loading");
        view = lookup("b").into();
        assert_eq!(render(&view), "2 items");
        view = lookup("offline").into();
        assert_eq!(render(&view), "error: Offline");
    }

    #[test]
    fn test_boundary_helpers_round_trip_through_values() {
        let checked = attempt(|| {
            let id = must(Some(5_u32), None);
            assert(id > 3, Some("id too small"));
            id
        });
        assert_eq!(checked.unwrap_or(0), 5);

        let rejected = attempt(|| assert(false, Some("id too small")));
        let panic = rejected.unwrap_failure();
        assert_eq!(
            panic.downcast_ref::<Error>(),
            Some(&Error::Assertion { message: "id too small".to_string() })
        );
    }

    #[cfg(feature = "async")]
    #[test]
    fn test_callback_to_view_state() {
        use futures::executor::block_on;

        let fetched = block_on(from_node_callback(|cb: Callback<u32, FetchError>| {
            let (error, value) = to_outcome(lookup("a"));
            cb.call(error, value)
        }));
        let view: AsyncFallible<u32, FetchError> = fetched.into();
        assert!(view.is_success());

        let label = block_on(view.match_async(
            || std::future::ready(0),
            |n| async move { n * 10 },
            |_| std::future::ready(0),
        ));
        assert_eq!(label, 10);
    }
}
