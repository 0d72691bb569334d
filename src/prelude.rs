//! Commonly used imports
//!
//! Use `use fallible::prelude::*;` for quick access to the most common types and functions.
//! The boundary helpers that panic on purpose are left out; import them by name.

// Core types
pub use crate::{Absent, AsyncFallible, Fallible, Maybe, Outcome, Panic, State};

// Constructors
pub use crate::{failure, none, pending, some, success};

// Aggregation
pub use crate::{all, any};

// Interop
pub use crate::{from_nullable, from_outcome, from_promise, from_try, lift_outcome, to_outcome};
#[cfg(feature = "async")]
pub use crate::{from_node_callback, from_try_async};
