//! # precept-guard
//!
//! Fluent argument guards: state preconditions on a function's arguments as a
//! readable chain of checks, and get a typed, descriptive error for the first
//! one that fails.
//!
//! ## Quick Start
//!
//! ```
//! use precept_guard::{ErrorKind, GuardError, requires};
//!
//! fn withdraw(amount: i64, note: Option<&str>) -> Result<(), GuardError> {
//!     requires(amount, "amount")
//!         .is_greater_than(0)?
//!         .is_less_than_or_equal_to(10_000)?;
//!     requires(note, "note").is_not_null()?.is_not_white_space()?;
//!     Ok(())
//! }
//!
//! assert!(withdraw(50, Some("rent")).is_ok());
//!
//! let err = withdraw(0, Some("rent")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.to_string(), "amount (0) should be greater than 0.");
//!
//! let err = withdraw(50, None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NullArgument);
//! assert_eq!(err.to_string(), "note should not be null.");
//! ```
//!
//! ## Chains
//!
//! [`requires`](fn@requires) wraps a value and its name in a [`Guard`]. Every check
//! consumes the guard and returns it unchanged on success, so checks compose
//! with `?` and stop at the first failure. [`requires!`] does the same and can
//! name the guard after the guarded expression itself.
//!
//! ## Absence
//!
//! `Option<T>` is the "nullable" form of a value. Plain values are always
//! present. Which checks let an absent value through:
//!
//! - **Fails**: `is_not_null`, `is_equal_to`, the `is_greater_than` /
//!   `is_less_than` family, `starts_with` / `ends_with` / `contains`
//! - **Passes**: `is_not_empty`, `is_not_white_space`, `is_not_equal_to`,
//!   the `is_null_or_*` family
//!
//! ## Built-in Checks
//!
//! - **Presence**: [`is_not_null`](Guard::is_not_null),
//!   [`is_not_empty`](Guard::is_not_empty),
//!   [`is_not_white_space`](Guard::is_not_white_space),
//!   [`is_not_null_or_empty`](Guard::is_not_null_or_empty),
//!   [`is_not_null_or_empty_or_white_space`](Guard::is_not_null_or_empty_or_white_space)
//! - **Equality**: [`is_equal_to`](Guard::is_equal_to),
//!   [`is_not_equal_to`](Guard::is_not_equal_to)
//! - **Ordering**: [`is_greater_than`](Guard::is_greater_than),
//!   [`is_less_than`](Guard::is_less_than), their `_or_equal_to` forms and
//!   the `is_null_or_*` variants, each with a `_by` form taking a [`Comparer`]
//! - **Text**: [`starts_with`](Guard::starts_with),
//!   [`ends_with`](Guard::ends_with), [`contains`](Guard::contains), each with
//!   a `_using` form taking a [`StringComparison`]
//!
//! ## Features
//!
//! - `capture-expression` (default): one-argument [`requires!`]
//! - `serde`: `Serialize` for [`GuardError`] and [`ErrorKind`]
//!
//! ## Logging
//!
//! Every rejection emits a `tracing` event at `DEBUG` level under the
//! `precept_guard` target, with the argument name, kind and code as fields.
//! Passing checks log nothing.

// GuardError carries its message and params inline; it is returned from every
// check, and boxing it would cost an allocation per failure for no gain.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod foundation;
mod macros;
pub mod prelude;

pub use checks::{Relation, StringComparison, WhenAbsent};
pub use foundation::{
    Comparer, Equality, ErrorKind, ErrorParams, Guard, GuardError, GuardResult, NaturalEquality,
    NaturalOrder, Presence, Reversed, requires,
};
