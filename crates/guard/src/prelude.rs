//! Prelude module for convenient imports.
//!
//! ```
//! use precept_guard::prelude::*;
//!
//! fn rename(name: &str) -> Result<(), GuardError> {
//!     requires(name, "name")
//!         .is_not_null_or_empty_or_white_space()?
//!         .starts_with_using("user_", StringComparison::Ordinal)?;
//!     Ok(())
//! }
//!
//! assert!(rename("user_ada").is_ok());
//! assert!(rename("   ").unwrap_err().is_invalid_argument());
//! ```

// ============================================================================
// FOUNDATION: Guard, errors, adapters
// ============================================================================

pub use crate::foundation::{
    Comparer, Equality, ErrorKind, Guard, GuardError, GuardResult, NaturalEquality, NaturalOrder,
    Presence, Reversed, requires,
};

// ============================================================================
// CHECKS: Modes and relations
// ============================================================================

pub use crate::checks::{Relation, StringComparison, WhenAbsent};
