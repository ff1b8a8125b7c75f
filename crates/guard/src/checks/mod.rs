//! Built-in checks
//!
//! Checks are inherent methods on [`Guard`](crate::Guard), grouped by family:
//!
//! - **Presence**: `is_not_null`, `is_not_empty`, `is_not_white_space` and
//!   their composites
//! - **Equality**: `is_equal_to`, `is_not_equal_to`
//! - **Ordering**: `is_greater_than`, `is_less_than`, ... and the
//!   `is_null_or_*` variants
//! - **Text**: `starts_with`, `ends_with`, `contains`

pub mod equality;
pub mod ordering;
pub mod presence;
pub mod text;

pub use ordering::{Relation, WhenAbsent};
pub use text::StringComparison;
