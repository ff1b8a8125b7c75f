//! Comparator and equality capabilities
//!
//! Ordering checks are parameterized over a [`Comparer`], equality checks over
//! an [`Equality`]. The defaults ([`NaturalOrder`], [`NaturalEquality`]) use the
//! type's own `PartialOrd` / `PartialEq`; any closure with the right shape can
//! be passed instead.

use std::cmp::Ordering;

// ============================================================================
// ORDERING
// ============================================================================

/// A three-way comparison between two values of the same type.
///
/// Returning `None` means the pair is incomparable (for example a `NaN`);
/// an incomparable pair never satisfies an ordering constraint.
pub trait Comparer<T> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Option<Ordering>;
}

/// The type's natural order (`PartialOrd`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: PartialOrd> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

/// Inverts another comparer.
///
/// ```
/// use precept_guard::{requires, NaturalOrder, Reversed};
///
/// // 3 comes "after" 5 in descending order.
/// assert!(requires(3, "rank").is_greater_than_by(5, Reversed(NaturalOrder)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparer<T>> Comparer<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        self.0.compare(left, right).map(Ordering::reverse)
    }
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        Some(self(left, right))
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Decides whether a (possibly absent) value equals an expected value.
///
/// The absent case is handed to the implementation, which defines its own
/// null handling.
pub trait Equality<T, E: ?Sized> {
    /// `true` when `actual` counts as equal to `expected`.
    fn equals(&self, actual: Option<&T>, expected: &E) -> bool;
}

/// The type's natural equality (`PartialEq`). Absent never equals anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl<T, E> Equality<T, E> for NaturalEquality
where
    T: PartialEq<E>,
    E: ?Sized,
{
    #[inline]
    fn equals(&self, actual: Option<&T>, expected: &E) -> bool {
        actual.is_some_and(|actual| actual == expected)
    }
}

impl<T, E, F> Equality<T, E> for F
where
    E: ?Sized,
    F: Fn(Option<&T>, &E) -> bool,
{
    #[inline]
    fn equals(&self, actual: Option<&T>, expected: &E) -> bool {
        self(actual, expected)
    }
}
