//! Ordering and range checks
//!
//! Each relation comes in two flavors:
//!
//! - `is_<relation>`: an absent value always fails (absence never satisfies
//!   an order constraint).
//! - `is_null_or_<relation>`: an absent value always passes.
//!
//! A present value is compared with the bound through a [`Comparer`]; the
//! `_by` variants take one explicitly, the others use [`NaturalOrder`].
//! All failures are [`ErrorKind::OutOfRange`].

use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::error::{ErrorKind, Rejection, Shown};
use crate::foundation::{Comparer, Guard, GuardResult, NaturalOrder, Presence};

/// The four order relations a value can be required to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `value > bound`
    GreaterThan,
    /// `value >= bound`
    GreaterThanOrEqualTo,
    /// `value < bound`
    LessThan,
    /// `value <= bound`
    LessThanOrEqualTo,
}

impl Relation {
    /// Whether `value.cmp(bound) == ordering` satisfies the relation.
    #[must_use]
    pub const fn admits(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterThan => ordering.is_gt(),
            Self::GreaterThanOrEqualTo => ordering.is_ge(),
            Self::LessThan => ordering.is_lt(),
            Self::LessThanOrEqualTo => ordering.is_le(),
        }
    }

    /// English phrase used in messages, e.g. `"greater than or equal to"`.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
            Self::LessThan => "less than",
            Self::LessThanOrEqualTo => "less than or equal to",
        }
    }

    const fn code(self, absent: WhenAbsent) -> &'static str {
        match (self, absent) {
            (Self::GreaterThan, WhenAbsent::Reject) => "greater_than",
            (Self::GreaterThanOrEqualTo, WhenAbsent::Reject) => "greater_than_or_equal_to",
            (Self::LessThan, WhenAbsent::Reject) => "less_than",
            (Self::LessThanOrEqualTo, WhenAbsent::Reject) => "less_than_or_equal_to",
            (Self::GreaterThan, WhenAbsent::Accept) => "null_or_greater_than",
            (Self::GreaterThanOrEqualTo, WhenAbsent::Accept) => "null_or_greater_than_or_equal_to",
            (Self::LessThan, WhenAbsent::Accept) => "null_or_less_than",
            (Self::LessThanOrEqualTo, WhenAbsent::Accept) => "null_or_less_than_or_equal_to",
        }
    }
}

/// What an ordering check does with an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WhenAbsent {
    /// Fail: the `is_<relation>` checks.
    #[default]
    Reject,
    /// Pass: the `is_null_or_<relation>` checks.
    Accept,
}

/// The shared rule behind every ordering check.
fn order_rule<T, C>(
    value: Option<&T>,
    bound: &T,
    comparer: &C,
    relation: Relation,
    absent: WhenAbsent,
) -> Option<Rejection>
where
    T: Display,
    C: Comparer<T>,
{
    let satisfied = match value {
        None => absent == WhenAbsent::Accept,
        Some(value) => comparer
            .compare(value, bound)
            .is_some_and(|ordering| relation.admits(ordering)),
    };
    if satisfied {
        return None;
    }

    let predicate = if absent == WhenAbsent::Accept {
        format!("either be null, or be {} {bound}", relation.phrase())
    } else {
        format!("be {} {bound}", relation.phrase())
    };
    Some(
        Rejection::new(
            ErrorKind::OutOfRange,
            relation.code(absent),
            Shown::of(value),
            predicate,
        )
        .with_param("bound", bound.to_string()),
    )
}

impl<V> Guard<V>
where
    V: Presence,
    V::Value: Display,
{
    /// Checks the value against `bound` with an explicit relation and comparer.
    ///
    /// All named ordering checks delegate here. [`WhenAbsent::Accept`] gives
    /// the `is_null_or_*` behavior.
    ///
    /// ```
    /// use precept_guard::{NaturalOrder, Relation, WhenAbsent, requires};
    ///
    /// let guard = requires(None::<u8>, "n");
    /// assert!(guard
    ///     .satisfies_by(Relation::LessThan, 5, NaturalOrder, WhenAbsent::Accept)
    ///     .is_ok());
    /// ```
    pub fn satisfies_by<C>(
        self,
        relation: Relation,
        bound: V::Value,
        comparer: C,
        absent: WhenAbsent,
    ) -> GuardResult<V>
    where
        C: Comparer<V::Value>,
    {
        let rejection = order_rule(
            self.value().present(),
            &bound,
            &comparer,
            relation,
            absent,
        );
        self.settle(rejection)
    }
}

macro_rules! ordering_checks {
    ($(
        $(#[$meta:meta])*
        $name:ident, $name_by:ident => $relation:ident, when_absent: $absent:ident;
    )+) => {
        impl<V> Guard<V>
        where
            V: Presence,
            V::Value: Display,
        {
            $(
                $(#[$meta])*
                pub fn $name(self, bound: V::Value) -> GuardResult<V>
                where
                    V::Value: PartialOrd,
                {
                    self.satisfies_by(Relation::$relation, bound, NaturalOrder, WhenAbsent::$absent)
                }

                #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with a custom comparer.")]
                pub fn $name_by<C>(self, bound: V::Value, comparer: C) -> GuardResult<V>
                where
                    C: Comparer<V::Value>,
                {
                    self.satisfies_by(Relation::$relation, bound, comparer, WhenAbsent::$absent)
                }
            )+
        }
    };
}

ordering_checks! {
    /// Fails when the value is absent or not strictly greater than `bound`.
    ///
    /// ```
    /// use precept_guard::requires;
    ///
    /// assert!(requires(2, "n").is_greater_than(1).is_ok());
    /// assert!(requires(1, "n").is_greater_than(1).is_err());
    /// ```
    is_greater_than, is_greater_than_by => GreaterThan, when_absent: Reject;

    /// Fails when the value is absent or less than `bound`.
    is_greater_than_or_equal_to, is_greater_than_or_equal_to_by => GreaterThanOrEqualTo, when_absent: Reject;

    /// Fails when the value is absent or not strictly less than `bound`.
    ///
    /// ```
    /// use precept_guard::requires;
    ///
    /// let err = requires(110, "parameter").is_less_than(100).unwrap_err();
    /// assert_eq!(err.to_string(), "parameter (110) should be less than 100.");
    /// ```
    is_less_than, is_less_than_by => LessThan, when_absent: Reject;

    /// Fails when the value is absent or greater than `bound`.
    is_less_than_or_equal_to, is_less_than_or_equal_to_by => LessThanOrEqualTo, when_absent: Reject;

    /// Passes when the value is absent; otherwise like [`is_greater_than`](Self::is_greater_than).
    ///
    /// ```
    /// use precept_guard::requires;
    ///
    /// assert!(requires(None::<i32>, "n").is_null_or_greater_than(0).is_ok());
    /// assert!(requires(None::<i32>, "n").is_greater_than(0).is_err());
    /// ```
    is_null_or_greater_than, is_null_or_greater_than_by => GreaterThan, when_absent: Accept;

    /// Passes when the value is absent; otherwise like
    /// [`is_greater_than_or_equal_to`](Self::is_greater_than_or_equal_to).
    is_null_or_greater_than_or_equal_to, is_null_or_greater_than_or_equal_to_by => GreaterThanOrEqualTo, when_absent: Accept;

    /// Passes when the value is absent; otherwise like [`is_less_than`](Self::is_less_than).
    is_null_or_less_than, is_null_or_less_than_by => LessThan, when_absent: Accept;

    /// Passes when the value is absent; otherwise like
    /// [`is_less_than_or_equal_to`](Self::is_less_than_or_equal_to).
    is_null_or_less_than_or_equal_to, is_null_or_less_than_or_equal_to_by => LessThanOrEqualTo, when_absent: Accept;
}

// ============================================================================
// TESTS
// ============================================================================
