//! Equality checks

use std::fmt::Display;

use crate::foundation::error::{ErrorKind, Rejection, Shown};
use crate::foundation::{Equality, Guard, GuardResult, NaturalEquality, Presence};

fn equality_rule<E: Display + ?Sized>(equal: bool, want_equal: bool, expected: &E) -> Option<Rejection> {
    if equal == want_equal {
        return None;
    }
    let (code, predicate) = if want_equal {
        ("equal_to", format!("be equal to '{expected}'"))
    } else {
        ("not_equal_to", format!("not be equal to '{expected}'"))
    };
    Some(
        Rejection::new(ErrorKind::InvalidArgument, code, Shown::Omitted, predicate)
            .with_param("expected", expected.to_string()),
    )
}

impl<V: Presence> Guard<V> {
    /// Fails with [`ErrorKind::InvalidArgument`] unless the value equals `expected`.
    ///
    /// An absent value never equals anything under the natural equality.
    ///
    /// ```
    /// use precept_guard::requires;
    ///
    /// assert!(requires(String::from("GET"), "method").is_equal_to("GET").is_ok());
    ///
    /// let err = requires(None::<&str>, "v").is_equal_to("z").unwrap_err();
    /// assert_eq!(err.to_string(), "v should be equal to 'z'.");
    /// ```
    pub fn is_equal_to<E>(self, expected: E) -> GuardResult<V>
    where
        V::Value: PartialEq<E>,
        E: Display,
    {
        self.is_equal_to_by(expected, NaturalEquality)
    }

    /// [`is_equal_to`](Self::is_equal_to) with a custom equality, which also
    /// decides how an absent value compares.
    pub fn is_equal_to_by<E, Q>(self, expected: E, equality: Q) -> GuardResult<V>
    where
        E: Display,
        Q: Equality<V::Value, E>,
    {
        let equal = equality.equals(self.value().present(), &expected);
        let rejection = equality_rule(equal, true, &expected);
        self.settle(rejection)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the value equals `expected`.
    ///
    /// An absent value passes under the natural equality.
    pub fn is_not_equal_to<E>(self, expected: E) -> GuardResult<V>
    where
        V::Value: PartialEq<E>,
        E: Display,
    {
        self.is_not_equal_to_by(expected, NaturalEquality)
    }

    /// [`is_not_equal_to`](Self::is_not_equal_to) with a custom equality.
    pub fn is_not_equal_to_by<E, Q>(self, expected: E, equality: Q) -> GuardResult<V>
    where
        E: Display,
        Q: Equality<V::Value, E>,
    {
        let equal = equality.equals(self.value().present(), &expected);
        let rejection = equality_rule(equal, false, &expected);
        self.settle(rejection)
    }
}
