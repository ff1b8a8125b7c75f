//! Presence checks: null, empty, white-space
//!
//! The three primitives are orthogonal. `is_not_empty` and
//! `is_not_white_space` let an absent value through, and `is_not_white_space`
//! lets an empty string through, so each guarantee has to be asked for
//! explicitly. The two composites run the primitives in order, null first.

use crate::foundation::error::{ErrorKind, Rejection, Shown};
use crate::foundation::{Guard, GuardResult, Presence};

fn null_rule<V: Presence>(value: &V) -> Option<Rejection> {
    value.is_absent().then(|| {
        Rejection::new(
            ErrorKind::NullArgument,
            "not_null",
            Shown::Omitted,
            "not be null",
        )
    })
}

fn empty_rule(value: Option<&str>) -> Option<Rejection> {
    value.is_some_and(str::is_empty).then(|| {
        Rejection::new(
            ErrorKind::InvalidArgument,
            "not_empty",
            Shown::Omitted,
            "not be an empty string",
        )
    })
}

/// `true` for a non-empty string made only of white-space characters.
fn is_blank(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_whitespace)
}

fn white_space_rule(value: Option<&str>) -> Option<Rejection> {
    value.is_some_and(is_blank).then(|| {
        Rejection::new(
            ErrorKind::InvalidArgument,
            "not_white_space",
            Shown::Omitted,
            "not consist only of white-space characters",
        )
    })
}

impl<V: Presence> Guard<V> {
    /// Fails with [`ErrorKind::NullArgument`] when the value is absent.
    ///
    /// Only absence counts: `Some(0)`, `Some(false)` and `Some(vec![])` pass,
    /// and plain (non-optional) values always pass.
    ///
    /// ```
    /// use precept_guard::{ErrorKind, requires};
    ///
    /// assert!(requires(Some(0), "count").is_not_null().is_ok());
    ///
    /// let err = requires(None::<&str>, "value").is_not_null().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NullArgument);
    /// assert_eq!(err.to_string(), "value should not be null.");
    /// ```
    pub fn is_not_null(self) -> GuardResult<V> {
        let rejection = null_rule(self.value());
        self.settle(rejection)
    }
}

impl<V> Guard<V>
where
    V: Presence,
    V::Value: AsRef<str>,
{
    fn text(&self) -> Option<&str> {
        self.value().present().map(AsRef::as_ref)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the string is empty.
    ///
    /// An absent string passes.
    pub fn is_not_empty(self) -> GuardResult<V> {
        let rejection = empty_rule(self.text());
        self.settle(rejection)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the string is non-empty
    /// and consists only of white-space characters.
    ///
    /// An absent or empty string passes.
    pub fn is_not_white_space(self) -> GuardResult<V> {
        let rejection = white_space_rule(self.text());
        self.settle(rejection)
    }

    /// [`is_not_null`](Self::is_not_null) then [`is_not_empty`](Self::is_not_empty).
    ///
    /// ```
    /// use precept_guard::requires;
    ///
    /// let err = requires("", "value").is_not_null_or_empty().unwrap_err();
    /// assert_eq!(err.to_string(), "value should not be an empty string.");
    /// ```
    pub fn is_not_null_or_empty(self) -> GuardResult<V> {
        self.is_not_null()?.is_not_empty()
    }

    /// [`is_not_null`](Self::is_not_null), [`is_not_empty`](Self::is_not_empty),
    /// then [`is_not_white_space`](Self::is_not_white_space).
    pub fn is_not_null_or_empty_or_white_space(self) -> GuardResult<V> {
        self.is_not_null()?.is_not_empty()?.is_not_white_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requires;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(" \t\r\n"));
        assert!(is_blank("\u{2003}\u{00A0}"));
        assert!(!is_blank(""));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_null_checked_before_empty() {
        let err = requires(None::<String>, "v").is_not_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
    }

    #[test]
    fn test_empty_checked_before_white_space() {
        let err = requires(Some(""), "v")
            .is_not_null_or_empty_or_white_space()
            .unwrap_err();
        assert_eq!(err.code(), "not_empty");
    }

    #[test]
    fn test_white_space_composite() {
        let err = requires(String::from("  "), "v")
            .is_not_null_or_empty_or_white_space()
            .unwrap_err();
        assert_eq!(err.code(), "not_white_space");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
