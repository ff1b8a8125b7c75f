//! The guard: an immutable (name, value) pair threaded through a chain of checks

use std::borrow::Cow;

use crate::foundation::error::{GuardError, Rejection};

/// Result of a single check: the same guard on success, the rejection otherwise.
pub type GuardResult<V> = Result<Guard<V>, GuardError>;

/// Carries an argument value and its name through a chain of checks.
///
/// A guard is never modified. Every check consumes it and hands the very same
/// guard back on success, so each check in a chain observes the original
/// value. Chains are written with `?`:
///
/// ```
/// use precept_guard::requires;
///
/// fn set_port(port: u16) -> Result<u16, precept_guard::GuardError> {
///     let port = requires(port, "port")
///         .is_greater_than(0)?
///         .is_less_than(49152)?
///         .into_value();
///     Ok(port)
/// }
///
/// assert_eq!(set_port(8080).unwrap(), 8080);
/// assert_eq!(
///     set_port(0).unwrap_err().to_string(),
///     "port (0) should be greater than 0."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard<V> {
    name: Cow<'static, str>,
    value: V,
}

impl<V> Guard<V> {
    /// Creates a guard. Prefer [`requires`] or [`requires!`](crate::requires!).
    pub fn new(name: impl Into<Cow<'static, str>>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The argument name (or captured expression text).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The guarded value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Ends the chain and returns the guarded value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Ends the chain and returns both halves.
    pub fn into_parts(self) -> (Cow<'static, str>, V) {
        (self.name, self.value)
    }

    /// Passes the guard through when `rejection` is `None`, fails otherwise.
    pub(crate) fn settle(self, rejection: Option<Rejection>) -> GuardResult<V> {
        match rejection {
            None => Ok(self),
            Some(rejection) => Err(self.reject(rejection)),
        }
    }

    fn reject(self, rejection: Rejection) -> GuardError {
        tracing::debug!(
            target: "precept_guard",
            argument = %self.name,
            kind = %rejection.kind,
            code = rejection.code,
            "argument rejected"
        );
        rejection.into_error(self.name)
    }
}

/// Starts a validation chain for `value`, named `name` in error messages.
///
/// Never fails. The name is not validated; any text, including an empty
/// string or a synthesized expression, is accepted.
///
/// ```
/// use precept_guard::requires;
///
/// assert!(requires(5, "value").is_greater_than(1).and_then(|g| g.is_less_than(10)).is_ok());
/// ```
pub fn requires<V>(value: V, name: impl Into<Cow<'static, str>>) -> Guard<V> {
    Guard::new(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_keeps_name_and_value() {
        let guard = requires(42, "answer");
        assert_eq!(guard.name(), "answer");
        assert_eq!(*guard.value(), 42);
    }

    #[test]
    fn test_name_is_not_validated() {
        assert_eq!(requires(1, "").name(), "");
        assert_eq!(requires(1, String::from("a.b[0]")).name(), "a.b[0]");
    }

    #[test]
    fn test_into_parts() {
        let (name, value) = requires("v", "arg").into_parts();
        assert_eq!(name, "arg");
        assert_eq!(value, "v");
    }

    #[test]
    fn test_settle_passes_same_guard_through() {
        let guard = requires(vec![1, 2, 3], "items");
        let before = guard.clone();
        let after = guard.settle(None).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", requires(7, "n")),
            r#"Guard { name: "n", value: 7 }"#
        );
    }
}
