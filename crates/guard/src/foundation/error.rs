//! Error types for rejected arguments
//!
//! Every failed check produces exactly one [`GuardError`]. The error carries a
//! classification ([`ErrorKind`]) callers can branch on, a stable rule code,
//! the argument name, and a fixed-format English message.
//!
//! Messages follow one of two shapes:
//!
//! - `{name} should <predicate>.` for presence, equality and string checks
//! - `{name} ({value}) should <predicate>.` for ordering checks, where
//!   `{value}` is the literal `null` when the argument is absent

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a rejected argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The value is absent where presence was required.
    NullArgument,
    /// The value is present but structurally wrong: empty or white-space
    /// string, failed (in)equality, failed string match.
    InvalidArgument,
    /// The value is present but outside the required bound, or absent where
    /// an ordering constraint applies.
    OutOfRange,
}

impl ErrorKind {
    /// Stable snake_case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullArgument => "null_argument",
            Self::InvalidArgument => "invalid_argument",
            Self::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// Ordered key/value parameters attached to an error (typically 1-3).
pub type ErrorParams = SmallVec<[(&'static str, String); 3]>;

/// A rejected argument.
///
/// `Display` renders [`message`](Self::message) verbatim, so the error can be
/// surfaced as-is or matched on programmatically through
/// [`kind`](Self::kind) and [`code`](Self::code).
///
/// # Examples
///
/// ```
/// use precept_guard::{ErrorKind, requires};
///
/// let err = requires(110, "parameter").is_less_than(100).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// assert_eq!(err.code(), "less_than");
/// assert_eq!(err.param("actual"), Some("110"));
/// assert_eq!(err.to_string(), "parameter (110) should be less than 100.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct GuardError {
    kind: ErrorKind,
    code: &'static str,
    name: Cow<'static, str>,
    message: String,
    params: ErrorParams,
}

impl GuardError {
    /// Creates an error from its parts.
    ///
    /// Built-in checks compose their errors internally; this constructor is
    /// for callers writing their own checks on top of [`Guard`](crate::Guard).
    pub fn new(
        kind: ErrorKind,
        code: &'static str,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            code,
            name: name.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Machine-readable rule code, e.g. `"greater_than"` or `"not_null"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Name of the rejected argument.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All parameters in insertion order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true` when the argument was absent where presence was required.
    pub fn is_null_argument(&self) -> bool {
        self.kind == ErrorKind::NullArgument
    }

    /// `true` when the argument was present but structurally wrong.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }

    /// `true` when the argument violated an ordering bound.
    pub fn is_out_of_range(&self) -> bool {
        self.kind == ErrorKind::OutOfRange
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| ((*k).to_string(), serde_json::Value::String(v.clone())))
            .collect();

        json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "name": self.name,
            "message": self.message,
            "params": params,
        })
    }
}

// ============================================================================
// MESSAGE COMPOSITION
// ============================================================================

/// How the checked value appears in a failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shown {
    /// `{name} should ...`
    Omitted,
    /// `{name} (null) should ...`
    Null,
    /// `{name} ({value}) should ...`
    Value(String),
}

impl Shown {
    /// Renders an optional value, substituting `null` for absence.
    pub(crate) fn of<T: fmt::Display + ?Sized>(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::Value(v.to_string()),
            None => Self::Null,
        }
    }

    /// The rendering used for the `actual` parameter.
    pub(crate) fn actual(&self) -> Option<&str> {
        match self {
            Self::Omitted => None,
            Self::Null => Some("null"),
            Self::Value(v) => Some(v),
        }
    }
}

/// A pending rejection: everything needed to build the message and error.
///
/// Checks describe the failure here and the guard turns it into a
/// [`GuardError`] (logging the rejection on the way).
#[derive(Debug, Clone)]
pub(crate) struct Rejection {
    pub(crate) kind: ErrorKind,
    pub(crate) code: &'static str,
    pub(crate) shown: Shown,
    pub(crate) predicate: String,
    pub(crate) params: ErrorParams,
}

impl Rejection {
    pub(crate) fn new(
        kind: ErrorKind,
        code: &'static str,
        shown: Shown,
        predicate: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            code,
            shown,
            predicate: predicate.into(),
            params: SmallVec::new(),
        }
    }

    pub(crate) fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Composes `{name} [({value})] should {predicate}.`
    pub(crate) fn message(&self, name: &str) -> String {
        match &self.shown {
            Shown::Omitted => format!("{name} should {}.", self.predicate),
            Shown::Null => format!("{name} (null) should {}.", self.predicate),
            Shown::Value(value) => format!("{name} ({value}) should {}.", self.predicate),
        }
    }

    pub(crate) fn into_error(self, name: Cow<'static, str>) -> GuardError {
        let message = self.message(&name);
        let mut params = self.params;
        if let Some(actual) = self.shown.actual() {
            params.insert(0, ("actual", actual.to_string()));
        }
        GuardError {
            kind: self.kind,
            code: self.code,
            name,
            message,
            params,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_omits_value() {
        let rejection = Rejection::new(
            ErrorKind::NullArgument,
            "not_null",
            Shown::Omitted,
            "not be null",
        );
        assert_eq!(rejection.message("value"), "value should not be null.");
    }

    #[test]
    fn test_message_renders_null() {
        let rejection = Rejection::new(
            ErrorKind::OutOfRange,
            "greater_than",
            Shown::of::<i32>(None),
            "be greater than 0",
        );
        assert_eq!(
            rejection.message("value"),
            "value (null) should be greater than 0."
        );
    }

    #[test]
    fn test_into_error_prepends_actual() {
        let error = Rejection::new(
            ErrorKind::OutOfRange,
            "less_than",
            Shown::of(Some(&110)),
            "be less than 100",
        )
        .with_param("bound", "100")
        .into_error(Cow::Borrowed("parameter"));

        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(error.name(), "parameter");
        assert_eq!(error.message(), "parameter (110) should be less than 100.");
        assert_eq!(
            error.params(),
            &[("actual", "110".to_string()), ("bound", "100".to_string())]
        );
    }

    #[test]
    fn test_omitted_value_has_no_actual_param() {
        let error = Rejection::new(
            ErrorKind::InvalidArgument,
            "not_empty",
            Shown::Omitted,
            "not be an empty string",
        )
        .into_error(Cow::Borrowed("value"));
        assert_eq!(error.param("actual"), None);
        assert!(error.params().is_empty());
    }

    #[test]
    fn test_display_is_message() {
        let error = GuardError::new(
            ErrorKind::InvalidArgument,
            "custom",
            "port",
            "port should be free.",
        );
        assert_eq!(error.to_string(), "port should be free.");
    }

    #[test]
    fn test_kind_predicates() {
        let error = GuardError::new(ErrorKind::NullArgument, "not_null", "v", "v should not be null.");
        assert!(error.is_null_argument());
        assert!(!error.is_invalid_argument());
        assert!(!error.is_out_of_range());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::NullArgument.to_string(), "null_argument");
        assert_eq!(ErrorKind::InvalidArgument.to_string(), "invalid_argument");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out_of_range");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = GuardError::new(ErrorKind::OutOfRange, "less_than", "n", "n (5) should be less than 1.")
            .with_param("actual", "5");
        let json = error.to_json_value();
        assert_eq!(json["kind"], "out_of_range");
        assert_eq!(json["params"]["actual"], "5");
    }
}
