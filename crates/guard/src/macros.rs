//! Macros for starting guard chains.
//!
//! - [`requires!`]: [`requires`](fn@crate::requires) with an optional name; the
//!   one-argument form names the guard after the expression's source text
//! - [`impl_presence!`](crate::impl_presence): lives next to the
//!   [`Presence`](crate::Presence) trait it implements

// ============================================================================
// REQUIRES MACRO
// ============================================================================

/// Starts a validation chain, optionally naming it after the guarded expression.
///
/// With two arguments it is exactly [`requires`](fn@crate::requires). With one
/// argument the guard is named after the source text of the expression, so
/// messages read back the code that produced the value:
///
/// ```
/// use precept_guard::requires;
///
/// let parameter = 110;
/// let err = requires!(parameter).is_less_than(100).unwrap_err();
/// assert_eq!(err.to_string(), "parameter (110) should be less than 100.");
///
/// let err = requires!(50 + 60).is_less_than(100).unwrap_err();
/// assert_eq!(err.to_string(), "50 + 60 (110) should be less than 100.");
///
/// // An explicit name always wins.
/// let err = requires!(parameter, "ManuallySpecifiedName")
///     .is_less_than(100)
///     .unwrap_err();
/// assert_eq!(err.name(), "ManuallySpecifiedName");
/// ```
///
/// The captured text is whatever `stringify!` produces for the whole
/// expression, including method calls and field accesses.
///
/// The one-argument form requires the `capture-expression` feature (on by
/// default).
#[macro_export]
macro_rules! requires {
    ($value:expr, $name:expr $(,)?) => {
        $crate::requires($value, $name)
    };
    ($value:expr $(,)?) => {
        $crate::__requires_captured!($value)
    };
}

#[cfg(feature = "capture-expression")]
#[doc(hidden)]
#[macro_export]
macro_rules! __requires_captured {
    ($value:expr) => {
        $crate::requires($value, ::core::stringify!($value))
    };
}

#[cfg(not(feature = "capture-expression"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __requires_captured {
    ($value:expr) => {
        ::core::compile_error!(
            "requires!(value) needs the `capture-expression` feature; name the argument with requires!(value, \"name\")"
        )
    };
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "capture-expression")]
    #[test]
    fn test_captures_expression_text() {
        let limit = 3_u32;
        assert_eq!(requires!(limit).name(), "limit");
        assert_eq!(requires!(limit * 2).name(), "limit * 2");
    }

    #[test]
    fn test_explicit_name() {
        assert_eq!(requires!(1_u8, "one").name(), "one");
        assert_eq!(requires!(1_u8, String::from("dynamic"),).name(), "dynamic");
    }
}
