//! The `Presence` adapter: one rule set for plain and optional values
//!
//! Checks never look at a guarded value directly. They ask it for its
//! [`Presence::present`] view, which is `None` when the value is absent and
//! `Some(&inner)` otherwise. Plain values are always present; `Option<T>`
//! is present when it is `Some`.
//!
//! This is what lets `requires(5, "n").is_greater_than(1)` and
//! `requires(Some(5), "n").is_greater_than(1)` share the same rule.

use std::borrow::Cow;

/// A value that may or may not be present.
///
/// Implement it for your own plain types with [`impl_presence!`](crate::impl_presence).
pub trait Presence {
    /// The type seen by checks once the value is known to be present.
    type Value;

    /// Returns the inner value, or `None` when absent.
    fn present(&self) -> Option<&Self::Value>;

    /// `true` when the value is absent.
    #[inline]
    fn is_absent(&self) -> bool {
        self.present().is_none()
    }
}

// ============================================================================
// OPTIONAL WRAPPERS
// ============================================================================

impl<T> Presence for Option<T> {
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T> Presence for &Option<T> {
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

// ============================================================================
// PLAIN VALUES
// ============================================================================

/// Implements [`Presence`] for plain types that are always present.
///
/// ```
/// use precept_guard::{impl_presence, requires};
///
/// #[derive(Debug, PartialEq, PartialOrd)]
/// struct Celsius(f64);
///
/// impl std::fmt::Display for Celsius {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// impl_presence!(Celsius);
///
/// let err = requires(Celsius(-300.0), "t")
///     .is_greater_than_or_equal_to(Celsius(-273.15))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "t (-300°C) should be greater than or equal to -273.15°C.");
/// ```
#[macro_export]
macro_rules! impl_presence {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::Presence for $ty {
                type Value = $ty;

                #[inline]
                fn present(&self) -> ::core::option::Option<&$ty> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

impl_presence!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    Box<str>,
);

impl<'a> Presence for &'a str {
    type Value = &'a str;

    #[inline]
    fn present(&self) -> Option<&&'a str> {
        Some(self)
    }
}

impl<'a> Presence for &'a String {
    type Value = &'a String;

    #[inline]
    fn present(&self) -> Option<&&'a String> {
        Some(self)
    }
}

impl<'a> Presence for Cow<'a, str> {
    type Value = Cow<'a, str>;

    #[inline]
    fn present(&self) -> Option<&Cow<'a, str>> {
        Some(self)
    }
}

impl<T> Presence for Vec<T> {
    type Value = Vec<T>;

    #[inline]
    fn present(&self) -> Option<&Vec<T>> {
        Some(self)
    }
}

impl<'a, T> Presence for &'a [T] {
    type Value = &'a [T];

    #[inline]
    fn present(&self) -> Option<&&'a [T]> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_presence() {
        assert_eq!(Some(3).present(), Some(&3));
        assert!(None::<i32>.is_absent());
    }

    #[test]
    fn test_borrowed_option_presence() {
        let value = Some("x".to_string());
        assert_eq!((&value).present().map(String::as_str), Some("x"));
        let missing: Option<String> = None;
        assert!((&missing).is_absent());
    }

    #[test]
    fn test_plain_values_are_present() {
        assert_eq!(0_i32.present(), Some(&0));
        assert_eq!(false.present(), Some(&false));
        assert_eq!("".present(), Some(&""));
        assert!(!Vec::<u8>::new().is_absent());
    }
}
