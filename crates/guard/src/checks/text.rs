//! String-matching checks: prefix, suffix, substring
//!
//! Matching honors a [`StringComparison`] mode. The default, `Linguistic`,
//! is case-sensitive and never splits a user-perceived character: `"e\u{301}"`
//! (e + combining acute) does not start with `"e"`. Both sides are brought to
//! NFC first, so precomposed and decomposed spellings of the same text match.
//! No locale data is consulted, so results are identical on every machine.

use std::borrow::Cow;
use std::fmt;

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};
use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::error::{ErrorKind, Rejection, Shown};
use crate::foundation::{Guard, GuardResult, Presence};

/// How two strings are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StringComparison {
    /// Case-sensitive, aligned to extended grapheme cluster boundaries.
    #[default]
    Linguistic,
    /// Grapheme-aligned, each cluster compared after lowercase folding.
    LinguisticIgnoreCase,
    /// Exact `char` sequence.
    Ordinal,
    /// `char` sequence after lowercase folding.
    OrdinalIgnoreCase,
}

impl StringComparison {
    /// Stable snake_case name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linguistic => "linguistic",
            Self::LinguisticIgnoreCase => "linguistic_ignore_case",
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal_ignore_case",
        }
    }

    const fn ignores_case(self) -> bool {
        matches!(self, Self::LinguisticIgnoreCase | Self::OrdinalIgnoreCase)
    }

    /// `true` when `haystack` begins with `needle`.
    #[must_use]
    pub fn starts_with(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Ordinal => haystack.starts_with(needle),
            Self::OrdinalIgnoreCase => fold(haystack).starts_with(&*fold(needle)),
            Self::Linguistic | Self::LinguisticIgnoreCase => {
                let (hay, needle) = (nfc(haystack), nfc(needle));
                self.clusters(&hay).starts_with(&self.clusters(&needle))
            }
        }
    }

    /// `true` when `haystack` ends with `needle`.
    #[must_use]
    pub fn ends_with(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Ordinal => haystack.ends_with(needle),
            Self::OrdinalIgnoreCase => fold(haystack).ends_with(&*fold(needle)),
            Self::Linguistic | Self::LinguisticIgnoreCase => {
                let (hay, needle) = (nfc(haystack), nfc(needle));
                self.clusters(&hay).ends_with(&self.clusters(&needle))
            }
        }
    }

    /// `true` when `needle` occurs anywhere in `haystack`.
    #[must_use]
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Ordinal => haystack.contains(needle),
            Self::OrdinalIgnoreCase => fold(haystack).contains(&*fold(needle)),
            Self::Linguistic | Self::LinguisticIgnoreCase => {
                let (hay, needle) = (nfc(haystack), nfc(needle));
                let (hay, needle) = (self.clusters(&hay), self.clusters(&needle));
                needle.is_empty() || hay.windows(needle.len()).any(|window| window == needle)
            }
        }
    }

    fn clusters(self, text: &str) -> Vec<Cow<'_, str>> {
        text.graphemes(true)
            .map(|cluster| {
                if self.ignores_case() {
                    fold(cluster)
                } else {
                    Cow::Borrowed(cluster)
                }
            })
            .collect()
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical composition (NFC), so `"e\u{301}"` and `"\u{e9}"` compare equal.
fn nfc(text: &str) -> Cow<'_, str> {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Lowercase folding, one `char` at a time with no context: a word-final
/// `Σ` folds to `σ` (never `ς`) and titlecase `ǅ` folds to `ǆ`.
fn fold(text: &str) -> Cow<'_, str> {
    if text.chars().all(folds_to_itself) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().flat_map(char::to_lowercase).collect())
    }
}

fn folds_to_itself(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

/// Which string relation a check requires.
#[derive(Debug, Clone, Copy)]
enum Affix {
    Prefix,
    Suffix,
    Anywhere,
}

impl Affix {
    fn matches(self, mode: StringComparison, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Prefix => mode.starts_with(haystack, needle),
            Self::Suffix => mode.ends_with(haystack, needle),
            Self::Anywhere => mode.contains(haystack, needle),
        }
    }

    const fn code(self) -> &'static str {
        match self {
            Self::Prefix => "starts_with",
            Self::Suffix => "ends_with",
            Self::Anywhere => "contains",
        }
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Prefix => "start with",
            Self::Suffix => "end with",
            Self::Anywhere => "contain",
        }
    }
}

fn affix_rule(
    value: Option<&str>,
    needle: &str,
    mode: StringComparison,
    affix: Affix,
) -> Option<Rejection> {
    if value.is_some_and(|haystack| affix.matches(mode, haystack, needle)) {
        return None;
    }
    Some(
        Rejection::new(
            ErrorKind::InvalidArgument,
            affix.code(),
            Shown::Omitted,
            format!("{} '{needle}'", affix.verb()),
        )
        .with_param("substring", needle)
        .with_param("comparison", mode.as_str()),
    )
}

impl<V> Guard<V>
where
    V: Presence,
    V::Value: AsRef<str>,
{
    fn match_affix(self, needle: &str, mode: StringComparison, affix: Affix) -> GuardResult<V> {
        let value = self.value().present().map(AsRef::as_ref);
        let rejection = affix_rule(value, needle, mode, affix);
        self.settle(rejection)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the value is absent or
    /// does not start with `prefix` (default [`StringComparison`]).
    ///
    /// ```
    /// use precept_guard::{requires, StringComparison};
    ///
    /// assert!(requires("Example", "v").starts_with("EXAMPLE").is_err());
    /// assert!(requires("Example", "v")
    ///     .starts_with_using("EXAMPLE", StringComparison::OrdinalIgnoreCase)
    ///     .is_ok());
    /// ```
    pub fn starts_with(self, prefix: &str) -> GuardResult<V> {
        self.starts_with_using(prefix, StringComparison::default())
    }

    /// [`starts_with`](Self::starts_with) under an explicit comparison mode.
    pub fn starts_with_using(self, prefix: &str, mode: StringComparison) -> GuardResult<V> {
        self.match_affix(prefix, mode, Affix::Prefix)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the value is absent or
    /// does not end with `suffix` (default [`StringComparison`]).
    pub fn ends_with(self, suffix: &str) -> GuardResult<V> {
        self.ends_with_using(suffix, StringComparison::default())
    }

    /// [`ends_with`](Self::ends_with) under an explicit comparison mode.
    pub fn ends_with_using(self, suffix: &str, mode: StringComparison) -> GuardResult<V> {
        self.match_affix(suffix, mode, Affix::Suffix)
    }

    /// Fails with [`ErrorKind::InvalidArgument`] when the value is absent or
    /// does not contain `substring` (default [`StringComparison`]).
    pub fn contains(self, substring: &str) -> GuardResult<V> {
        self.contains_using(substring, StringComparison::default())
    }

    /// [`contains`](Self::contains) under an explicit comparison mode.
    pub fn contains_using(self, substring: &str, mode: StringComparison) -> GuardResult<V> {
        self.match_affix(substring, mode, Affix::Anywhere)
    }
}
