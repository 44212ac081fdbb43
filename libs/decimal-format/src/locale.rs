//! # Locales
//!
//! Language/country identifiers and the small built-in table of number
//! conventions the formatter knows about. Lookup never consults the host
//! system; unknown locales fall back from country to language to root.
//!
//! ## Example
//!
//! ```rust
//! use decimal_format::Locale;
//!
//! let locale = Locale::from_tag("de_DE");
//! assert_eq!(locale, Locale::GERMANY);
//! assert_eq!(locale.to_string(), "de-DE");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A language with an optional country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: Cow<'static, str>,
    country: Cow<'static, str>,
}

impl Locale {
    /// Language-neutral conventions.
    pub const ROOT: Locale = Locale::borrowed("", "");
    /// English.
    pub const ENGLISH: Locale = Locale::borrowed("en", "");
    /// English, United States.
    pub const US: Locale = Locale::borrowed("en", "US");
    /// English, United Kingdom.
    pub const UK: Locale = Locale::borrowed("en", "GB");
    /// German.
    pub const GERMAN: Locale = Locale::borrowed("de", "");
    /// German, Germany.
    pub const GERMANY: Locale = Locale::borrowed("de", "DE");
    /// French.
    pub const FRENCH: Locale = Locale::borrowed("fr", "");
    /// French, France.
    pub const FRANCE: Locale = Locale::borrowed("fr", "FR");

    const fn borrowed(language: &'static str, country: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            country: Cow::Borrowed(country),
        }
    }

    /// Creates a locale, normalizing case (`"DE", "de"` becomes `de-DE`).
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: Cow::Owned(language.to_ascii_lowercase()),
            country: Cow::Owned(country.to_ascii_uppercase()),
        }
    }

    /// Parses `"de"`, `"de-DE"` or `"de_DE"`. Anything after the country is
    /// ignored.
    pub fn from_tag(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        Self::new(language, country)
    }

    /// Lowercase ISO 639 language code, empty for root.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase ISO 3166 country code, possibly empty.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Next locale in the fallback chain.
    fn parent(&self) -> Option<Locale> {
        if !self.country.is_empty() {
            Some(Locale::new(&self.language, ""))
        } else if !self.language.is_empty() {
            Some(Locale::ROOT)
        } else {
            None
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.language.is_empty(), self.country.is_empty()) {
            (true, _) => f.write_str("und"),
            (false, true) => f.write_str(&self.language),
            (false, false) => write!(f, "{}-{}", self.language, self.country),
        }
    }
}

// =============================================================================
// LOCALE DATA
// =============================================================================

/// Number conventions of one locale.
#[derive(Debug)]
pub(crate) struct LocaleData {
    pub(crate) language: &'static str,
    pub(crate) country: &'static str,
    pub(crate) decimal_separator: char,
    pub(crate) grouping_separator: char,
    pub(crate) currency_symbol: &'static str,
    pub(crate) international_currency_symbol: &'static str,
    pub(crate) number_pattern: &'static str,
    pub(crate) currency_pattern: &'static str,
    pub(crate) percent_pattern: &'static str,
}

const NBSP: char = '\u{a0}';

static LOCALE_DATA: &[LocaleData] = &[
    LocaleData {
        language: "",
        country: "",
        decimal_separator: '.',
        grouping_separator: ',',
        currency_symbol: "\u{a4}",
        international_currency_symbol: "XXX",
        number_pattern: "#,##0.###",
        currency_pattern: "\u{a4}#,##0.00",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "en",
        country: "",
        decimal_separator: '.',
        grouping_separator: ',',
        currency_symbol: "\u{a4}",
        international_currency_symbol: "XXX",
        number_pattern: "#,##0.###",
        currency_pattern: "\u{a4}#,##0.00",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "en",
        country: "US",
        decimal_separator: '.',
        grouping_separator: ',',
        currency_symbol: "$",
        international_currency_symbol: "USD",
        number_pattern: "#,##0.###",
        currency_pattern: "\u{a4}#,##0.00",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "en",
        country: "GB",
        decimal_separator: '.',
        grouping_separator: ',',
        currency_symbol: "\u{a3}",
        international_currency_symbol: "GBP",
        number_pattern: "#,##0.###",
        currency_pattern: "\u{a4}#,##0.00",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "de",
        country: "",
        decimal_separator: ',',
        grouping_separator: '.',
        currency_symbol: "\u{a4}",
        international_currency_symbol: "XXX",
        number_pattern: "#,##0.###",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "de",
        country: "DE",
        decimal_separator: ',',
        grouping_separator: '.',
        currency_symbol: "\u{20ac}",
        international_currency_symbol: "EUR",
        number_pattern: "#,##0.###",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        percent_pattern: "#,##0%",
    },
    LocaleData {
        language: "fr",
        country: "",
        decimal_separator: ',',
        grouping_separator: NBSP,
        currency_symbol: "\u{a4}",
        international_currency_symbol: "XXX",
        number_pattern: "#,##0.###",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        percent_pattern: "#,##0\u{a0}%",
    },
    LocaleData {
        language: "fr",
        country: "FR",
        decimal_separator: ',',
        grouping_separator: NBSP,
        currency_symbol: "\u{20ac}",
        international_currency_symbol: "EUR",
        number_pattern: "#,##0.###",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        percent_pattern: "#,##0\u{a0}%",
    },
];

/// Finds the closest entry for `locale`, walking country -> language -> root.
pub(crate) fn lookup(locale: &Locale) -> &'static LocaleData {
    let mut current = Some(locale.clone());
    while let Some(candidate) = current {
        if let Some(data) = LOCALE_DATA
            .iter()
            .find(|d| d.language == candidate.language() && d.country == candidate.country())
        {
            return data;
        }
        current = candidate.parent();
    }
    &LOCALE_DATA[0]
}
