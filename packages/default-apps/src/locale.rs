//! The user's ordered list of acceptable languages.
//!
//! Localized `<name>` and `<command>` elements are only accepted when their
//! `xml:lang` appears in this list. The list is derived from the locale
//! environment the same way desktop toolkits do it: every configured locale
//! is expanded into progressively less specific variants, and `C` closes
//! the list.

use regex::Regex;
use std::sync::LazyLock;

/// Locale environment variables, in order of precedence.
const LOCALE_VARIABLES: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Language that is always acceptable, as the last resort.
const FALLBACK_LANGUAGE: &str = "C";

/// Locale pattern: `language[_TERRITORY][.CODESET][@MODIFIER]`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lang>[^_.@]+)(?P<territory>_[^.@]*)?(?P<codeset>\.[^@]*)?(?P<modifier>@.*)?$")
        .expect("valid regex")
});

/// Ordered list of acceptable languages, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageNames(Vec<String>);

impl LanguageNames {
    /// Use exactly the given languages, in the given order.
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(languages.into_iter().map(Into::into).collect())
    }

    /// Languages for the running process, read from the locale environment.
    pub fn from_env() -> Self {
        let value = LOCALE_VARIABLES
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());

        Self::from_locale_value(value.as_deref().unwrap_or(FALLBACK_LANGUAGE))
    }

    /// Expand a locale setting (possibly a colon-separated list) into the
    /// variants it accepts.
    ///
    /// # Examples
    /// ```
    /// use default_apps::locale::LanguageNames;
    ///
    /// let names = LanguageNames::from_locale_value("de_AT.UTF-8:fr");
    /// assert_eq!(
    ///     names.as_slice(),
    ///     ["de_AT.UTF-8", "de_AT", "de.UTF-8", "de", "fr", "C"]
    /// );
    /// ```
    pub fn from_locale_value(value: &str) -> Self {
        let mut names: Vec<String> = Vec::new();

        for locale in value.split(':').filter(|l| !l.is_empty()) {
            for variant in locale_variants(locale) {
                if !names.contains(&variant) {
                    names.push(variant);
                }
            }
        }

        if !names.iter().any(|n| n == FALLBACK_LANGUAGE) {
            names.push(FALLBACK_LANGUAGE.to_string());
        }

        Self(names)
    }

    /// Check whether `lang` is acceptable.
    ///
    /// The list is ordered from most to least desirable, so the scan stops at
    /// the first match.
    pub fn accepts(&self, lang: &str) -> bool {
        self.0.iter().any(|name| name == lang)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for LanguageNames {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Expand one locale into all its variants, most specific first.
///
/// Unparseable locales are kept as-is with no variants.
fn locale_variants(locale: &str) -> Vec<String> {
    let Some(caps) = LOCALE_PATTERN.captures(locale) else {
        return vec![locale.to_string()];
    };

    let lang = &caps["lang"];
    let territory = caps.name("territory").map(|m| m.as_str());
    let codeset = caps.name("codeset").map(|m| m.as_str());
    let modifier = caps.name("modifier").map(|m| m.as_str());

    // Bit 2 = modifier, bit 1 = territory, bit 0 = codeset. Walking the masks
    // downwards yields the variants from most to least specific.
    let mut present = 0u8;
    if codeset.is_some() {
        present |= 0b001;
    }
    if territory.is_some() {
        present |= 0b010;
    }
    if modifier.is_some() {
        present |= 0b100;
    }

    (0..=present)
        .rev()
        .filter(|mask| mask & !present == 0)
        .map(|mask| {
            let mut variant = lang.to_string();
            if mask & 0b010 != 0 {
                variant.push_str(territory.unwrap_or_default());
            }
            if mask & 0b001 != 0 {
                variant.push_str(codeset.unwrap_or_default());
            }
            if mask & 0b100 != 0 {
                variant.push_str(modifier.unwrap_or_default());
            }
            variant
        })
        .collect()
}
