//! Locale normalization: any input string to one supported tag.
//!
//! # Design
//! - Total function: every input, including none at all, yields a supported locale.
//! - Rules run in a fixed priority order; exact canonical matches always win so canonical tags round-trip.
//! - Chinese is special-cased ahead of the variant table because script and region subtags are used interchangeably.
//! - Base-language fallback scans the supported set in declaration order and returns the first hit.

use serde::Serialize;

use crate::locale::{DEFAULT_LOCALE, LOCALE_COUNT, LocaleCode};
use crate::variants::{self, VariantTable};

static SUPPORTED: [LocaleCode; LOCALE_COUNT] = LocaleCode::all();

/// Markers that select Traditional Chinese for `zh*` input.
const TRADITIONAL_CHINESE_MARKERS: [&str; 4] = ["hant", "tw", "hk", "mo"];

/// U+FEFF, which `char::is_whitespace` does not cover.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Which rule produced a normalization result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Input was absent or empty.
    Empty,
    /// Input equals a canonical tag, ignoring case.
    Exact,
    /// Input starts with `zh`.
    Chinese,
    /// Input is a listed variant.
    Variant,
    /// Input's base language matched a supported tag.
    BaseLanguage,
    /// Nothing matched.
    Fallback,
}

impl MatchRule {
    /// Stable name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Exact => "exact",
            Self::Chinese => "chinese",
            Self::Variant => "variant",
            Self::BaseLanguage => "base_language",
            Self::Fallback => "fallback",
        }
    }
}

/// Normalization result with the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Resolved locale.
    pub locale: LocaleCode,
    /// Rule that matched.
    pub rule: MatchRule,
}

impl Resolution {
    const fn new(locale: LocaleCode, rule: MatchRule) -> Self {
        Self { locale, rule }
    }
}

/// Normalizer over a supported set and a variant table.
///
/// The supported set should contain [`DEFAULT_LOCALE`]; its order decides which tag wins when
/// several share a base language.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    supported: &'a [LocaleCode],
    variants: &'a VariantTable,
}

impl<'a> Normalizer<'a> {
    /// Build a normalizer over an explicit supported set and variant table.
    #[must_use]
    pub const fn new(supported: &'a [LocaleCode], variants: &'a VariantTable) -> Self {
        Self {
            supported,
            variants,
        }
    }

    /// Normalize `input` to a supported locale.
    #[must_use]
    pub fn normalize(&self, input: Option<&str>) -> LocaleCode {
        self.resolve(input).locale
    }

    /// Normalize `input` and report which rule matched.
    #[must_use]
    pub fn resolve(&self, input: Option<&str>) -> Resolution {
        let Some(raw) = input.filter(|raw| !raw.is_empty()) else {
            return Resolution::new(DEFAULT_LOCALE, MatchRule::Empty);
        };
        let lowered = raw.to_lowercase();
        let lowered = lowered.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

        if let Some(exact) = self
            .supported
            .iter()
            .copied()
            .find(|locale| locale.code().to_ascii_lowercase() == lowered)
        {
            return Resolution::new(exact, MatchRule::Exact);
        }

        if lowered.starts_with("zh") {
            let traditional = TRADITIONAL_CHINESE_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker));
            let locale = if traditional {
                LocaleCode::ZhHant
            } else {
                LocaleCode::ZhHans
            };
            return Resolution::new(locale, MatchRule::Chinese);
        }

        if let Some(variant) = self.variants.resolve(lowered) {
            return Resolution::new(variant, MatchRule::Variant);
        }

        let base = base_language(lowered);
        if let Some(locale) = self
            .supported
            .iter()
            .copied()
            .find(|locale| shares_base(locale.code(), base))
        {
            return Resolution::new(locale, MatchRule::BaseLanguage);
        }

        Resolution::new(DEFAULT_LOCALE, MatchRule::Fallback)
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(&SUPPORTED, variants::builtin())
    }
}

/// Normalize `input` against the built-in supported set.
#[must_use]
pub fn normalize(input: Option<&str>) -> LocaleCode {
    Normalizer::default().normalize(input)
}

/// Normalize `input` against the built-in supported set and report the matching rule.
#[must_use]
pub fn resolve(input: Option<&str>) -> Resolution {
    Normalizer::default().resolve(input)
}

fn base_language(lowered: &str) -> &str {
    let head = lowered.split('-').next().unwrap_or_default();
    head.split('_').next().unwrap_or_default()
}

fn shares_base(code: &str, base: &str) -> bool {
    let code = code.to_ascii_lowercase();
    code == base
        || code
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('-'))
}
