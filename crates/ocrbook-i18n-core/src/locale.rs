//! Canonical locale set, display names, and text direction.
//!
//! # Design
//! - The supported set is a closed enum so every normalization output is a valid tag by construction.
//! - `LocaleCode::all()` preserves declaration order; base-language fallback relies on it as a tie-break.
//! - Tags serialize as their canonical BCP 47 spelling (`zh-Hans`, `pt-BR`).

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocaleCode {
    /// Ukrainian.
    #[serde(rename = "uk")]
    Uk,
    /// English.
    #[serde(rename = "en")]
    En,
    /// Arabic.
    #[serde(rename = "ar")]
    Ar,
    /// Catalan.
    #[serde(rename = "ca")]
    Ca,
    /// Chinese (Simplified).
    #[serde(rename = "zh-Hans")]
    ZhHans,
    /// Chinese (Traditional).
    #[serde(rename = "zh-Hant")]
    ZhHant,
    /// Croatian.
    #[serde(rename = "hr")]
    Hr,
    /// Czech.
    #[serde(rename = "cs")]
    Cs,
    /// Danish.
    #[serde(rename = "da")]
    Da,
    /// Dutch.
    #[serde(rename = "nl")]
    Nl,
    /// Finnish.
    #[serde(rename = "fi")]
    Fi,
    /// French.
    #[serde(rename = "fr")]
    Fr,
    /// German.
    #[serde(rename = "de")]
    De,
    /// Greek.
    #[serde(rename = "el")]
    El,
    /// French (Canada).
    #[serde(rename = "fr-CA")]
    FrCa,
    /// Hebrew.
    #[serde(rename = "he")]
    He,
    /// Hindi.
    #[serde(rename = "hi")]
    Hi,
    /// Hungarian.
    #[serde(rename = "hu")]
    Hu,
    /// Indonesian.
    #[serde(rename = "id")]
    Id,
    /// Italian.
    #[serde(rename = "it")]
    It,
    /// Japanese.
    #[serde(rename = "ja")]
    Ja,
    /// Korean.
    #[serde(rename = "ko")]
    Ko,
    /// Malay.
    #[serde(rename = "ms")]
    Ms,
    /// Norwegian Bokmål.
    #[serde(rename = "nb")]
    Nb,
    /// Polish.
    #[serde(rename = "pl")]
    Pl,
    /// Portuguese (Brazil).
    #[serde(rename = "pt-BR")]
    PtBr,
    /// Portuguese (Portugal).
    #[serde(rename = "pt-PT")]
    PtPt,
    /// Romanian.
    #[serde(rename = "ro")]
    Ro,
    /// Russian.
    #[serde(rename = "ru")]
    Ru,
    /// Slovak.
    #[serde(rename = "sk")]
    Sk,
    /// Spanish (Mexico).
    #[serde(rename = "es-MX")]
    EsMx,
    /// Spanish.
    #[serde(rename = "es")]
    Es,
    /// Swedish.
    #[serde(rename = "sv")]
    Sv,
    /// Thai.
    #[serde(rename = "th")]
    Th,
    /// Turkish.
    #[serde(rename = "tr")]
    Tr,
    /// Vietnamese.
    #[serde(rename = "vi")]
    Vi,
}

/// Number of supported locales.
pub const LOCALE_COUNT: usize = 36;

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

impl LocaleCode {
    /// All supported locales in declaration order.
    #[must_use]
    pub const fn all() -> [Self; LOCALE_COUNT] {
        [
            Self::Uk,
            Self::En,
            Self::Ar,
            Self::Ca,
            Self::ZhHans,
            Self::ZhHant,
            Self::Hr,
            Self::Cs,
            Self::Da,
            Self::Nl,
            Self::Fi,
            Self::Fr,
            Self::De,
            Self::El,
            Self::FrCa,
            Self::He,
            Self::Hi,
            Self::Hu,
            Self::Id,
            Self::It,
            Self::Ja,
            Self::Ko,
            Self::Ms,
            Self::Nb,
            Self::Pl,
            Self::PtBr,
            Self::PtPt,
            Self::Ro,
            Self::Ru,
            Self::Sk,
            Self::EsMx,
            Self::Es,
            Self::Sv,
            Self::Th,
            Self::Tr,
            Self::Vi,
        ]
    }

    /// Canonical tag in its canonical casing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Uk => "uk",
            Self::En => "en",
            Self::Ar => "ar",
            Self::Ca => "ca",
            Self::ZhHans => "zh-Hans",
            Self::ZhHant => "zh-Hant",
            Self::Hr => "hr",
            Self::Cs => "cs",
            Self::Da => "da",
            Self::Nl => "nl",
            Self::Fi => "fi",
            Self::Fr => "fr",
            Self::De => "de",
            Self::El => "el",
            Self::FrCa => "fr-CA",
            Self::He => "he",
            Self::Hi => "hi",
            Self::Hu => "hu",
            Self::Id => "id",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Ms => "ms",
            Self::Nb => "nb",
            Self::Pl => "pl",
            Self::PtBr => "pt-BR",
            Self::PtPt => "pt-PT",
            Self::Ro => "ro",
            Self::Ru => "ru",
            Self::Sk => "sk",
            Self::EsMx => "es-MX",
            Self::Es => "es",
            Self::Sv => "sv",
            Self::Th => "th",
            Self::Tr => "tr",
            Self::Vi => "vi",
        }
    }

    /// Native display name for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uk => "Українська",
            Self::En => "English",
            Self::Ar => "العربية",
            Self::Ca => "Català",
            Self::ZhHans => "简体中文",
            Self::ZhHant => "繁體中文",
            Self::Hr => "Hrvatski",
            Self::Cs => "Čeština",
            Self::Da => "Dansk",
            Self::Nl => "Nederlands",
            Self::Fi => "Suomi",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::El => "Ελληνικά",
            Self::FrCa => "Français (CA)",
            Self::He => "עברית",
            Self::Hi => "हिन्दी",
            Self::Hu => "Magyar",
            Self::Id => "Indonesia",
            Self::It => "Italiano",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::Ms => "Bahasa Melayu",
            Self::Nb => "Norsk",
            Self::Pl => "Polski",
            Self::PtBr => "Português (BR)",
            Self::PtPt => "Português (PT)",
            Self::Ro => "Română",
            Self::Ru => "Русский",
            Self::Sk => "Slovenčina",
            Self::EsMx => "Español (MX)",
            Self::Es => "Español",
            Self::Sv => "Svenska",
            Self::Th => "ไทย",
            Self::Tr => "Türkçe",
            Self::Vi => "Tiếng Việt",
        }
    }

    /// Whether the locale is written right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar | Self::He)
    }

    /// Text direction for the locale.
    #[must_use]
    pub const fn direction(self) -> Direction {
        if self.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Look up a canonical tag, ignoring ASCII case. Returns `None` for anything else.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

impl Display for LocaleCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Document text direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}
