//! # Design
//!
//! - Provide structured, constant-message errors for normalization tables and dictionary loading.
//! - Keep per-strategy failures separate from the aggregate so callers can report every attempt.
//! - Preserve source errors without interpolating context into error messages.

use thiserror::Error;

use crate::locale::LocaleCode;

/// Result type for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors produced by the i18n core.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A variant string was listed under two canonical tags.
    #[error("duplicate locale variant")]
    DuplicateVariant {
        /// Offending variant string.
        variant: &'static str,
        /// Tag that claimed the variant first.
        first: LocaleCode,
        /// Tag that claimed the variant again.
        second: LocaleCode,
    },
    /// Dictionary payload was not valid JSON.
    #[error("dictionary parse failure")]
    DictionaryParse {
        /// Locale the payload was loaded for.
        locale: LocaleCode,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Dictionary payload was valid JSON but not an object.
    #[error("dictionary is not a JSON object")]
    DictionaryShape {
        /// Locale the payload was loaded for.
        locale: LocaleCode,
    },
    /// Every acquisition strategy failed.
    #[error("no dictionary available")]
    DictionaryUnavailable {
        /// Locale that was requested.
        locale: LocaleCode,
        /// One entry per attempted strategy, in attempt order.
        failures: Vec<StrategyFailure>,
    },
    /// Configuration value failed validation.
    #[error("invalid i18n configuration")]
    InvalidConfig {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

impl I18nError {
    pub(crate) const fn parse(locale: LocaleCode, source: serde_json::Error) -> Self {
        Self::DictionaryParse { locale, source }
    }

    pub(crate) fn invalid_config(
        field: &'static str,
        reason: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            field,
            reason,
            value: Some(value.into()),
        }
    }

    /// Strategy failures recorded for an exhausted load, empty for other variants.
    #[must_use]
    pub fn failures(&self) -> &[StrategyFailure] {
        match self {
            Self::DictionaryUnavailable { failures, .. } => failures,
            _ => &[],
        }
    }
}

/// Failure of one acquisition strategy.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Registry has no entry for the locale.
    #[error("locale not preloaded")]
    NotPreloaded,
    /// The transport failed before a response arrived.
    #[error("resource transport failure")]
    Transport {
        /// Resource address.
        url: String,
        /// Transport-specific detail.
        detail: String,
    },
    /// The resource answered with a non-success status.
    #[error("resource returned non-success status")]
    Status {
        /// Resource address.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The resource body was not a usable dictionary.
    #[error("resource body is not a dictionary")]
    Decode {
        /// Resource address.
        url: String,
        /// Underlying decoding error.
        source: Box<I18nError>,
    },
    /// The injected script errored while loading.
    #[error("script injection failed")]
    ScriptFailed {
        /// Script address.
        url: String,
        /// Environment-specific detail.
        detail: String,
    },
    /// The script loaded but did not register the locale.
    #[error("script did not register dictionary")]
    ScriptMissingEntry {
        /// Script address.
        url: String,
    },
}

/// Strategy name paired with its failure.
#[derive(Debug)]
pub struct StrategyFailure {
    /// Name of the strategy that failed.
    pub strategy: &'static str,
    /// Why it failed.
    pub error: StrategyError,
}

impl StrategyFailure {
    /// Render `strategy: message` for diagnostics.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.error {
            StrategyError::Status { status, .. } => {
                format!("{}: {} ({status})", self.strategy, self.error)
            }
            error => format!("{}: {error}", self.strategy),
        }
    }
}
