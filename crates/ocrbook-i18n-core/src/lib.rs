#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Locale normalization and dictionary loading for the OCRBook site.
//!
//! Layout:
//! - `locale.rs`: the fixed supported set, display names, text direction
//! - `variants.rs`: validated table of known regional/legacy variants
//! - `normalize.rs`: arbitrary input to a supported locale
//! - `dictionary.rs`: key to string maps bound to one locale
//! - `registry.rs`: preloaded dictionaries (injected)
//! - `loader.rs`: ordered acquisition strategies with aggregated failures
//! - `switcher.rs`: normalize, persist, load with English retry, apply
//! - `document.rs`: markup contracts shared with the browser embedding
//! - `config.rs`, `error.rs`: configuration and error types

pub mod config;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod loader;
pub mod locale;
pub mod normalize;
pub mod registry;
pub mod switcher;
pub mod variants;

pub use config::{I18nConfig, ResourcePaths};
pub use dictionary::Dictionary;
pub use document::{AttributeBinding, DocumentSink};
pub use error::{I18nError, I18nResult, StrategyError, StrategyFailure};
pub use loader::{
    AcquisitionStrategy, DictionaryLoader, FetchStrategy, PreloadedStrategy, ResourceFetcher,
    ScriptInjector, ScriptStrategy,
};
pub use locale::{DEFAULT_LOCALE, Direction, LocaleCode};
pub use normalize::{MatchRule, Normalizer, Resolution, normalize, resolve};
pub use registry::{InMemoryRegistry, PreloadedRegistry};
pub use switcher::{
    LocaleStore, Loaded, LocaleSwitcher, SwitchOutcome, initial_locale, load_with_fallback,
};

/// Supported locales in declaration order.
#[must_use]
pub const fn supported_locales() -> [LocaleCode; locale::LOCALE_COUNT] {
    LocaleCode::all()
}

/// Display name for a supported locale, in its own language.
#[must_use]
pub const fn display_name(locale: LocaleCode) -> &'static str {
    locale.label()
}
