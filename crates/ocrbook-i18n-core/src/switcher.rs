//! Locale switching: normalize, announce, persist, load with English retry, apply.
//!
//! # Design
//! - A switch never leaves the document half-translated: either a whole dictionary is applied or nothing is.
//! - A failed load is retried once with the default locale; a failed retry is logged and swallowed.
//! - Every switch takes a generation number; results of a switch overtaken by a newer one are discarded.
//! - State lives in `Cell`s: switches interleave on one thread but never run in parallel.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dictionary::Dictionary;
use crate::document::DocumentSink;
use crate::error::{I18nError, I18nResult};
use crate::loader::DictionaryLoader;
use crate::locale::{DEFAULT_LOCALE, LocaleCode};
use crate::normalize::normalize;

/// Durable storage for the chosen locale.
pub trait LocaleStore {
    /// Previously saved raw value, if any.
    fn load(&self) -> Option<String>;

    /// Persist `locale`. Implementations report their own failures.
    fn save(&self, locale: LocaleCode);
}

impl<T: LocaleStore + ?Sized> LocaleStore for Rc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, locale: LocaleCode) {
        (**self).save(locale);
    }
}

/// Dictionary obtained for a requested locale, possibly the default locale's instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loaded {
    /// Locale that was asked for.
    pub requested: LocaleCode,
    /// Dictionary that was obtained.
    pub dictionary: Dictionary,
}

impl Loaded {
    /// Whether the default locale stood in for the requested one.
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.dictionary.locale() != self.requested
    }
}

/// Load `locale`, retrying once with [`DEFAULT_LOCALE`] when it is unavailable.
///
/// # Errors
///
/// Returns the requested locale's load error when the retry fails too, or when `locale` already
/// is the default.
pub async fn load_with_fallback(
    loader: &DictionaryLoader,
    locale: LocaleCode,
) -> I18nResult<Loaded> {
    let err = match loader.load(locale).await {
        Ok(dictionary) => {
            return Ok(Loaded {
                requested: locale,
                dictionary,
            });
        }
        Err(err) => err,
    };
    if locale == DEFAULT_LOCALE {
        return Err(err);
    }

    warn!(
        locale = %locale,
        failures = ?summaries(&err),
        "dictionary unavailable; retrying with default locale"
    );
    match loader.load(DEFAULT_LOCALE).await {
        Ok(dictionary) => Ok(Loaded {
            requested: locale,
            dictionary,
        }),
        Err(fallback_err) => {
            warn!(
                locale = %DEFAULT_LOCALE,
                failures = ?summaries(&fallback_err),
                "default locale dictionary unavailable"
            );
            Err(err)
        }
    }
}

fn summaries(err: &I18nError) -> Vec<String> {
    err.failures().iter().map(|f| f.summary()).collect()
}

/// Result of one switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwitchOutcome {
    /// The requested dictionary was applied.
    Applied {
        /// Normalized locale.
        locale: LocaleCode,
    },
    /// The default locale's dictionary was applied instead.
    FellBack {
        /// Normalized locale that was requested.
        requested: LocaleCode,
        /// Locale whose dictionary was applied.
        applied: LocaleCode,
    },
    /// Nothing could be loaded; the document was left as it was.
    Unavailable {
        /// Normalized locale that was requested.
        requested: LocaleCode,
    },
    /// A newer switch started before this one finished; its result was dropped.
    Superseded {
        /// Normalized locale that was requested.
        requested: LocaleCode,
    },
}

/// Drives locale switches against a loader, a store, and a document.
#[derive(Debug)]
pub struct LocaleSwitcher<S, D> {
    loader: DictionaryLoader,
    store: S,
    sink: D,
    fallback_to_default: bool,
    active: Cell<Option<LocaleCode>>,
    generation: Cell<u64>,
}

impl<S: LocaleStore, D: DocumentSink> LocaleSwitcher<S, D> {
    /// Switcher that retries with the default locale on failure.
    pub fn new(loader: DictionaryLoader, store: S, sink: D) -> Self {
        Self {
            loader,
            store,
            sink,
            fallback_to_default: true,
            active: Cell::new(None),
            generation: Cell::new(0),
        }
    }

    /// Enable or disable the default-locale retry.
    #[must_use]
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_default = enabled;
        self
    }

    /// Locale of the last applied switch.
    #[must_use]
    pub fn active(&self) -> Option<LocaleCode> {
        self.active.get()
    }

    /// Locale to start with: the saved choice, else the environment's language, else the default.
    #[must_use]
    pub fn initial_locale(&self, environment_language: Option<&str>) -> LocaleCode {
        initial_locale(&self.store, environment_language)
    }

    /// Switch to the initial locale.
    pub async fn start(&self, environment_language: Option<&str>) -> SwitchOutcome {
        let initial = self.initial_locale(environment_language);
        self.switch_to(Some(initial.code())).await
    }

    /// Normalize `raw`, announce and persist it, then load and apply its dictionary.
    pub async fn switch_to(&self, raw: Option<&str>) -> SwitchOutcome {
        let locale = normalize(raw);
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        self.sink.announce(locale);
        self.store.save(locale);

        let loaded = if self.fallback_to_default {
            load_with_fallback(&self.loader, locale).await
        } else {
            self.loader.load(locale).await.map(|dictionary| Loaded {
                requested: locale,
                dictionary,
            })
        };

        if self.generation.get() != generation {
            debug!(locale = %locale, "locale switch superseded by a newer request");
            return SwitchOutcome::Superseded { requested: locale };
        }

        match loaded {
            Ok(loaded) => {
                self.sink.apply(&loaded.dictionary, locale.direction());
                self.active.set(Some(locale));
                if loaded.fell_back() {
                    SwitchOutcome::FellBack {
                        requested: locale,
                        applied: loaded.dictionary.locale(),
                    }
                } else {
                    SwitchOutcome::Applied { locale }
                }
            }
            Err(err) => {
                warn!(locale = %locale, error = %err, "leaving document untranslated");
                SwitchOutcome::Unavailable { requested: locale }
            }
        }
    }
}

/// Locale to start with: the saved choice, else `environment_language`, else the default.
#[must_use]
pub fn initial_locale(store: &impl LocaleStore, environment_language: Option<&str>) -> LocaleCode {
    let saved = store.load().filter(|value| !value.is_empty());
    let candidate = saved
        .as_deref()
        .or(environment_language.filter(|value| !value.is_empty()));
    normalize(Some(candidate.unwrap_or(DEFAULT_LOCALE.code())))
}
