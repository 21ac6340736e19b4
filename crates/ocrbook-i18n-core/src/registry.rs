//! Preloaded dictionary registries.
//!
//! # Design
//! - The registry is an injected capability with a single lookup; embeddings decide where entries live.
//! - Loaders only read. Writes come from the embedding (bundled data, injected scripts).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::{DEFAULT_LOCALE, LocaleCode};

/// Source of dictionaries that are available without any I/O.
pub trait PreloadedRegistry {
    /// Dictionary registered for `locale`, if any.
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary>;
}

impl<T: PreloadedRegistry + ?Sized> PreloadedRegistry for &T {
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary> {
        (**self).lookup(locale)
    }
}

impl<T: PreloadedRegistry + ?Sized> PreloadedRegistry for Rc<T> {
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary> {
        (**self).lookup(locale)
    }
}

impl<T: PreloadedRegistry + ?Sized> PreloadedRegistry for Arc<T> {
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary> {
        (**self).lookup(locale)
    }
}

/// Registry held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: RefCell<HashMap<LocaleCode, Dictionary>>,
}

impl InMemoryRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dictionary` under its own locale, replacing any previous entry.
    pub fn insert(&self, dictionary: Dictionary) {
        self.entries
            .borrow_mut()
            .insert(dictionary.locale(), dictionary);
    }

    /// Whether `locale` has an entry.
    #[must_use]
    pub fn contains(&self, locale: LocaleCode) -> bool {
        self.entries.borrow().contains_key(&locale)
    }

    /// Number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Parse a bundle shaped like the browser global: `{ "<tag>": { "<key>": "<text>" } }`.
    ///
    /// Keys that are not canonical tags are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::DictionaryParse`] or [`I18nError::DictionaryShape`] when the bundle or
    /// one of its entries is malformed.
    pub fn from_bundle_json(payload: &str) -> I18nResult<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|err| I18nError::parse(DEFAULT_LOCALE, err))?;
        let Value::Object(bundle) = value else {
            return Err(I18nError::DictionaryShape {
                locale: DEFAULT_LOCALE,
            });
        };

        let registry = Self::new();
        for (tag, entries) in bundle {
            let Some(locale) = LocaleCode::from_code(&tag) else {
                tracing::warn!(tag = %tag, "ignoring bundle entry for unsupported locale");
                continue;
            };
            registry.insert(Dictionary::from_value(locale, entries)?);
        }
        Ok(registry)
    }
}

impl PreloadedRegistry for InMemoryRegistry {
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary> {
        self.entries.borrow().get(&locale).cloned()
    }
}
