//! Translation dictionaries: flat key to string maps bound to one locale.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;

/// Key holding the document title.
pub const META_TITLE_KEY: &str = "meta_title";

/// Key to translated string mapping for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    locale: LocaleCode,
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Build a dictionary from already-decoded entries.
    #[must_use]
    pub fn new<I, K, V>(locale: LocaleCode, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale,
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Parse a JSON object payload.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::DictionaryParse`] for malformed JSON and
    /// [`I18nError::DictionaryShape`] when the document is not an object.
    pub fn from_json(locale: LocaleCode, payload: &str) -> I18nResult<Self> {
        let value: Value =
            serde_json::from_str(payload).map_err(|err| I18nError::parse(locale, err))?;
        Self::from_value(locale, value)
    }

    /// Convert an already-parsed JSON value.
    ///
    /// Strings are kept as-is; numbers and booleans keep their JSON spelling; other values are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::DictionaryShape`] when `value` is not an object.
    pub fn from_value(locale: LocaleCode, value: Value) -> I18nResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_object(locale, map)),
            _ => Err(I18nError::DictionaryShape { locale }),
        }
    }

    fn from_object(locale: LocaleCode, map: Map<String, Value>) -> Self {
        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let text = match value {
                Value::String(text) => text,
                Value::Number(number) => number_text(&number),
                Value::Bool(flag) => flag.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    tracing::trace!(locale = %locale, key = %key, "skipping non-scalar dictionary value");
                    continue;
                }
            };
            entries.insert(key, text);
        }
        Self { locale, entries }
    }

    /// Locale this dictionary belongs to.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Translation for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Document title, when the dictionary carries one.
    #[must_use]
    pub fn meta_title(&self) -> Option<&str> {
        self.get(META_TITLE_KEY).filter(|title| !title.is_empty())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Text a page shows for a JSON number: integers verbatim, floats in ECMAScript `Number#toString`
/// form (`1.0` is `1`, `1e21` is `1e+21`, `1e-7` stays exponential).
fn number_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    let Some(value) = number.as_f64() else {
        return number.to_string();
    };
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
