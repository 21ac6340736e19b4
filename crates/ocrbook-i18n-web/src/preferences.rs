//! Persistence and environment helpers.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use ocrbook_i18n_core::{LocaleCode, LocaleStore};

/// `localStorage`-backed [`LocaleStore`]. Values are stored as bare tags.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    /// Store under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl LocaleStore for BrowserStore {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log_storage_error("get", &self.key, &format!("{err:?}"));
                None
            }
        }
    }

    fn save(&self, locale: LocaleCode) {
        set_storage(&self.key, locale.code());
    }
}

/// The browser's preferred language, if it reports one.
pub(crate) fn navigator_language() -> Option<String> {
    window().navigator().language()
}

fn set_storage(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        log_storage_error("set", key, &format!("{err:?}"));
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}
