use gloo::console;
use gloo::utils::window;
use js_sys::{JSON, Reflect};
use ocrbook_i18n_core::{Dictionary, LocaleCode, PreloadedRegistry};
use wasm_bindgen::JsValue;

/// Reads dictionaries from `window[global][tag]`, where pages and injected scripts register them.
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    global: String,
}

impl WindowRegistry {
    /// Registry backed by the window property `global`.
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
        }
    }

    fn entry(&self, locale: LocaleCode) -> Option<JsValue> {
        let store = Reflect::get(&window(), &JsValue::from_str(&self.global)).ok()?;
        if !store.is_object() {
            return None;
        }
        let entry = Reflect::get(&store, &JsValue::from_str(locale.code())).ok()?;
        entry.is_object().then_some(entry)
    }
}

impl PreloadedRegistry for WindowRegistry {
    fn lookup(&self, locale: LocaleCode) -> Option<Dictionary> {
        let entry = self.entry(locale)?;
        let payload = JSON::stringify(&entry).ok()?.as_string()?;
        match Dictionary::from_json(locale, &payload) {
            Ok(dictionary) => {
                console::debug!("registered dictionary found", locale.code());
                Some(dictionary)
            }
            Err(err) => {
                console::warn!("registered dictionary rejected", locale.code(), err.to_string());
                None
            }
        }
    }
}
