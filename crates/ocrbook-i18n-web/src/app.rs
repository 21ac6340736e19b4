//! Page bootstrap: the switcher, the `window` API object, and `DOMContentLoaded` wiring.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use js_sys::{Array, Object, Promise, Reflect};
use ocrbook_i18n_core::{
    DictionaryLoader, I18nConfig, LocaleSwitcher, SwitchOutcome, display_name, normalize,
    supported_locales,
};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::Document;

use crate::controls::{build_dropdown, wire_buttons};
use crate::document::DomDocument;
use crate::preferences::{BrowserStore, navigator_language};
use crate::services::{DomScriptInjector, GlooFetcher, WindowRegistry};

/// Shared page state.
#[derive(Debug)]
pub struct I18nApp {
    switcher: LocaleSwitcher<BrowserStore, DomDocument>,
}

impl I18nApp {
    /// Build the switcher for `document` from `config`.
    #[must_use]
    pub fn new(document: &Document, config: &I18nConfig) -> Self {
        let paths = config.resource_paths();
        let loader = DictionaryLoader::standard(
            WindowRegistry::new(config.registry_global.clone()),
            GlooFetcher,
            Some(DomScriptInjector::new(document.clone())),
            &paths,
        );
        let switcher = LocaleSwitcher::new(
            loader,
            BrowserStore::new(config.storage_key.clone()),
            DomDocument::new(document.clone()),
        )
        .with_fallback(config.fallback_to_default);
        Self { switcher }
    }

    /// Start a switch without waiting for it.
    pub fn switch_in_background(self: &Rc<Self>, raw: Option<String>) {
        let app = Rc::clone(self);
        spawn_local(async move {
            let outcome = app.switcher.switch_to(raw.as_deref()).await;
            report(outcome);
        });
    }

    fn switch_to_promise(self: &Rc<Self>, raw: Option<String>) -> Promise {
        let app = Rc::clone(self);
        future_to_promise(async move {
            let outcome = app.switcher.switch_to(raw.as_deref()).await;
            let json = serde_json::to_string(&outcome)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            js_sys::JSON::parse(&json)
        })
    }

    fn init(self: &Rc<Self>, document: &Document) {
        let initial = self.switcher.initial_locale(navigator_language().as_deref());
        wire_buttons(document, self);
        build_dropdown(document, self, initial);
        self.switch_in_background(Some(initial.code().to_string()));
    }
}

fn report(outcome: SwitchOutcome) {
    match outcome {
        SwitchOutcome::Applied { locale } => console::debug!("locale applied", locale.code()),
        SwitchOutcome::FellBack { requested, applied } => {
            console::warn!("locale unavailable, showing", requested.code(), applied.code());
        }
        SwitchOutcome::Unavailable { requested } => {
            console::warn!("no dictionary could be loaded for", requested.code());
        }
        SwitchOutcome::Superseded { .. } => {}
    }
}

/// Install `window[api_global]` and initialize once the document has been parsed.
pub fn run(config: I18nConfig) {
    console_error_panic_hook::set_once();
    if let Err(err) = config.validate() {
        console::error!("invalid i18n configuration", err.to_string());
        return;
    }

    let document = document();
    let app = Rc::new(I18nApp::new(&document, &config));
    if let Err(err) = expose_api(&app, &config.api_global) {
        console::error!("i18n API installation failed", err);
    }

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| app.init(&target)).forget();
    } else {
        app.init(&document);
    }
}

fn expose_api(app: &Rc<I18nApp>, global: &str) -> Result<(), JsValue> {
    let api = Object::new();

    let switcher = Rc::clone(app);
    let set_lang = Closure::<dyn Fn(JsValue) -> Promise>::new(move |raw: JsValue| {
        switcher.switch_to_promise(raw.as_string())
    });
    Reflect::set(&api, &"setLang".into(), set_lang.as_ref())?;
    set_lang.forget();

    let normalize_fn = Closure::<dyn Fn(JsValue) -> JsValue>::new(|raw: JsValue| {
        JsValue::from_str(normalize(raw.as_string().as_deref()).code())
    });
    Reflect::set(&api, &"normalize".into(), normalize_fn.as_ref())?;
    normalize_fn.forget();

    let supported = Array::new();
    let names = Object::new();
    for locale in supported_locales() {
        supported.push(&locale.code().into());
        Reflect::set(&names, &locale.code().into(), &display_name(locale).into())?;
    }
    Reflect::set(&api, &"SUPPORTED".into(), &supported)?;
    Reflect::set(&api, &"LANG_NAMES".into(), &names)?;

    Reflect::set(&window(), &global.into(), &api)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::storage::{LocalStorage, Storage};
    use js_sys::{Function, JSON};
    use ocrbook_i18n_core::LocaleCode;
    use ocrbook_i18n_core::locale::LOCALE_COUNT;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn installed(tag: &str) -> (I18nConfig, JsValue) {
        let config = I18nConfig {
            storage_key: format!("ocrbook_lang_{tag}"),
            registry_global: format!("OCRBookDictionaries_{tag}"),
            api_global: format!("OCRBookI18n_{tag}"),
            ..I18nConfig::default()
        };
        let app = Rc::new(I18nApp::new(&document(), &config));
        expose_api(&app, &config.api_global).expect("api installed");
        let api = Reflect::get(&window(), &config.api_global.as_str().into()).expect("api global");
        (config, api)
    }

    fn method(api: &JsValue, name: &str) -> Function {
        Reflect::get(api, &name.into())
            .expect("api member")
            .dyn_into()
            .expect("api function")
    }

    #[wasm_bindgen_test]
    fn api_exposes_normalize_and_locale_tables() {
        let (_, api) = installed("tables");

        let normalize = method(&api, "normalize");
        let portuguese = normalize.call1(&JsValue::NULL, &"pt".into()).expect("normalize call");
        assert_eq!(portuguese.as_string().as_deref(), Some("pt-PT"));
        let missing = normalize
            .call1(&JsValue::NULL, &JsValue::UNDEFINED)
            .expect("normalize call");
        assert_eq!(missing.as_string().as_deref(), Some("en"));

        let supported: Array = Reflect::get(&api, &"SUPPORTED".into())
            .expect("SUPPORTED")
            .dyn_into()
            .expect("array");
        assert_eq!(supported.length() as usize, LOCALE_COUNT);
        assert_eq!(supported.get(0).as_string().as_deref(), Some("uk"));

        let names = Reflect::get(&api, &"LANG_NAMES".into()).expect("LANG_NAMES");
        let traditional = Reflect::get(&names, &"zh-Hant".into()).expect("zh-Hant name");
        assert_eq!(traditional.as_string().as_deref(), Some("繁體中文"));
    }

    #[wasm_bindgen_test]
    async fn set_lang_resolves_with_outcome_and_persists() {
        let tag = "switch";
        let registry = JSON::parse(r#"{"fr": {"meta_title": "OCRBook en français"}}"#)
            .expect("registry literal");
        Reflect::set(
            &window(),
            &format!("OCRBookDictionaries_{tag}").into(),
            &registry,
        )
        .expect("registry installed");
        let (config, api) = installed(tag);

        let pending = method(&api, "setLang")
            .call1(&JsValue::NULL, &"fr-CH".into())
            .expect("setLang call");
        let outcome = JsFuture::from(pending.dyn_into::<Promise>().expect("promise"))
            .await
            .expect("switch resolves");

        let expected = serde_json::to_string(&SwitchOutcome::Applied {
            locale: LocaleCode::Fr,
        })
        .expect("outcome json");
        assert_eq!(
            JSON::stringify(&outcome).expect("stringify").as_string(),
            Some(expected)
        );
        assert_eq!(document().title(), "OCRBook en français");
        let stored = LocalStorage::raw()
            .get_item(&config.storage_key)
            .expect("storage read");
        assert_eq!(stored.as_deref(), Some("fr"));
        LocalStorage::delete(&config.storage_key);
    }
}
