use async_trait::async_trait;
use js_sys::Promise;
use ocrbook_i18n_core::{ScriptInjector, StrategyError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlScriptElement};

/// Appends an async `<script>` to `<head>` and waits for its load or error event.
#[derive(Clone, Debug)]
pub struct DomScriptInjector {
    document: Document,
}

impl DomScriptInjector {
    /// Injector targeting `document`.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn append(&self, url: &str) -> Result<Promise, JsValue> {
        let script: HtmlScriptElement = self.document.create_element("script")?.dyn_into()?;
        script.set_src(url);
        script.set_async(true);
        let loaded = Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });
        let head = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&script)?;
        Ok(loaded)
    }
}

#[async_trait(?Send)]
impl ScriptInjector for DomScriptInjector {
    async fn inject(&self, url: &str) -> Result<(), StrategyError> {
        let failed = |err: JsValue| StrategyError::ScriptFailed {
            url: url.to_string(),
            detail: describe(&err),
        };
        let loaded = self.append(url).map_err(failed)?;
        JsFuture::from(loaded).await.map(|_| ()).map_err(failed)
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| "script load failed".to_string())
}
