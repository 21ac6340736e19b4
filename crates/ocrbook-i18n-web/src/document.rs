//! Live-document sink: writes translations, direction, language, and control state.

use gloo::console;
use ocrbook_i18n_core::document::{BINDING_ATTR, BUTTON_ATTR, SELECT_ATTR, TEXT_ATTR, is_pressed};
use ocrbook_i18n_core::{AttributeBinding, Dictionary, Direction, DocumentSink, LocaleCode};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

/// All elements matching `selector`; an invalid selector yields none.
pub(crate) fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        console::error!("invalid selector", selector.to_string());
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// [`DocumentSink`] over a browser document.
#[derive(Clone, Debug)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Sink writing into `document`.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element()
            && let Err(err) = root.set_attribute(name, value)
        {
            console::error!("document attribute update failed", name.to_string(), err);
        }
    }

    fn apply_text(&self, dictionary: &Dictionary) {
        for element in elements(&self.document, &format!("[{TEXT_ATTR}]")) {
            let Some(key) = element.get_attribute(TEXT_ATTR) else {
                continue;
            };
            if let Some(value) = dictionary.get(&key) {
                element.set_text_content(Some(value));
            }
        }
    }

    fn apply_bindings(&self, dictionary: &Dictionary) {
        for element in elements(&self.document, &format!("[{BINDING_ATTR}]")) {
            let Some(spec) = element.get_attribute(BINDING_ATTR) else {
                continue;
            };
            let Some(binding) = AttributeBinding::parse(&spec) else {
                continue;
            };
            if let Some(value) = binding.resolve(dictionary)
                && let Err(err) = element.set_attribute(binding.attr, value)
            {
                console::error!("translated attribute rejected", binding.attr.to_string(), err);
            }
        }
    }
}

impl DocumentSink for DomDocument {
    fn announce(&self, locale: LocaleCode) {
        self.set_root_attribute("lang", locale.code());

        for button in elements(&self.document, &format!("[{BUTTON_ATTR}]")) {
            let tag = button.get_attribute(BUTTON_ATTR).unwrap_or_default();
            let pressed = if is_pressed(&tag, locale) { "true" } else { "false" };
            if let Err(err) = button.set_attribute("aria-pressed", pressed) {
                console::error!("aria-pressed update failed", tag, err);
            }
        }

        if let Ok(Some(select)) = self.document.query_selector(&format!("[{SELECT_ATTR}]"))
            && let Ok(select) = select.dyn_into::<HtmlSelectElement>()
        {
            select.set_value(locale.code());
        }
    }

    fn apply(&self, dictionary: &Dictionary, direction: Direction) {
        self.apply_text(dictionary);
        self.apply_bindings(dictionary);
        if let Some(title) = dictionary.meta_title() {
            self.document.set_title(title);
        }
        self.set_root_attribute("dir", direction.as_attr());
    }
}
