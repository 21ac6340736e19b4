//! Locale controls: the generated `<select>` and its option list.

use ocrbook_i18n_core::{LocaleCode, display_name, supported_locales};

/// Accessible label of the generated select.
pub const SELECT_LABEL: &str = "Language";

/// Inline style of the generated select.
pub const SELECT_STYLE: &str = "padding: 8px 12px; \
    border-radius: 999px; \
    border: 1px solid var(--border, rgba(15,23,42,0.1)); \
    background: rgba(255,255,255,0.55); \
    font-size: 13px; \
    color: var(--fg, #0b1220); \
    cursor: pointer; \
    outline: none;";

/// One `<option>` of the locale select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Option value: the canonical tag.
    pub value: &'static str,
    /// Visible text: the native display name.
    pub label: &'static str,
    /// Whether the option starts selected.
    pub selected: bool,
}

/// Options for every supported locale in declaration order, with `current` selected.
#[must_use]
pub fn select_options(current: LocaleCode) -> Vec<SelectOption> {
    supported_locales()
        .into_iter()
        .map(|locale| SelectOption {
            value: locale.code(),
            label: display_name(locale),
            selected: locale == current,
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub(crate) use dom::{build_dropdown, wire_buttons};

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::rc::Rc;

    use gloo::console;
    use gloo::events::EventListener;
    use ocrbook_i18n_core::LocaleCode;
    use ocrbook_i18n_core::document::{BUTTON_ATTR, DROPDOWN_ATTR, SELECT_ATTR};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

    use super::{SELECT_LABEL, SELECT_STYLE, select_options};
    use crate::app::I18nApp;
    use crate::document::elements;

    /// Switch locale when a `[data-lang-btn]` button is clicked.
    pub(crate) fn wire_buttons(document: &Document, app: &Rc<I18nApp>) {
        for button in elements(document, &format!("[{BUTTON_ATTR}]")) {
            let app = Rc::clone(app);
            let target = button.clone();
            EventListener::new(&button, "click", move |_| {
                let tag = target.get_attribute(BUTTON_ATTR);
                app.switch_in_background(tag);
            })
            .forget();
        }
    }

    /// Append the locale select to the `[data-lang-dropdown]` container, if the page has one.
    pub(crate) fn build_dropdown(document: &Document, app: &Rc<I18nApp>, current: LocaleCode) {
        let Ok(Some(container)) = document.query_selector(&format!("[{DROPDOWN_ATTR}]")) else {
            return;
        };
        let select = match create_select(document, current) {
            Ok(select) => select,
            Err(err) => {
                console::error!("locale select creation failed", err);
                return;
            }
        };

        let app = Rc::clone(app);
        let source = select.clone();
        EventListener::new(&select, "change", move |_| {
            app.switch_in_background(Some(source.value()));
        })
        .forget();

        if let Err(err) = container.append_child(&select) {
            console::error!("locale select insertion failed", err);
        }
    }

    fn create_select(
        document: &Document,
        current: LocaleCode,
    ) -> Result<HtmlSelectElement, wasm_bindgen::JsValue> {
        let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
        select.set_attribute(SELECT_ATTR, "")?;
        select.set_attribute("aria-label", SELECT_LABEL)?;
        select.set_attribute("style", SELECT_STYLE)?;

        for spec in select_options(current) {
            let option: HtmlOptionElement = document.create_element("option")?.dyn_into()?;
            option.set_value(spec.value);
            option.set_text_content(Some(spec.label));
            option.set_selected(spec.selected);
            select.append_child(&option)?;
        }
        Ok(select)
    }

}
