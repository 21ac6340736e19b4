//! Document-facing contracts: markup attributes, attribute bindings, and the sink a switch drives.

use std::rc::Rc;

use crate::dictionary::Dictionary;
use crate::locale::{Direction, LocaleCode};

/// Elements whose text content is replaced by `dict[value]`.
pub const TEXT_ATTR: &str = "data-i18n";
/// Elements with an `attr:key` binding.
pub const BINDING_ATTR: &str = "data-i18n-attr";
/// Buttons that switch to the tag in their value.
pub const BUTTON_ATTR: &str = "data-lang-btn";
/// The generated locale `<select>`.
pub const SELECT_ATTR: &str = "data-lang-select";
/// Container that receives the generated `<select>`.
pub const DROPDOWN_ATTR: &str = "data-lang-dropdown";

/// Parsed `data-i18n-attr` value: set attribute `attr` to the translation of `key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeBinding<'a> {
    /// Attribute to set.
    pub attr: &'a str,
    /// Dictionary key supplying the value.
    pub key: &'a str,
}

impl<'a> AttributeBinding<'a> {
    /// Parse `attr:key`. Segments after a second `:` are ignored; empty parts yield `None`.
    #[must_use]
    pub fn parse(spec: &'a str) -> Option<Self> {
        let mut parts = spec.split(':');
        let attr = parts.next().filter(|attr| !attr.is_empty())?;
        let key = parts.next().filter(|key| !key.is_empty())?;
        Some(Self { attr, key })
    }

    /// Translated value for this binding.
    #[must_use]
    pub fn resolve<'d>(&self, dictionary: &'d Dictionary) -> Option<&'d str> {
        dictionary.get(self.key)
    }
}

/// Whether a locale button for `button_tag` should render as pressed.
#[must_use]
pub fn is_pressed(button_tag: &str, active: LocaleCode) -> bool {
    button_tag == active.code()
}

/// Receiver of the visible effects of a locale switch.
pub trait DocumentSink {
    /// Reflect the newly requested locale before its dictionary arrives: document language,
    /// pressed buttons, and the select value.
    fn announce(&self, locale: LocaleCode);

    /// Apply a loaded dictionary and set the document direction.
    fn apply(&self, dictionary: &Dictionary, direction: Direction);
}

impl<T: DocumentSink + ?Sized> DocumentSink for Rc<T> {
    fn announce(&self, locale: LocaleCode) {
        (**self).announce(locale);
    }

    fn apply(&self, dictionary: &Dictionary, direction: Direction) {
        (**self).apply(dictionary, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_both_parts() {
        assert_eq!(
            AttributeBinding::parse("placeholder:search.hint"),
            Some(AttributeBinding {
                attr: "placeholder",
                key: "search.hint"
            })
        );
        assert_eq!(AttributeBinding::parse("placeholder"), None);
        assert_eq!(AttributeBinding::parse(":key"), None);
        assert_eq!(AttributeBinding::parse("title:"), None);
    }

    #[test]
    fn binding_ignores_extra_segments() {
        let binding = AttributeBinding::parse("aria-label:nav.menu:extra");
        assert_eq!(binding.map(|b| b.key), Some("nav.menu"));
    }

    #[test]
    fn binding_resolves_through_dictionary() {
        let dict = Dictionary::new(LocaleCode::It, [("cta", "Inizia")]);
        let present = AttributeBinding::parse("title:cta");
        let missing = AttributeBinding::parse("title:other");
        assert_eq!(present.and_then(|b| b.resolve(&dict)), Some("Inizia"));
        assert_eq!(missing.and_then(|b| b.resolve(&dict)), None);
    }

    #[test]
    fn pressed_state_compares_canonical_tags() {
        assert!(is_pressed("zh-Hans", LocaleCode::ZhHans));
        assert!(!is_pressed("zh-hans", LocaleCode::ZhHans));
        assert!(!is_pressed("en", LocaleCode::Fr));
    }
}
