//! Embedding configuration: storage key, resource locations, and global names.
//!
//! # Design
//! - Every field has a default matching the shipped site layout, so an empty document deserializes.
//! - Validation is explicit; constructors do not validate implicitly.

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;

/// Default persistence key for the chosen locale.
pub const DEFAULT_STORAGE_KEY: &str = "ocrbook_lang";
/// Default base path for per-locale resources.
pub const DEFAULT_RESOURCE_BASE: &str = "./i18n";
/// Default global registry of preloaded dictionaries.
pub const DEFAULT_REGISTRY_GLOBAL: &str = "__OCRBOOK_I18N";
/// Default global name for the public API object.
pub const DEFAULT_API_GLOBAL: &str = "OCRBookI18n";

/// Configuration shared by embeddings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Key under which the chosen locale is persisted.
    pub storage_key: String,
    /// Base path or URL holding `{tag}.json` and `{tag}.js`.
    pub resource_base: String,
    /// Global object holding preloaded dictionaries keyed by tag.
    pub registry_global: String,
    /// Global object exposing the public API.
    pub api_global: String,
    /// Retry with the default locale when the requested dictionary is unavailable.
    pub fallback_to_default: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            resource_base: DEFAULT_RESOURCE_BASE.to_string(),
            registry_global: DEFAULT_REGISTRY_GLOBAL.to_string(),
            api_global: DEFAULT_API_GLOBAL.to_string(),
            fallback_to_default: true,
        }
    }
}

impl I18nConfig {
    /// Check that every name is usable.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> I18nResult<()> {
        require_non_blank("storage_key", &self.storage_key)?;
        require_non_blank("resource_base", &self.resource_base)?;
        require_non_blank("registry_global", &self.registry_global)?;
        require_non_blank("api_global", &self.api_global)?;
        if self.resource_base.ends_with('/') {
            return Err(I18nError::invalid_config(
                "resource_base",
                "must not end with '/'",
                self.resource_base.clone(),
            ));
        }
        Ok(())
    }

    /// Resource locations derived from `resource_base`.
    #[must_use]
    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths::new(self.resource_base.clone())
    }
}

fn require_non_blank(field: &'static str, value: &str) -> I18nResult<()> {
    if value.trim().is_empty() {
        return Err(I18nError::invalid_config(field, "must not be blank", value));
    }
    Ok(())
}

/// Per-locale resource locations under a common base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    base: String,
}

impl ResourcePaths {
    /// Paths rooted at `base` (a relative path, absolute path, or URL without trailing slash).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Location of the JSON dictionary for `locale`.
    #[must_use]
    pub fn json(&self, locale: LocaleCode) -> String {
        format!("{}/{}.json", self.base, locale.code())
    }

    /// Location of the registering script for `locale`.
    #[must_use]
    pub fn script(&self, locale: LocaleCode) -> String {
        format!("{}/{}.js", self.base, locale.code())
    }
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_BASE)
    }
}
