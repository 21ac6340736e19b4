//! Known regional and legacy variants for each canonical locale.
//!
//! # Design
//! - The table is static data; a lookup index is built from it once, on first use.
//! - Building the index rejects a variant listed under two tags, so lookups are unambiguous.
//! - Variants are lowercase and compared against already-lowercased input.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;

/// Canonical tag paired with the variants that resolve to it.
pub type VariantEntry = (LocaleCode, &'static [&'static str]);

/// Built-in variant table.
pub const VARIANTS: &[VariantEntry] = &[
    (LocaleCode::Fr, &["fr-fr", "fr-be", "fr-ch"]),
    (LocaleCode::FrCa, &["fr-ca"]),
    (LocaleCode::PtBr, &["pt-br"]),
    (LocaleCode::PtPt, &["pt-pt", "pt"]),
    (LocaleCode::EsMx, &["es-mx"]),
    (
        LocaleCode::Es,
        &["es-es", "es-ar", "es-co", "es-cl", "es-pe", "es-ve"],
    ),
    (
        LocaleCode::En,
        &["en-us", "en-gb", "en-au", "en-ca", "en-nz", "en-ie", "en-za"],
    ),
    (LocaleCode::De, &["de-de", "de-at", "de-ch"]),
    (LocaleCode::It, &["it-it", "it-ch"]),
    (LocaleCode::Nl, &["nl-nl", "nl-be"]),
    (LocaleCode::Nb, &["no", "nn", "nb-no"]),
    (LocaleCode::Sv, &["sv-se"]),
    (LocaleCode::Da, &["da-dk"]),
    (LocaleCode::Fi, &["fi-fi"]),
    (LocaleCode::Pl, &["pl-pl"]),
    (LocaleCode::Cs, &["cs-cz"]),
    (LocaleCode::Sk, &["sk-sk"]),
    (LocaleCode::Hu, &["hu-hu"]),
    (LocaleCode::Ro, &["ro-ro"]),
    (LocaleCode::Hr, &["hr-hr"]),
    (LocaleCode::El, &["el-gr"]),
    (LocaleCode::Tr, &["tr-tr"]),
    (LocaleCode::Ru, &["ru-ru"]),
    (LocaleCode::Uk, &["uk-ua"]),
    (LocaleCode::Ar, &["ar-sa", "ar-eg", "ar-ae", "ar-ma"]),
    (LocaleCode::He, &["he-il", "iw"]),
    (LocaleCode::Hi, &["hi-in"]),
    (LocaleCode::Th, &["th-th"]),
    (LocaleCode::Vi, &["vi-vn"]),
    (LocaleCode::Id, &["id-id"]),
    (LocaleCode::Ms, &["ms-my"]),
    (LocaleCode::Ja, &["ja-jp"]),
    (LocaleCode::Ko, &["ko-kr"]),
    (LocaleCode::Ca, &["ca-es"]),
];

/// Reverse index from variant string to canonical tag.
#[derive(Debug, Clone)]
pub struct VariantTable {
    index: HashMap<&'static str, LocaleCode>,
}

impl VariantTable {
    /// Build an index from `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::DuplicateVariant`] when a variant appears under two different tags.
    pub fn build(entries: &[VariantEntry]) -> I18nResult<Self> {
        let mut index = HashMap::new();
        for (target, variants) in entries {
            for variant in *variants {
                if let Some(first) = index.insert(*variant, *target) {
                    if first != *target {
                        return Err(I18nError::DuplicateVariant {
                            variant: *variant,
                            first,
                            second: *target,
                        });
                    }
                }
            }
        }
        Ok(Self { index })
    }

    /// Canonical tag for an exact, lowercase variant.
    #[must_use]
    pub fn resolve(&self, lowered: &str) -> Option<LocaleCode> {
        self.index.get(lowered).copied()
    }

    /// Number of indexed variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

static BUILTIN: LazyLock<VariantTable> = LazyLock::new(|| match VariantTable::build(VARIANTS) {
    Ok(table) => table,
    Err(err) => panic!("built-in locale variant table is ambiguous: {err:?}"),
});

/// The validated built-in table.
#[must_use]
pub fn builtin() -> &'static VariantTable {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_disjoint() {
        let table = VariantTable::build(VARIANTS);
        assert!(table.is_ok());
        let expected: usize = VARIANTS.iter().map(|(_, variants)| variants.len()).sum();
        assert_eq!(builtin().len(), expected);
    }

    #[test]
    fn builtin_variants_are_lowercase() {
        for (_, variants) in VARIANTS {
            for variant in *variants {
                assert_eq!(*variant, variant.to_lowercase());
            }
        }
    }

    #[test]
    fn duplicate_variant_is_rejected() {
        let entries: &[VariantEntry] = &[
            (LocaleCode::PtPt, &["pt-pt", "pt"]),
            (LocaleCode::PtBr, &["pt-br", "pt"]),
        ];
        let err = VariantTable::build(entries);
        assert!(matches!(
            err,
            Err(I18nError::DuplicateVariant {
                variant: "pt",
                first: LocaleCode::PtPt,
                second: LocaleCode::PtBr,
            })
        ));
    }

    #[test]
    fn repeated_variant_under_same_tag_is_tolerated() {
        let entries: &[VariantEntry] = &[(LocaleCode::Nb, &["no", "no"])];
        let table = VariantTable::build(entries);
        assert!(table.is_ok_and(|t| t.resolve("no") == Some(LocaleCode::Nb)));
    }

    #[test]
    fn resolve_matches_exact_variants() {
        let table = builtin();
        assert_eq!(table.resolve("iw"), Some(LocaleCode::He));
        assert_eq!(table.resolve("nb-no"), Some(LocaleCode::Nb));
        assert_eq!(table.resolve("pt"), Some(LocaleCode::PtPt));
        assert_eq!(table.resolve("fr-xx"), None);
        assert_eq!(table.resolve("IW"), None);
    }
}
