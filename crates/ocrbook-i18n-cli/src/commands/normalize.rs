use ocrbook_i18n_core::resolve;

use crate::cli::{NormalizeArgs, OutputFormat};
use crate::client::CliResult;
use crate::output::{NormalizedTag, render_normalized};

pub(crate) fn handle_normalize(args: &NormalizeArgs, format: OutputFormat) -> CliResult<()> {
    render_normalized(&normalize_tags(&args.tags), format)
}

pub(crate) fn normalize_tags(tags: &[String]) -> Vec<NormalizedTag<'_>> {
    tags.iter()
        .map(|tag| NormalizedTag {
            input: tag,
            resolution: resolve(Some(tag)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocrbook_i18n_core::{LocaleCode, MatchRule};

    #[test]
    fn each_tag_is_resolved_in_order() {
        let tags = vec!["PT".to_string(), "nn".to_string(), "xx-unknown".to_string()];
        let rows = normalize_tags(&tags);
        let resolved: Vec<_> = rows
            .iter()
            .map(|row| (row.input, row.resolution.locale, row.resolution.rule))
            .collect();
        assert_eq!(
            resolved,
            vec![
                ("PT", LocaleCode::PtPt, MatchRule::Variant),
                ("nn", LocaleCode::Nb, MatchRule::Variant),
                ("xx-unknown", LocaleCode::En, MatchRule::Fallback),
            ]
        );
    }
}
