//! Output renderers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use ocrbook_i18n_core::{LocaleCode, Resolution, display_name};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};
use crate::commands::load::LoadReport;

/// One row of `normalize` output.
#[derive(Debug, Serialize)]
pub(crate) struct NormalizedTag<'a> {
    pub(crate) input: &'a str,
    #[serde(flatten)]
    pub(crate) resolution: Resolution,
}

#[derive(Serialize)]
struct LocaleRow {
    code: LocaleCode,
    name: &'static str,
    direction: &'static str,
}

pub(crate) fn render_normalized(rows: &[NormalizedTag<'_>], format: OutputFormat) -> CliResult<()> {
    println!("{}", format_normalized(rows, format)?);
    Ok(())
}

pub(crate) fn render_locales(locales: &[LocaleCode], format: OutputFormat) -> CliResult<()> {
    println!("{}", format_locales(locales, format)?);
    Ok(())
}

pub(crate) fn render_load_report(report: &LoadReport, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_load_report(report, format)?);
    Ok(())
}

pub(crate) fn format_normalized(
    rows: &[NormalizedTag<'_>],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Table => {
            let mut text = format!("{:<24} {:<8} RULE", "INPUT", "LOCALE");
            for row in rows {
                let input = if row.input.is_empty() {
                    "<empty>"
                } else {
                    row.input
                };
                let _ = write!(
                    text,
                    "\n{:<24} {:<8} {}",
                    input,
                    row.resolution.locale.code(),
                    row.resolution.rule.as_str()
                );
            }
            Ok(text)
        }
    }
}

pub(crate) fn format_locales(locales: &[LocaleCode], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<LocaleRow> = locales
                .iter()
                .map(|locale| LocaleRow {
                    code: *locale,
                    name: display_name(*locale),
                    direction: locale.direction().as_attr(),
                })
                .collect();
            to_json(&rows)
        }
        OutputFormat::Table => {
            let mut text = format!("{:<8} {:<4} NAME", "CODE", "DIR");
            for locale in locales {
                let _ = write!(
                    text,
                    "\n{:<8} {:<4} {}",
                    locale.code(),
                    locale.direction().as_attr(),
                    display_name(*locale)
                );
            }
            Ok(text)
        }
    }
}

pub(crate) fn format_load_report(report: &LoadReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let dictionary = &report.dictionary;
            let mut text = format!("requested: {}", report.requested);
            let _ = write!(text, "\nloaded: {}", dictionary.locale());
            if report.fell_back {
                text.push_str(" (fallback)");
            }
            if let Some(title) = dictionary.meta_title() {
                let _ = write!(text, "\ntitle: {title}");
            }
            let _ = write!(text, "\nentries: {}", dictionary.len());
            for (key, value) in dictionary.iter() {
                let _ = write!(text, "\n  {key} = {value}");
            }
            Ok(text)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}
