use std::path::Path;

use anyhow::anyhow;
use ocrbook_i18n_core::{
    Dictionary, DictionaryLoader, FetchStrategy, I18nConfig, I18nError, InMemoryRegistry,
    LocaleCode, PreloadedStrategy, load_with_fallback, normalize,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{LoadArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult, FileFetcher, HttpFetcher};
use crate::output::render_load_report;

/// Result of a `load` command.
#[derive(Debug, Serialize)]
pub(crate) struct LoadReport {
    pub(crate) requested: LocaleCode,
    pub(crate) fell_back: bool,
    pub(crate) dictionary: Dictionary,
}

pub(crate) async fn handle_load(
    ctx: &AppContext,
    args: LoadArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let report = load_report(ctx, args).await?;
    render_load_report(&report, format)
}

pub(crate) async fn load_report(ctx: &AppContext, args: LoadArgs) -> CliResult<LoadReport> {
    let requested = normalize(Some(&args.tag));
    let loader = build_loader(ctx, &args)?;
    info!(locale = %requested, strategies = ?loader.strategy_names(), "loading dictionary");

    let loaded = if args.no_fallback {
        loader
            .load(requested)
            .await
            .map(|dictionary| (dictionary, false))
    } else {
        load_with_fallback(&loader, requested)
            .await
            .map(|loaded| {
                let fell_back = loaded.fell_back();
                (loaded.dictionary, fell_back)
            })
    };

    let (dictionary, fell_back) = loaded.map_err(unavailable)?;
    Ok(LoadReport {
        requested,
        fell_back,
        dictionary,
    })
}

fn build_loader(ctx: &AppContext, args: &LoadArgs) -> CliResult<DictionaryLoader> {
    let registry = match &args.preload {
        Some(path) => read_bundle(path)?,
        None => InMemoryRegistry::new(),
    };
    let loader = DictionaryLoader::new().with_strategy(PreloadedStrategy::new(registry));

    match (&args.base_url, &args.dir) {
        (Some(url), _) => {
            let config = config_for(url.as_str().trim_end_matches('/'))?;
            Ok(loader.with_strategy(FetchStrategy::new(
                HttpFetcher::new(ctx.client.clone()),
                config.resource_paths(),
            )))
        }
        (None, Some(dir)) => {
            let base = dir.display().to_string();
            let config = config_for(base.trim_end_matches('/'))?;
            Ok(loader.with_strategy(FetchStrategy::new(FileFetcher, config.resource_paths())))
        }
        (None, None) if args.preload.is_some() => Ok(loader),
        (None, None) => Err(CliError::validation(
            "a dictionary source is required (pass --base-url, --dir, or --preload)",
        )),
    }
}

fn config_for(base: &str) -> CliResult<I18nConfig> {
    let config = I18nConfig {
        resource_base: base.to_string(),
        ..I18nConfig::default()
    };
    config
        .validate()
        .map_err(|err| CliError::validation(format!("invalid resource location '{base}': {err}")))?;
    Ok(config)
}

fn read_bundle(path: &Path) -> CliResult<InMemoryRegistry> {
    let payload = std::fs::read_to_string(path)
        .map_err(|err| CliError::failure(anyhow!("failed to read {}: {err}", path.display())))?;
    InMemoryRegistry::from_bundle_json(&payload).map_err(|err| {
        CliError::validation(format!("preload bundle {} is invalid: {err}", path.display()))
    })
}

fn unavailable(err: I18nError) -> CliError {
    let attempts: Vec<String> = err.failures().iter().map(|f| f.summary()).collect();
    if attempts.is_empty() {
        CliError::failure(anyhow!(err))
    } else {
        CliError::failure(anyhow!("{err}: {}", attempts.join("; ")))
    }
}
