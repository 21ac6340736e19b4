//! Dictionary loading through an ordered list of acquisition strategies.
//!
//! # Design
//! - Each strategy reports success or a typed failure; the loader walks the list and stops at the first success.
//! - Failures are collected in attempt order and returned together when every strategy fails.
//! - Network and script capabilities are traits so embeddings without a document can omit or fake them.
//! - Traits are `?Send`: browser futures hold `JsValue`s and run on a single-threaded executor.

use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::ResourcePaths;
use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult, StrategyError, StrategyFailure};
use crate::locale::LocaleCode;
use crate::registry::PreloadedRegistry;

/// One way of obtaining a dictionary.
#[async_trait(?Send)]
pub trait AcquisitionStrategy {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempt to obtain the dictionary for `locale`.
    async fn acquire(&self, locale: LocaleCode) -> Result<Dictionary, StrategyError>;
}

/// Retrieves text resources with caching disabled.
#[async_trait(?Send)]
pub trait ResourceFetcher {
    /// Body of the resource at `url`; non-success statuses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError>;
}

/// Loads an executable resource that registers dictionaries as a side effect.
#[async_trait(?Send)]
pub trait ScriptInjector {
    /// Load and run the script at `url`, resolving once it has executed.
    async fn inject(&self, url: &str) -> Result<(), StrategyError>;
}

#[async_trait(?Send)]
impl<T: ResourceFetcher + ?Sized> ResourceFetcher for Rc<T> {
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
        (**self).fetch_text(url).await
    }
}

#[async_trait(?Send)]
impl<T: ScriptInjector + ?Sized> ScriptInjector for Rc<T> {
    async fn inject(&self, url: &str) -> Result<(), StrategyError> {
        (**self).inject(url).await
    }
}

/// Reads the preloaded registry.
#[derive(Debug)]
pub struct PreloadedStrategy<R> {
    registry: R,
}

impl<R> PreloadedStrategy<R> {
    /// Strategy over `registry`.
    pub const fn new(registry: R) -> Self {
        Self { registry }
    }
}

#[async_trait(?Send)]
impl<R: PreloadedRegistry> AcquisitionStrategy for PreloadedStrategy<R> {
    fn name(&self) -> &'static str {
        "preloaded"
    }

    async fn acquire(&self, locale: LocaleCode) -> Result<Dictionary, StrategyError> {
        self.registry
            .lookup(locale)
            .ok_or(StrategyError::NotPreloaded)
    }
}

/// Fetches `{base}/{tag}.json`.
#[derive(Debug)]
pub struct FetchStrategy<F> {
    fetcher: F,
    paths: ResourcePaths,
}

impl<F> FetchStrategy<F> {
    /// Strategy fetching JSON resources under `paths`.
    pub const fn new(fetcher: F, paths: ResourcePaths) -> Self {
        Self { fetcher, paths }
    }
}

#[async_trait(?Send)]
impl<F: ResourceFetcher> AcquisitionStrategy for FetchStrategy<F> {
    fn name(&self) -> &'static str {
        "fetch"
    }

    async fn acquire(&self, locale: LocaleCode) -> Result<Dictionary, StrategyError> {
        let url = self.paths.json(locale);
        let body = self.fetcher.fetch_text(&url).await?;
        Dictionary::from_json(locale, &body).map_err(|err| StrategyError::Decode {
            url,
            source: Box::new(err),
        })
    }
}

/// Injects `{base}/{tag}.js`, then re-reads the registry it populates.
#[derive(Debug)]
pub struct ScriptStrategy<S, R> {
    injector: S,
    registry: R,
    paths: ResourcePaths,
}

impl<S, R> ScriptStrategy<S, R> {
    /// Strategy injecting scripts under `paths` that write into `registry`.
    pub const fn new(injector: S, registry: R, paths: ResourcePaths) -> Self {
        Self {
            injector,
            registry,
            paths,
        }
    }
}

#[async_trait(?Send)]
impl<S: ScriptInjector, R: PreloadedRegistry> AcquisitionStrategy for ScriptStrategy<S, R> {
    fn name(&self) -> &'static str {
        "script"
    }

    async fn acquire(&self, locale: LocaleCode) -> Result<Dictionary, StrategyError> {
        let url = self.paths.script(locale);
        self.injector.inject(&url).await?;
        self.registry
            .lookup(locale)
            .ok_or(StrategyError::ScriptMissingEntry { url })
    }
}

/// Ordered list of acquisition strategies.
#[derive(Default)]
pub struct DictionaryLoader {
    strategies: Vec<Box<dyn AcquisitionStrategy>>,
}

impl DictionaryLoader {
    /// Loader with no strategies; every load fails until one is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard order: preloaded registry, network fetch, then script injection when available.
    pub fn standard<R, F, S>(
        registry: R,
        fetcher: F,
        injector: Option<S>,
        paths: &ResourcePaths,
    ) -> Self
    where
        R: PreloadedRegistry + Clone + 'static,
        F: ResourceFetcher + 'static,
        S: ScriptInjector + 'static,
    {
        let loader = Self::new()
            .with_strategy(PreloadedStrategy::new(registry.clone()))
            .with_strategy(FetchStrategy::new(fetcher, paths.clone()));
        match injector {
            Some(injector) => {
                loader.with_strategy(ScriptStrategy::new(injector, registry, paths.clone()))
            }
            None => loader,
        }
    }

    /// Append `strategy` after the existing ones.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl AcquisitionStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Strategy names in attempt order.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Obtain the dictionary for `locale` from the first strategy that succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::DictionaryUnavailable`] listing every strategy failure when none succeeds.
    pub async fn load(&self, locale: LocaleCode) -> I18nResult<Dictionary> {
        let mut failures = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            match strategy.acquire(locale).await {
                Ok(dictionary) => {
                    info!(
                        locale = %locale,
                        strategy = strategy.name(),
                        entries = dictionary.len(),
                        "dictionary loaded"
                    );
                    return Ok(dictionary);
                }
                Err(error) => {
                    debug!(locale = %locale, strategy = strategy.name(), error = ?error, "acquisition strategy failed");
                    failures.push(StrategyFailure {
                        strategy: strategy.name(),
                        error,
                    });
                }
            }
        }
        Err(I18nError::DictionaryUnavailable { locale, failures })
    }
}

impl std::fmt::Debug for DictionaryLoader {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DictionaryLoader")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CountingFetcher {
        calls: Cell<usize>,
        urls: RefCell<Vec<String>>,
        body: Option<String>,
    }

    #[async_trait(?Send)]
    impl ResourceFetcher for CountingFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
            self.calls.set(self.calls.get() + 1);
            self.urls.borrow_mut().push(url.to_string());
            self.body.clone().ok_or_else(|| StrategyError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    struct RegisteringInjector {
        calls: Cell<usize>,
        registry: Rc<InMemoryRegistry>,
        registers: Option<Dictionary>,
    }

    #[async_trait(?Send)]
    impl ScriptInjector for RegisteringInjector {
        async fn inject(&self, _url: &str) -> Result<(), StrategyError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(dictionary) = &self.registers {
                self.registry.insert(dictionary.clone());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn preloaded_entry_short_circuits() -> anyhow::Result<()> {
        let registry = Rc::new(InMemoryRegistry::new());
        registry.insert(Dictionary::new(LocaleCode::De, [("k", "v")]));
        let fetcher = Rc::new(CountingFetcher::default());
        let injector = Rc::new(RegisteringInjector {
            calls: Cell::new(0),
            registry: registry.clone(),
            registers: None,
        });
        let loader = DictionaryLoader::standard(
            registry,
            fetcher.clone(),
            Some(injector.clone()),
            &ResourcePaths::default(),
        );

        let dictionary = loader.load(LocaleCode::De).await?;
        assert_eq!(dictionary.get("k"), Some("v"));
        assert_eq!(fetcher.calls.get(), 0);
        assert_eq!(injector.calls.get(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_uses_per_locale_json_path() -> anyhow::Result<()> {
        let fetcher = Rc::new(CountingFetcher {
            body: Some(r#"{"title": "Bonjour"}"#.to_string()),
            ..CountingFetcher::default()
        });
        let loader = DictionaryLoader::new()
            .with_strategy(FetchStrategy::new(fetcher.clone(), ResourcePaths::default()));

        let dictionary = loader.load(LocaleCode::FrCa).await?;
        assert_eq!(dictionary.locale(), LocaleCode::FrCa);
        assert_eq!(fetcher.urls.borrow().as_slice(), ["./i18n/fr-CA.json"]);
        Ok(())
    }

    #[tokio::test]
    async fn script_runs_after_failed_fetch_and_rechecks_registry() -> anyhow::Result<()> {
        let registry = Rc::new(InMemoryRegistry::new());
        let fetcher = Rc::new(CountingFetcher::default());
        let injector = Rc::new(RegisteringInjector {
            calls: Cell::new(0),
            registry: registry.clone(),
            registers: Some(Dictionary::new(LocaleCode::Ja, [("k", "こんにちは")])),
        });
        let loader = DictionaryLoader::standard(
            registry,
            fetcher.clone(),
            Some(injector.clone()),
            &ResourcePaths::default(),
        );

        let dictionary = loader.load(LocaleCode::Ja).await?;
        assert_eq!(dictionary.get("k"), Some("こんにちは"));
        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(injector.calls.get(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_load_reports_each_failure_in_order() {
        let registry = Rc::new(InMemoryRegistry::new());
        let injector = RegisteringInjector {
            calls: Cell::new(0),
            registry: registry.clone(),
            registers: None,
        };
        let loader = DictionaryLoader::standard(
            registry,
            CountingFetcher::default(),
            Some(injector),
            &ResourcePaths::default(),
        );

        let Err(err) = loader.load(LocaleCode::Ko).await else {
            panic!("load should fail without any source");
        };
        let strategies: Vec<_> = err.failures().iter().map(|f| f.strategy).collect();
        assert_eq!(strategies, vec!["preloaded", "fetch", "script"]);
        assert!(matches!(
            err.failures()[2].error,
            StrategyError::ScriptMissingEntry { ref url } if url == "./i18n/ko.js"
        ));
    }

    #[tokio::test]
    async fn undecodable_body_fails_fetch_strategy() {
        let fetcher = CountingFetcher {
            body: Some("<html>not json</html>".to_string()),
            ..CountingFetcher::default()
        };
        let loader = DictionaryLoader::new()
            .with_strategy(FetchStrategy::new(fetcher, ResourcePaths::default()));
        let result = loader.load(LocaleCode::Ru).await;
        assert!(matches!(
            result.as_ref().map_err(|err| &err.failures()[0].error),
            Err(StrategyError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn loader_without_script_capability() {
        let loader = DictionaryLoader::standard::<_, _, RegisteringInjector>(
            Rc::new(InMemoryRegistry::new()),
            CountingFetcher::default(),
            None,
            &ResourcePaths::default(),
        );
        assert_eq!(loader.strategy_names(), vec!["preloaded", "fetch"]);
        assert!(loader.load(LocaleCode::En).await.is_err());
        assert_eq!(
            format!("{loader:?}"),
            r#"DictionaryLoader { strategies: ["preloaded", "fetch"] }"#
        );
    }
}
