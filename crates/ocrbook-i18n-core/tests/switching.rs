use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use ocrbook_i18n_core::{
    Dictionary, DictionaryLoader, Direction, DocumentSink, InMemoryRegistry, LocaleCode,
    LocaleStore, LocaleSwitcher, ResourceFetcher, ResourcePaths, ScriptInjector, StrategyError,
    SwitchOutcome, load_with_fallback,
};

/// Records every call in order so tests can assert which strategies ran.
#[derive(Default)]
struct Journal {
    events: RefCell<Vec<String>>,
}

impl Journal {
    fn push(&self, event: impl Into<String>) {
        self.events.borrow_mut().push(event.into());
    }

    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

struct Network {
    journal: Rc<Journal>,
    serves: Vec<(String, String)>,
}

#[async_trait(?Send)]
impl ResourceFetcher for Network {
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
        self.journal.push(format!("fetch {url}"));
        tokio::task::yield_now().await;
        self.serves
            .iter()
            .find(|(served, _)| served == url)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| StrategyError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

struct Scripts {
    journal: Rc<Journal>,
    registry: Rc<InMemoryRegistry>,
    registers: Vec<Dictionary>,
    fails: bool,
}

#[async_trait(?Send)]
impl ScriptInjector for Scripts {
    async fn inject(&self, url: &str) -> Result<(), StrategyError> {
        self.journal.push(format!("script {url}"));
        if self.fails {
            return Err(StrategyError::ScriptFailed {
                url: url.to_string(),
                detail: "blocked".into(),
            });
        }
        for dictionary in &self.registers {
            self.registry.insert(dictionary.clone());
        }
        Ok(())
    }
}

#[derive(Default)]
struct Page {
    lang: RefCell<Option<LocaleCode>>,
    applied: RefCell<Vec<(LocaleCode, Direction)>>,
    saved: RefCell<Option<String>>,
}

impl DocumentSink for Page {
    fn announce(&self, locale: LocaleCode) {
        *self.lang.borrow_mut() = Some(locale);
    }

    fn apply(&self, dictionary: &Dictionary, direction: Direction) {
        self.applied
            .borrow_mut()
            .push((dictionary.locale(), direction));
    }
}

impl LocaleStore for Page {
    fn load(&self) -> Option<String> {
        self.saved.borrow().clone()
    }

    fn save(&self, locale: LocaleCode) {
        *self.saved.borrow_mut() = Some(locale.code().to_string());
    }
}

struct Harness {
    journal: Rc<Journal>,
    registry: Rc<InMemoryRegistry>,
    page: Rc<Page>,
}

impl Harness {
    fn new() -> Self {
        Self {
            journal: Rc::new(Journal::default()),
            registry: Rc::new(InMemoryRegistry::new()),
            page: Rc::new(Page::default()),
        }
    }

    fn loader(&self, serves: &[(LocaleCode, &str)], scripts: Option<Scripts>) -> DictionaryLoader {
        let paths = ResourcePaths::default();
        let network = Network {
            journal: self.journal.clone(),
            serves: serves
                .iter()
                .map(|(locale, body)| (paths.json(*locale), (*body).to_string()))
                .collect(),
        };
        DictionaryLoader::standard(self.registry.clone(), network, scripts, &paths)
    }

    fn scripts(&self, registers: Vec<Dictionary>, fails: bool) -> Scripts {
        Scripts {
            journal: self.journal.clone(),
            registry: self.registry.clone(),
            registers,
            fails,
        }
    }

    fn switcher(&self, loader: DictionaryLoader) -> LocaleSwitcher<Rc<Page>, Rc<Page>> {
        LocaleSwitcher::new(loader, self.page.clone(), self.page.clone())
    }
}

#[tokio::test]
async fn preloaded_dictionary_skips_network_and_script() -> anyhow::Result<()> {
    let harness = Harness::new();
    harness
        .registry
        .insert(Dictionary::new(LocaleCode::De, [("nav.home", "Startseite")]));
    let scripts = harness.scripts(Vec::new(), false);
    let loader = harness.loader(&[(LocaleCode::De, "{}")], Some(scripts));

    let dictionary = loader.load(LocaleCode::De).await?;
    assert_eq!(dictionary.get("nav.home"), Some("Startseite"));
    assert!(harness.journal.events().is_empty());
    Ok(())
}

#[tokio::test]
async fn script_injection_is_attempted_after_fetch_fails() {
    let harness = Harness::new();
    let scripts = harness.scripts(Vec::new(), true);
    let loader = harness.loader(&[], Some(scripts));

    let result = loader.load(LocaleCode::Th).await;
    assert!(result.is_err());
    assert_eq!(
        harness.journal.events(),
        vec!["fetch ./i18n/th.json", "script ./i18n/th.js"]
    );
}

#[tokio::test]
async fn script_registered_dictionary_is_returned() -> anyhow::Result<()> {
    let harness = Harness::new();
    let scripts = harness.scripts(
        vec![
            Dictionary::new(LocaleCode::Vi, [("hero", "Xin chào")]),
            Dictionary::new(LocaleCode::En, [("hero", "Hello")]),
        ],
        false,
    );
    let loader = harness.loader(&[], Some(scripts));

    let dictionary = loader.load(LocaleCode::Vi).await?;
    assert_eq!(dictionary.get("hero"), Some("Xin chào"));
    // The script filled the registry, so later loads take the fast path.
    let english = loader.load(LocaleCode::En).await?;
    assert_eq!(english.get("hero"), Some("Hello"));
    assert_eq!(
        harness.journal.events(),
        vec!["fetch ./i18n/vi.json", "script ./i18n/vi.js"]
    );
    Ok(())
}

#[tokio::test]
async fn failed_french_load_retries_english_exactly_once() {
    let harness = Harness::new();
    let loader = harness.loader(&[], None);

    let result = load_with_fallback(&loader, LocaleCode::Fr).await;
    let Err(err) = result else {
        panic!("nothing is served, the load must fail");
    };
    assert!(matches!(
        err,
        ocrbook_i18n_core::I18nError::DictionaryUnavailable {
            locale: LocaleCode::Fr,
            ..
        }
    ));
    assert_eq!(
        harness.journal.events(),
        vec!["fetch ./i18n/fr.json", "fetch ./i18n/en.json"]
    );
}

#[tokio::test]
async fn switch_announces_before_loading_and_applies_direction() {
    let harness = Harness::new();
    let loader = harness.loader(&[(LocaleCode::Ar, r#"{"meta_title": "مرحبا"}"#)], None);
    let switcher = harness.switcher(loader);

    let outcome = switcher.switch_to(Some("ar-EG")).await;
    assert_eq!(
        outcome,
        SwitchOutcome::Applied {
            locale: LocaleCode::Ar
        }
    );
    assert_eq!(*harness.page.lang.borrow(), Some(LocaleCode::Ar));
    assert_eq!(harness.page.saved.borrow().as_deref(), Some("ar"));
    assert_eq!(
        harness.page.applied.borrow().as_slice(),
        [(LocaleCode::Ar, Direction::Rtl)]
    );
}

#[tokio::test]
async fn english_fallback_keeps_requested_direction_and_lang() {
    let harness = Harness::new();
    let loader = harness.loader(&[(LocaleCode::En, r#"{"a": "b"}"#)], None);
    let switcher = harness.switcher(loader);

    let outcome = switcher.switch_to(Some("he")).await;
    assert_eq!(
        outcome,
        SwitchOutcome::FellBack {
            requested: LocaleCode::He,
            applied: LocaleCode::En
        }
    );
    assert_eq!(*harness.page.lang.borrow(), Some(LocaleCode::He));
    assert_eq!(
        harness.page.applied.borrow().as_slice(),
        [(LocaleCode::En, Direction::Rtl)]
    );
    assert_eq!(switcher.active(), Some(LocaleCode::He));
}

#[tokio::test]
async fn rapid_switches_apply_only_the_latest() {
    let harness = Harness::new();
    let loader = harness.loader(
        &[(LocaleCode::Fr, r#"{"a": "fr"}"#), (LocaleCode::De, r#"{"a": "de"}"#)],
        None,
    );
    let switcher = harness.switcher(loader);

    let (first, second) = tokio::join!(
        switcher.switch_to(Some("fr")),
        switcher.switch_to(Some("de"))
    );
    assert_eq!(
        first,
        SwitchOutcome::Superseded {
            requested: LocaleCode::Fr
        }
    );
    assert_eq!(
        second,
        SwitchOutcome::Applied {
            locale: LocaleCode::De
        }
    );
    assert_eq!(
        harness.page.applied.borrow().as_slice(),
        [(LocaleCode::De, Direction::Ltr)]
    );
    assert_eq!(switcher.active(), Some(LocaleCode::De));
}

#[tokio::test]
async fn start_uses_saved_choice_then_environment() {
    let harness = Harness::new();
    let loader = harness.loader(
        &[(LocaleCode::ZhHant, "{}"), (LocaleCode::Nb, "{}")],
        None,
    );
    let switcher = harness.switcher(loader);

    let outcome = switcher.start(Some("zh-TW")).await;
    assert_eq!(
        outcome,
        SwitchOutcome::Applied {
            locale: LocaleCode::ZhHant
        }
    );

    *harness.page.saved.borrow_mut() = Some("nn".to_string());
    let outcome = switcher.start(Some("zh-TW")).await;
    assert_eq!(
        outcome,
        SwitchOutcome::Applied {
            locale: LocaleCode::Nb
        }
    );
}
