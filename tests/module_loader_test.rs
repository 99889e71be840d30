use async_trait::async_trait;
use httpmock::prelude::*;
use scout::core::page::Page;
use scout::domain::ports::FragmentSource;
use scout::{
    AppConfig, Environment, EventOutcome, HttpFragments, LoadOutcome, ModuleName, ScoutApp,
    ScoutError, UiEvent,
};
use std::sync::{Arc, Mutex};

/// Records whether the page showed a loader while each fragment was in flight.
struct RecordingFragments {
    page: Page,
    seen_loading: Arc<Mutex<Vec<bool>>>,
    fail: bool,
}

#[async_trait]
impl FragmentSource for RecordingFragments {
    async fn fetch_fragment(&self, file: &str) -> scout::Result<String> {
        self.seen_loading.lock().unwrap().push(self.page.is_loading());
        if self.fail {
            return Err(ScoutError::FragmentError {
                fragment: file.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok("<form class=\"job-search\"></form>".to_string())
    }
}

#[tokio::test]
async fn test_start_fetches_opportunities_once() {
    let server = MockServer::start();
    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/opportunities.html");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(include_str!("../fragments/opportunities.html"));
    });

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::new(config, HttpFragments::new(&server.base_url()).unwrap());

    assert_eq!(app.start().await, LoadOutcome::Loaded);
    fragment_mock.assert_hits(1);
    assert!(app.page().content().contains("job-search"));
}

#[tokio::test]
async fn test_failed_fragment_fetch_shows_error_with_retry() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.html");
        then.status(500);
    });

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::new(config, HttpFragments::new(&server.base_url()).unwrap());

    assert_eq!(app.load_module(ModuleName::Skills).await, LoadOutcome::Failed);

    let snapshot = app.page().snapshot();
    assert!(snapshot.contains("class=\"error-message\""));
    assert!(snapshot.contains("Error loading skills data"));
    assert!(snapshot.contains("<button data-retry=\"skills\">Retry</button>"));
    // the page stays usable
    assert!(!app.page().is_loading());
}

#[tokio::test]
async fn test_retry_reloads_module() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/military.html");
        then.status(503);
    });

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::new(config, HttpFragments::new(&server.base_url()).unwrap());
    assert_eq!(app.load_module(ModuleName::Military).await, LoadOutcome::Failed);
    assert_eq!(app.page().errors()[0].retry, ModuleName::Military);

    failing.delete();
    server.mock(|when, then| {
        when.method(GET).path("/military.html");
        then.status(200).body(include_str!("../fragments/military.html"));
    });

    let outcome = app.dispatch(UiEvent::RetryClicked(ModuleName::Military)).await;
    assert_eq!(outcome, EventOutcome::Handled);
    assert!(app.page().errors().is_empty());
    assert_eq!(app.page().current_module(), Some(ModuleName::Military));
}

#[tokio::test]
async fn test_loading_indicator_spans_fetch() {
    let page = Page::new();
    let seen_loading = Arc::new(Mutex::new(Vec::new()));
    let fragments = RecordingFragments {
        page: page.clone(),
        seen_loading: seen_loading.clone(),
        fail: false,
    };

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::with_page(config, fragments, page);

    assert!(!app.page().is_loading());
    app.load_module(ModuleName::Opportunities).await;

    assert_eq!(*seen_loading.lock().unwrap(), vec![true]);
    assert!(!app.page().is_loading());
}

#[tokio::test]
async fn test_loading_indicator_removed_after_rejection() {
    let page = Page::new();
    let seen_loading = Arc::new(Mutex::new(Vec::new()));
    let fragments = RecordingFragments {
        page: page.clone(),
        seen_loading: seen_loading.clone(),
        fail: true,
    };

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::with_page(config, fragments, page);

    assert_eq!(app.load_module(ModuleName::Keyword).await, LoadOutcome::Failed);
    assert_eq!(*seen_loading.lock().unwrap(), vec![true]);
    assert!(!app.page().is_loading());
    assert!(!app.page().snapshot().contains("class=\"loader\""));
}

#[tokio::test]
async fn test_nav_to_unknown_name_is_silent() {
    let server = MockServer::start();
    let any_fetch = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("<div></div>");
    });

    let config = AppConfig::default().resolve(Environment::Development);
    let app = ScoutApp::new(config, HttpFragments::new(&server.base_url()).unwrap());

    assert_eq!(app.load_module_by_name("settings").await, LoadOutcome::Unknown);
    any_fetch.assert_hits(0);
    assert!(app.page().errors().is_empty());
}
