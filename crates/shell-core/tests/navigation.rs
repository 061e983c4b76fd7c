//! End-to-end navigation against the in-memory browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shell_core::{
    Browser, FetchError, FragmentSource, LoadError, LoadOutcome, MemoryBrowser, MountError,
    MountTarget, NativeEvent, NavigationRequest, RouteEvent, RouteEvents, Router, RouterMode,
    is_view_name, view_from_hash, view_from_path,
};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Default)]
struct StaticSource {
    fragments: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl StaticSource {
    fn with(mut self, path: &str, html: &str) -> Self {
        self.fragments.insert(path.to_string(), html.to_string());
        self
    }
}

impl FragmentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(path.to_string());
        self.fragments
            .get(path)
            .cloned()
            .ok_or(FetchError::Http(404))
    }
}

#[derive(Default)]
struct Container {
    mounted: RefCell<Vec<String>>,
    errors: RefCell<Vec<LoadError>>,
}

impl MountTarget for Container {
    fn mount(&self, view: &str, _html: &str) -> Result<(), MountError> {
        self.mounted.borrow_mut().push(view.to_string());
        Ok(())
    }

    fn render_error(&self, error: &LoadError) {
        self.errors.borrow_mut().push(error.clone());
    }
}

type TestRouter = Router<MemoryBrowser, Rc<StaticSource>, Rc<Container>>;

struct Shell {
    router: TestRouter,
    events: RouteEvents,
    source: Rc<StaticSource>,
    container: Rc<Container>,
}

impl Shell {
    fn boot(browser: MemoryBrowser, source: StaticSource) -> Self {
        let source = Rc::new(source);
        let container = Rc::new(Container::default());
        let (router, events) = Router::new(
            browser,
            Rc::clone(&source),
            Rc::clone(&container),
            "workflow",
        );
        router.start();
        Self {
            router,
            events,
            source,
            container,
        }
    }

    /// Forward native browser events and dispatch everything queued.
    async fn settle(&mut self) -> Vec<LoadOutcome> {
        for event in self.router.browser().take_events() {
            let event = match event {
                NativeEvent::HashChange => RouteEvent::HashChange,
                NativeEvent::PopState => RouteEvent::PopState,
            };
            self.router.events().send(event);
        }
        let mut outcomes = Vec::new();
        while let Some(event) = self.events.try_next() {
            outcomes.push(self.router.dispatch(event).run().await);
        }
        outcomes
    }

    fn mounted(&self) -> Vec<String> {
        self.container.mounted.borrow().clone()
    }
}

fn pages() -> StaticSource {
    ["workflow", "templates", "users", "content-page", "用户"]
        .into_iter()
        .fold(StaticSource::default(), |source, view| {
            source
                .with(&format!("pages/{view}.html"), "<section></section>")
                .with(&format!("/admin/pages/{view}.html"), "<section></section>")
                .with(&format!("/app/pages/{view}.html"), "<section></section>")
        })
}

fn history(href: &str) -> MemoryBrowser {
    MemoryBrowser::new(href).with_attribute("data-router", "history")
}

// =============================================================================
// Startup
// =============================================================================

#[tokio::test]
async fn test_hash_initial_load() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#workflow"), pages());

    let outcomes = shell.settle().await;

    assert_eq!(shell.router.mode(), RouterMode::Hash);
    assert_eq!(outcomes, vec![LoadOutcome::Mounted("workflow".to_string())]);
    assert_eq!(shell.router.current_view(), "workflow");
    assert_eq!(*shell.source.requested.borrow(), vec!["pages/workflow.html"]);
}

#[tokio::test]
async fn test_hash_initial_load_defaults() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/index.html"), pages());
    shell.settle().await;
    assert_eq!(shell.mounted(), vec!["workflow"]);
}

#[tokio::test]
async fn test_history_explicit_base() {
    let browser = history("http://localhost/admin/users").with_attribute("data-base", "/admin/");
    let mut shell = Shell::boot(browser, pages());

    shell.settle().await;

    assert_eq!(shell.router.config().base_url, "/admin/");
    assert_eq!(shell.router.current_view(), "users");
    assert_eq!(
        *shell.source.requested.borrow(),
        vec!["/admin/pages/users.html"]
    );
}

#[tokio::test]
async fn test_history_base_from_document() {
    let mut shell = Shell::boot(history("http://localhost/app/index.html"), pages());

    shell.settle().await;

    assert_eq!(shell.router.config().base_url, "/app/");
    assert_eq!(shell.mounted(), vec!["workflow"]);
}

#[tokio::test]
async fn test_query_parameter_selects_history() {
    let mut shell = Shell::boot(
        MemoryBrowser::new("http://localhost/app/users?router=history"),
        pages(),
    );
    shell.settle().await;
    assert_eq!(shell.router.mode(), RouterMode::History);
    assert_eq!(shell.mounted(), vec!["users"]);
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test]
async fn test_hash_navigate_same_view_twice_reloads() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#workflow"), pages());
    shell.settle().await;

    shell.router.navigate("templates");
    shell.settle().await;
    shell.router.navigate("templates");
    shell.settle().await;

    assert_eq!(shell.mounted(), vec!["workflow", "templates", "templates"]);
    assert_eq!(shell.router.browser().hash(), "#templates");
}

#[tokio::test]
async fn test_hash_navigate_dispatches_once_per_change() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#workflow"), pages());
    shell.settle().await;

    shell.router.navigate("users");
    let outcomes = shell.settle().await;

    assert_eq!(outcomes, vec![LoadOutcome::Mounted("users".to_string())]);
}

#[tokio::test]
async fn test_hash_navigate_non_ascii_view() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#workflow"), pages());
    shell.settle().await;

    shell.router.navigate("用户");
    let first = shell.settle().await;
    shell.router.navigate("用户");
    let second = shell.settle().await;

    assert_eq!(first, vec![LoadOutcome::Mounted("用户".to_string())]);
    assert_eq!(second, vec![LoadOutcome::Mounted("用户".to_string())]);
    assert_eq!(shell.router.browser().hash(), "#%E7%94%A8%E6%88%B7");
    assert_eq!(shell.router.current_view(), "用户");
    assert!(shell
        .source
        .requested
        .borrow()
        .iter()
        .all(|path| !path.contains('%')));
}

#[tokio::test]
async fn test_hash_typed_non_ascii_view() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#用户"), pages());
    shell.settle().await;

    shell.router.navigate("用户");
    let outcomes = shell.settle().await;

    assert_eq!(outcomes, vec![LoadOutcome::Mounted("用户".to_string())]);
    assert_eq!(shell.mounted(), vec!["用户", "用户"]);
    assert_eq!(shell.router.browser().history_len(), 1);
}

#[tokio::test]
async fn test_history_non_ascii_view() {
    let mut shell = Shell::boot(history("http://localhost/app/index.html"), pages());
    shell.settle().await;

    shell.router.navigate("用户");
    shell.settle().await;

    assert_eq!(shell.router.browser().pathname(), "/app/%E7%94%A8%E6%88%B7");
    assert_eq!(shell.router.current_view(), "用户");
    assert_eq!(
        shell.source.requested.borrow().last().map(String::as_str),
        Some("/app/pages/用户.html")
    );
}

#[tokio::test]
async fn test_history_navigate_and_back() {
    let mut shell = Shell::boot(history("http://localhost/app/index.html"), pages());
    shell.settle().await;

    shell.router.navigate("users");
    shell.settle().await;
    shell.router.navigate("templates");
    shell.settle().await;
    assert_eq!(shell.router.browser().pathname(), "/app/templates");

    shell.router.browser().back();
    shell.settle().await;

    assert_eq!(shell.router.current_view(), "users");
    assert_eq!(shell.mounted(), vec!["workflow", "users", "templates", "users"]);
}

#[tokio::test]
async fn test_history_replace_keeps_history_length() {
    let mut shell = Shell::boot(history("http://localhost/app/index.html"), pages());
    shell.settle().await;

    shell.router.navigate(NavigationRequest::replace("users"));
    shell.settle().await;

    assert_eq!(shell.router.browser().history_len(), 1);
    assert_eq!(shell.router.current_view(), "users");
}

#[tokio::test]
async fn test_history_converts_legacy_hash_links() {
    let browser = history("http://localhost/admin/users").with_attribute("data-base", "/admin/");
    let mut shell = Shell::boot(browser, pages());
    shell.settle().await;

    shell.router.browser().visit("#templates");
    shell.settle().await;

    assert_eq!(shell.router.current_view(), "templates");
    assert_eq!(shell.router.browser().pathname(), "/admin/templates");
    assert_eq!(shell.router.browser().hash(), "");
}

#[tokio::test]
async fn test_history_legacy_hash_on_startup() {
    let mut shell = Shell::boot(history("http://localhost/app/index.html#users"), pages());
    shell.settle().await;

    assert_eq!(shell.mounted(), vec!["users"]);
    assert_eq!(shell.router.browser().href(), "http://localhost/app/users");
}

#[tokio::test]
async fn test_navigate_matches_direct_navigation() {
    for view in ["workflow", "templates", "users", "content-page"] {
        // Hash mode: direct navigation is following the link in place.
        let mut navigated = Shell::boot(MemoryBrowser::new("http://localhost/"), pages());
        navigated.settle().await;
        navigated.router.navigate(view);
        navigated.settle().await;

        let mut direct = Shell::boot(MemoryBrowser::new("http://localhost/"), pages());
        direct.settle().await;
        let href = direct.router.href_for(view);
        direct.router.browser().visit(&href);
        direct.settle().await;

        assert_eq!(navigated.router.current_view(), direct.router.current_view());
        assert_eq!(navigated.router.current_view(), view);

        // History mode: direct navigation is a fresh document load.
        let mut navigated = Shell::boot(history("http://localhost/app/index.html"), pages());
        navigated.settle().await;
        navigated.router.navigate(view);
        navigated.settle().await;

        let href = navigated.router.href_for(view);
        let mut direct = Shell::boot(history(&format!("http://localhost{href}")), pages());
        direct.settle().await;

        assert_eq!(navigated.router.current_view(), direct.router.current_view());
        assert_eq!(direct.router.config().base_url, "/app/");
    }
}

#[test]
fn test_href_round_trips() {
    let views = [
        "workflow",
        "users",
        "content-page",
        "a.b",
        "x_1",
        "%E4%BD%A0",
        "用户",
        "my view",
    ];
    for view in views {
        let (router, _events) = Router::new(
            MemoryBrowser::new("http://localhost/"),
            Rc::new(StaticSource::default()),
            Rc::new(Container::default()),
            "workflow",
        );
        assert_eq!(view_from_hash(&router.href_for(view)), view);

        let (router, _events) = Router::new(
            history("http://localhost/admin/index.html"),
            Rc::new(StaticSource::default()),
            Rc::new(Container::default()),
            "workflow",
        );
        let base = router.config().base_url.clone();
        assert_eq!(
            view_from_path(&router.href_for(view), &base, "workflow"),
            view
        );
    }
}

#[test]
fn test_document_names_are_not_views() {
    let (router, _events) = Router::new(
        history("http://localhost/admin/index.html"),
        Rc::new(StaticSource::default()),
        Rc::new(Container::default()),
        "workflow",
    );
    assert!(!is_view_name("report.html"));
    assert_eq!(router.href_for("report.html"), "/admin/workflow");
    assert_eq!(
        view_from_path(&router.href_for("report.html"), "/admin/", "workflow"),
        "workflow"
    );
}

// =============================================================================
// Failure containment
// =============================================================================

#[tokio::test]
async fn test_missing_fragment_is_contained() {
    let mut shell = Shell::boot(MemoryBrowser::new("http://localhost/#nope"), pages());

    let outcomes = shell.settle().await;

    assert!(matches!(outcomes.as_slice(), [LoadOutcome::Failed(_)]));
    assert_eq!(shell.router.current_view(), "nope");
    assert_eq!(shell.container.errors.borrow().len(), 1);

    shell.router.navigate("users");
    shell.settle().await;
    assert_eq!(shell.mounted(), vec!["users"]);
}
