//! End-to-end dispatch scenarios: register pages on a table, hand it to a
//! dispatcher, resolve concrete paths.

use serde_json::json;
use trellis::{
    Configuration, DispatchError, Dispatcher, Model, RegisterError, RenderError, Renderer,
    RequestLookup, RouteTable,
};

/// A page that renders fixed content, ignoring model and lookup.
fn page(content: &str) -> impl Renderer {
    let content = content.to_owned();
    move |_model: Model, _lookup: RequestLookup| {
        let content = content.clone();
        async move { Ok::<_, RenderError>(content) }
    }
}

fn lookup() -> RequestLookup {
    RequestLookup::new("/appContext")
}

#[tokio::test]
async fn renders_existing_page() {
    let mut table = RouteTable::new();
    table.register("/test/page/one", page("Hello world from test page one!")).unwrap();
    table.register("/test/page/two", page("Hello world from test page two!")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let output = dispatcher.resolve("/test/page/one", Model::Null, lookup()).await.unwrap();
    assert_eq!(output.as_deref(), Some("Hello world from test page one!"));
}

#[tokio::test]
async fn renders_existing_page_with_wildcard() {
    async fn wildcard_page(_model: Model, lookup: RequestLookup) -> Result<String, RenderError> {
        let captured = lookup.binding("wildcard").expect("wildcard binding present");
        Ok(format!("Hello world from test page one! ({captured})"))
    }

    let mut table = RouteTable::new();
    table.register("/test/page/{wildcard}/one", wildcard_page).unwrap();
    table.register("/test/page/no-wildcard/two", page("Hello world from test page two!")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let output = dispatcher
        .resolve("/test/page/wildcard-value/one", Model::Null, lookup())
        .await
        .unwrap();
    assert_eq!(
        output.as_deref(),
        Some("Hello world from test page one! (wildcard-value)")
    );
}

#[tokio::test]
async fn non_existing_page_is_empty() {
    let mut table = RouteTable::new();
    table.register("/test/page/one", page("one")).unwrap();
    table.register("/test/page/two", page("two")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let output = dispatcher.resolve("/test/page/three", Model::Null, lookup()).await.unwrap();
    assert!(output.is_none());
}

#[tokio::test]
async fn literal_beats_wildcard_regardless_of_registration_order() {
    // Wildcard registered first on purpose.
    async fn echo_x(_model: Model, lookup: RequestLookup) -> Result<String, RenderError> {
        Ok(format!("wildcard x={}", lookup.binding("x").unwrap()))
    }

    let mut table = RouteTable::new();
    table.register("/a/{x}", echo_x).unwrap();
    table.register("/a/b", page("literal")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let literal = dispatcher.resolve("/a/b", Model::Null, lookup()).await.unwrap();
    assert_eq!(literal.as_deref(), Some("literal"));

    let wildcard = dispatcher.resolve("/a/q", Model::Null, lookup()).await.unwrap();
    assert_eq!(wildcard.as_deref(), Some("wildcard x=q"));
}

#[tokio::test]
async fn trailing_slash_resolves_like_no_trailing_slash() {
    let mut table = RouteTable::new();
    table.register("/a/b", page("ab")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let with = dispatcher.resolve("/a/b/", Model::Null, lookup()).await.unwrap();
    let without = dispatcher.resolve("/a/b", Model::Null, lookup()).await.unwrap();
    assert_eq!(with, without);
    assert_eq!(with.as_deref(), Some("ab"));
}

#[tokio::test]
async fn duplicate_registration_fails_on_the_second_call() {
    let mut table = RouteTable::new();
    table.register("/a/b", page("first")).unwrap();

    let err = table.register("/a/b", page("second")).unwrap_err();
    assert_eq!(err, RegisterError::DuplicatePattern { template: "/a/b".to_owned() });
}

#[tokio::test]
async fn render_failure_is_propagated_not_retried() {
    async fn broken(_model: Model, _lookup: RequestLookup) -> Result<String, RenderError> {
        Err(RenderError::new("missing template"))
    }

    // A less specific page also covers the path; a failing renderer must
    // NOT fall back to it.
    let mut table = RouteTable::new();
    table.register("/page/one", broken).unwrap();
    table.register("/page/{x}", page("fallback")).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let err = dispatcher.resolve("/page/one", Model::Null, lookup()).await.unwrap_err();
    match err {
        DispatchError::Render(e) => assert_eq!(e.message(), "missing template"),
        other => panic!("expected render error, got {other:?}"),
    }
}

#[tokio::test]
async fn model_reaches_the_renderer() {
    async fn greet(model: Model, _lookup: RequestLookup) -> Result<String, RenderError> {
        let name = model["name"].as_str().unwrap_or("stranger");
        Ok(format!("hello, {name}"))
    }

    let mut table = RouteTable::new();
    table.register("/greet", greet).unwrap();

    let dispatcher = Dispatcher::new("componentName", table);

    let output = dispatcher
        .resolve("/greet", json!({"name": "alice"}), lookup())
        .await
        .unwrap();
    assert_eq!(output.as_deref(), Some("hello, alice"));
}

#[test]
fn configuration_merge_keeps_receiver_values() {
    let base = Configuration::from_json(json!({"defaultTheme": "t1"})).unwrap();
    let other =
        Configuration::from_json(json!({"defaultTheme": "t2", "appContext": "app"})).unwrap();

    let merged = base.merge(&other);
    assert_eq!(merged.default_theme_name().unwrap(), "t1");
    assert_eq!(merged.app_context().unwrap(), Some("app"));
}
