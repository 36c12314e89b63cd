//! Minimal trellis example — one component with literal and wildcard pages.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Registers three pages, then resolves a handful of paths the way a host
//! framework would for incoming requests.

use serde_json::json;
use trellis::{Configuration, Dispatcher, Model, RenderError, RequestLookup, RouteTable};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Component configuration usually comes from the component itself plus
    // its parents; merge is first-wins so the component's own values survive.
    let own = Configuration::from_json(json!({"defaultTheme": "dark"})).unwrap();
    let inherited =
        Configuration::from_json(json!({"defaultTheme": "light", "appContext": "shop"})).unwrap();
    let config = own.merge(&inherited);
    println!(
        "theme = {}, app context = {:?}",
        config.default_theme_name().unwrap(),
        config.app_context().unwrap()
    );

    let mut table = RouteTable::new();
    table.register("/products", product_list).unwrap();
    table.register("/products/{id}", product_page).unwrap();
    table.register("/products/featured", featured_page).unwrap();

    let dispatcher = Dispatcher::new("shop", table);

    for path in ["/products", "/products/42", "/products/featured", "/products/42/"] {
        let output = dispatcher
            .resolve(path, json!({"user": "alice"}), RequestLookup::new("/shop"))
            .await
            .unwrap();
        println!("{path} -> {}", output.as_deref().unwrap_or("(no page)"));
    }

    // No registered page covers this path; that is an empty result, not an
    // error.
    let missing = dispatcher
        .resolve("/cart", Model::Null, RequestLookup::new("/shop"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

// GET /products
async fn product_list(_model: Model, _lookup: RequestLookup) -> Result<String, RenderError> {
    Ok("<h1>all products</h1>".to_owned())
}

// GET /products/{id} — the wildcard value arrives through the lookup.
async fn product_page(model: Model, lookup: RequestLookup) -> Result<String, RenderError> {
    let id = lookup.binding("id").unwrap_or("unknown");
    let user = model["user"].as_str().unwrap_or("guest");
    Ok(format!("<h1>product {id}</h1><p>for {user}</p>"))
}

// GET /products/featured — literal, so it wins over /products/{id}.
async fn featured_page(_model: Model, _lookup: RequestLookup) -> Result<String, RenderError> {
    Ok("<h1>featured</h1>".to_owned())
}
