//! # trellis
//!
//! The path-routing and dispatch core of a server-side page-rendering
//! layer. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The host framework owns templates, themes, component discovery, and the
//! HTTP transport. trellis does not. It answers exactly one question per
//! request: *which registered page pattern wins for this path, and what did
//! its renderer produce?*
//!
//! What the host framework already owns — trellis intentionally ignores:
//!
//! - **Template evaluation and model binding** — behind the [`Renderer`]
//!   capability
//! - **Theme resolution and asset bundling**
//! - **HTTP transport, sessions, security** — paths arrive as plain strings,
//!   already stripped of the application context prefix
//!
//! What's left for trellis — the part that decides which page runs:
//!
//! - [`UriPattern`] — literal and `{wildcard}` segments, with a total
//!   specificity order
//! - [`RouteTable`] — one component's pages, sorted most-specific-first
//! - [`Dispatcher`] — normalize the path, find the winner, run its renderer
//! - [`Configuration`] — the frozen per-component settings record, with
//!   first-wins merge
//!
//! ## Quick start
//!
//! ```rust
//! use trellis::{Dispatcher, Model, RenderError, RequestLookup, RouteTable};
//!
//! async fn user_page(_model: Model, lookup: RequestLookup) -> Result<String, RenderError> {
//!     let id = lookup.binding("id").unwrap_or("unknown");
//!     Ok(format!("<h1>user {id}</h1>"))
//! }
//!
//! async fn user_list(_model: Model, _lookup: RequestLookup) -> Result<String, RenderError> {
//!     Ok("<h1>users</h1>".to_owned())
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut table = RouteTable::new();
//! table.register("/users", user_list).unwrap();
//! table.register("/users/{id}", user_page).unwrap();
//!
//! let dispatcher = Dispatcher::new("accounts", table);
//!
//! let output = dispatcher
//!     .resolve("/users/42", Model::Null, RequestLookup::new("/app"))
//!     .await
//!     .unwrap();
//! assert_eq!(output.as_deref(), Some("<h1>user 42</h1>"));
//!
//! // No matching page is a normal empty result, never an error.
//! let missing = dispatcher
//!     .resolve("/nowhere", Model::Null, RequestLookup::new("/app"))
//!     .await
//!     .unwrap();
//! assert!(missing.is_none());
//! # });
//! ```

mod config;
mod dispatcher;
mod error;
mod lookup;
mod path;
mod pattern;
mod renderer;
mod table;

pub use config::{Configuration, KEY_APP_CONTEXT, KEY_DEFAULT_THEME, KEY_ERROR_PAGES};
pub use dispatcher::Dispatcher;
pub use error::{
    ConfigError, DispatchError, PathError, PatternError, RegisterError, RenderError,
};
pub use lookup::{Model, RequestLookup};
pub use path::RequestPath;
pub use pattern::{Bindings, UriPattern};
pub use renderer::Renderer;
#[doc(hidden)]
pub use renderer::{BoxedRenderer, ErasedRenderer};
pub use table::RouteTable;
