//! Request dispatch: path in, rendered page (or nothing) out.
//!
//! The dispatcher owns a finished [`RouteTable`] and exposes the one
//! operation the host framework calls per request. It performs no I/O of
//! its own; the only await point is the matched renderer. Share it across
//! request tasks behind an `Arc` — lookups never take a lock because the
//! table is immutable from construction on.

use tracing::debug;

use crate::error::DispatchError;
use crate::lookup::{Model, RequestLookup};
use crate::path::RequestPath;
use crate::table::RouteTable;

/// Resolves request paths against one component's route table.
///
/// ```rust
/// use trellis::{Dispatcher, Model, RenderError, RequestLookup, RouteTable};
///
/// async fn front_page(_: Model, _: RequestLookup) -> Result<String, RenderError> {
///     Ok("<h1>welcome</h1>".to_owned())
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut table = RouteTable::new();
/// table.register("/", front_page).unwrap();
///
/// let dispatcher = Dispatcher::new("root", table);
/// let output = dispatcher
///     .resolve("/", Model::Null, RequestLookup::new("/app"))
///     .await
///     .unwrap();
/// assert_eq!(output.as_deref(), Some("<h1>welcome</h1>"));
/// # });
/// ```
pub struct Dispatcher {
    component: String,
    table: RouteTable,
}

impl Dispatcher {
    /// Takes ownership of a finished route table.
    ///
    /// `component` names the owning component in log output. Ownership
    /// transfer is the immutability boundary: there is no way to register
    /// pages through a dispatcher.
    pub fn new(component: impl Into<String>, table: RouteTable) -> Self {
        Self { component: component.into(), table }
    }

    /// The name of the component this dispatcher serves.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Read access to the underlying table (templates, counts).
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves a raw request path to rendered output.
    ///
    /// - `Ok(Some(output))` — a page matched and rendered. The winning
    ///   pattern's wildcard bindings are merged into `lookup` before the
    ///   renderer runs; the renderer is invoked exactly once.
    /// - `Ok(None)` — no registered page matches. Not an error; the caller
    ///   maps it to its "not found" response.
    /// - `Err(DispatchError::MalformedPath)` — `raw_path` failed
    ///   normalization.
    /// - `Err(DispatchError::Render)` — a page matched but its renderer
    ///   failed. Propagated unchanged: no retry, no fallback to the
    ///   next-best pattern.
    ///
    /// `raw_path` arrives with the application context prefix already
    /// stripped; the dispatcher never sees that prefix.
    pub async fn resolve(
        &self,
        raw_path: &str,
        model: Model,
        lookup: RequestLookup,
    ) -> Result<Option<String>, DispatchError> {
        let path = RequestPath::parse(raw_path)?;

        let Some((renderer, bindings)) = self.table.find(&path) else {
            debug!(component = %self.component, path = %path, "no page matches");
            return Ok(None);
        };

        debug!(
            component = %self.component,
            path = %path,
            bindings = bindings.len(),
            "page matched"
        );
        let output = renderer.render(model, lookup.with_bindings(bindings)).await?;
        Ok(Some(output))
    }
}
