//! Renderer trait and type erasure.
//!
//! A route table holds renderers of *different* concrete types in one
//! collection, so they are stored as trait objects behind a common erased
//! interface. The chain from user code to vtable call is:
//!
//! ```text
//! async fn page(model: Model, lookup: RequestLookup)
//!     -> Result<String, RenderError> { … }              ← user writes this
//!        ↓ table.register("/users/{id}", page)
//! page.into_boxed_renderer()                            ← Renderer blanket impl
//!        ↓
//! Arc::new(FnRenderer(page))                            ← erased wrapper
//!        ↓  stored as BoxedRenderer = Arc<dyn ErasedRenderer>
//! renderer.render(model, lookup)  at request time       ← one vtable dispatch
//! ```
//!
//! The core calls a renderer exactly once per successful match and never
//! mutates it. Rendering may be genuinely asynchronous; the dispatcher
//! awaits the returned future and propagates its result unchanged.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::RenderError;
use crate::lookup::{Model, RequestLookup};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future resolving to the rendered output.
///
/// `Pin<Box<…>>` because the future is polled in place; `Send + 'static` so
/// the host runtime may move it across threads.
pub(crate) type RenderFuture =
    Pin<Box<dyn Future<Output = Result<String, RenderError>> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Renderer` trait's `into_boxed_renderer`
/// method. External crates cannot usefully interact with this trait.
#[doc(hidden)]
pub trait ErasedRenderer {
    fn render(&self, model: Model, lookup: RequestLookup) -> RenderFuture;
}

/// A heap-allocated, type-erased renderer shared across concurrent requests.
///
/// `Arc` gives cheap, thread-safe shared ownership — one reference-count
/// increment per successful match.
#[doc(hidden)]
pub type BoxedRenderer = Arc<dyn ErasedRenderer + Send + Sync + 'static>;

// ── Public Renderer trait ─────────────────────────────────────────────────────

/// Implemented for every valid page renderer.
///
/// You never implement this yourself. It is automatically satisfied for any
/// `async fn` (or closure returning a future) with the signature:
///
/// ```text
/// async fn name(model: Model, lookup: RequestLookup) -> Result<String, RenderError>
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it, which keeps the renderer contract a
/// single function shape.
pub trait Renderer: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_renderer(self) -> BoxedRenderer;
}

/// The sealing module. Because `Sealed` is private, external crates cannot
/// name it and therefore cannot implement `Renderer` on their own types.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut> private::Sealed for F
where
    F: Fn(Model, RequestLookup) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, RenderError>> + Send + 'static,
{
}

impl<F, Fut> Renderer for F
where
    F: Fn(Model, RequestLookup) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, RenderError>> + Send + 'static,
{
    fn into_boxed_renderer(self) -> BoxedRenderer {
        Arc::new(FnRenderer(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype wrapper holding a concrete renderer `F` and implementing
/// [`ErasedRenderer`], bridging the typed world to the trait-object world.
struct FnRenderer<F>(F);

impl<F, Fut> ErasedRenderer for FnRenderer<F>
where
    F: Fn(Model, RequestLookup) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, RenderError>> + Send + 'static,
{
    fn render(&self, model: Model, lookup: RequestLookup) -> RenderFuture {
        // Call the wrapped function to get the concrete future, then box it
        // so the return type matches the trait signature.
        let fut = (self.0)(model, lookup);
        Box::pin(fut)
    }
}
