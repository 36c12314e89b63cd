//! The route table: a component's registered pages, sorted by specificity.
//!
//! You register a template, you get back the matching renderer. That is all.
//! Entries are kept sorted most-specific-first (see the ordering on
//! [`UriPattern`]), so lookup is a single in-order scan that stops at the
//! first match. When both `/test/page/two` (literal) and `/test/page/{x}`
//! (wildcard) could match a request, the literal entry wins regardless of
//! registration order.
//!
//! Build the table once at component startup, then hand it to a
//! [`Dispatcher`](crate::Dispatcher). It is never mutated afterwards, which
//! is why concurrent lookups need no locking.

use tracing::debug;

use crate::error::RegisterError;
use crate::path::RequestPath;
use crate::pattern::{Bindings, UriPattern};
use crate::renderer::{BoxedRenderer, Renderer};

struct RouteEntry {
    pattern: UriPattern,
    renderer: BoxedRenderer,
}

/// The specificity-ordered collection of (pattern, renderer) pairs for one
/// component.
///
/// ```rust
/// use trellis::{Model, RenderError, RequestLookup, RouteTable};
///
/// async fn front_page(_: Model, _: RequestLookup) -> Result<String, RenderError> {
///     Ok("<h1>welcome</h1>".to_owned())
/// }
///
/// let mut table = RouteTable::new();
/// table.register("/", front_page).unwrap();
/// ```
#[derive(Default)]
pub struct RouteTable {
    // Sorted ascending by pattern specificity; most specific first.
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Parses `template` and inserts it with its renderer, keeping the table
    /// sorted.
    ///
    /// Fails with [`RegisterError::MalformedPattern`] on a syntax error and
    /// [`RegisterError::DuplicatePattern`] when an entry with the identical
    /// raw template already exists. Either failure should abort component
    /// construction — a partially registered component must not serve.
    pub fn register(
        &mut self,
        template: &str,
        renderer: impl Renderer,
    ) -> Result<(), RegisterError> {
        let pattern = UriPattern::parse(template)?;

        // The specificity order is total and returns Equal only for equal
        // raw templates, so an exact hit here is always a duplicate.
        match self.entries.binary_search_by(|entry| entry.pattern.cmp(&pattern)) {
            Ok(_) => Err(RegisterError::DuplicatePattern { template: template.to_owned() }),
            Err(pos) => {
                debug!(template, position = pos, "page registered");
                self.entries.insert(
                    pos,
                    RouteEntry { pattern, renderer: renderer.into_boxed_renderer() },
                );
                Ok(())
            }
        }
    }

    /// Finds the most specific pattern matching `path`.
    ///
    /// Scans entries in specificity order and returns the first match along
    /// with its wildcard bindings. `None` means no registered page covers
    /// the path — a normal outcome, not an error.
    pub fn find(&self, path: &RequestPath) -> Option<(BoxedRenderer, Bindings)> {
        for entry in &self.entries {
            if let Some(bindings) = entry.pattern.matches(path) {
                return Some((BoxedRenderer::clone(&entry.renderer), bindings));
            }
        }
        None
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered templates in specificity order, most specific first.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.pattern.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::lookup::{Model, RequestLookup};

    fn page(content: &str) -> impl Renderer {
        let content = content.to_owned();
        move |_model: Model, _lookup: RequestLookup| {
            let content = content.clone();
            async move { Ok::<_, RenderError>(content) }
        }
    }

    fn path(raw: &str) -> RequestPath {
        RequestPath::parse(raw).unwrap()
    }

    async fn rendered(table: &RouteTable, raw: &str) -> Option<String> {
        let (renderer, bindings) = table.find(&path(raw))?;
        let lookup = RequestLookup::new("/app").with_bindings(bindings);
        Some(renderer.render(Model::Null, lookup).await.unwrap())
    }

    #[tokio::test]
    async fn first_match_in_specificity_order() {
        let mut table = RouteTable::new();
        // Wildcard registered first; the literal must still win.
        table.register("/a/{x}", page("wildcard")).unwrap();
        table.register("/a/b", page("literal")).unwrap();

        assert_eq!(rendered(&table, "/a/b").await.unwrap(), "literal");
        assert_eq!(rendered(&table, "/a/q").await.unwrap(), "wildcard");
    }

    #[tokio::test]
    async fn wildcard_bindings_are_returned_with_the_match() {
        let mut table = RouteTable::new();
        table.register("/users/{id}", page("user")).unwrap();

        let (_, bindings) = table.find(&path("/users/42")).unwrap();
        assert_eq!(bindings["id"], "42");
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let mut table = RouteTable::new();
        table.register("/test/page/one", page("one")).unwrap();

        assert!(table.find(&path("/z/z/z")).is_none());
    }

    #[test]
    fn duplicate_template_is_rejected() {
        let mut table = RouteTable::new();
        table.register("/a/b", page("first")).unwrap();

        let err = table.register("/a/b", page("second")).unwrap_err();
        assert_eq!(err, RegisterError::DuplicatePattern { template: "/a/b".to_owned() });
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn malformed_template_is_rejected() {
        let mut table = RouteTable::new();
        assert!(matches!(
            table.register("a/b", page("x")),
            Err(RegisterError::MalformedPattern(_))
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn templates_iterate_most_specific_first() {
        let mut table = RouteTable::new();
        table.register("/a/{x}", page("w")).unwrap();
        table.register("/a/b/c", page("l2")).unwrap();
        table.register("/a/b", page("l1")).unwrap();

        let order: Vec<_> = table.templates().collect();
        assert_eq!(order, ["/a/b", "/a/b/c", "/a/{x}"]);
    }
}
