//! Render inputs: the model and the per-request lookup context.
//!
//! The routing core never inspects the model — it is handed to the matched
//! renderer as-is. The lookup context is what the core *adds to*: the
//! dispatcher merges the wildcard bindings of the winning pattern into a
//! copy of the caller's lookup before invoking the renderer, so bindings
//! travel with the call instead of living in mutable request state.

use crate::pattern::Bindings;

/// Arbitrary template data for a renderer.
///
/// Heterogeneous by nature (strings, numbers, nested objects), so it is a
/// JSON value. The core treats it as opaque.
pub type Model = serde_json::Value;

/// Per-request lookup context handed to the matched renderer.
///
/// Built by the caller with the application context of the current request;
/// the dispatcher fills in the wildcard bindings on a match.
#[derive(Debug, Clone, Default)]
pub struct RequestLookup {
    app_context: String,
    bindings: Bindings,
}

impl RequestLookup {
    pub fn new(app_context: impl Into<String>) -> Self {
        Self { app_context: app_context.into(), bindings: Bindings::new() }
    }

    /// The application context prefix of the current request (already
    /// stripped from the path the dispatcher sees).
    pub fn app_context(&self) -> &str {
        &self.app_context
    }

    /// Looks up a captured wildcard value by name.
    ///
    /// For a pattern `/users/{id}` matched against `/users/42`,
    /// `lookup.binding("id")` returns `Some("42")`.
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Returns a copy of this lookup carrying `bindings`.
    ///
    /// Called by the dispatcher once per successful match; bindings from a
    /// previous match are replaced, never accumulated.
    pub(crate) fn with_bindings(&self, bindings: Bindings) -> Self {
        Self { app_context: self.app_context.clone(), bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_lookup() {
        let mut bindings = Bindings::new();
        bindings.insert("id".to_owned(), "42".to_owned());

        let lookup = RequestLookup::new("/app").with_bindings(bindings);
        assert_eq!(lookup.app_context(), "/app");
        assert_eq!(lookup.binding("id"), Some("42"));
        assert_eq!(lookup.binding("missing"), None);
    }

    #[test]
    fn with_bindings_replaces_rather_than_accumulates() {
        let mut first = Bindings::new();
        first.insert("a".to_owned(), "1".to_owned());
        let mut second = Bindings::new();
        second.insert("b".to_owned(), "2".to_owned());

        let lookup = RequestLookup::new("/app")
            .with_bindings(first)
            .with_bindings(second);
        assert_eq!(lookup.binding("a"), None);
        assert_eq!(lookup.binding("b"), Some("2"));
    }
}
