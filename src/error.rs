//! Error taxonomy.
//!
//! Build-time failures ([`PatternError`], [`RegisterError`]) abort component
//! construction — there is never a partially built route table. Request-time
//! failures ([`PathError`], [`RenderError`], [`DispatchError`]) surface to
//! the caller of `resolve` and are never retried. A path that matches no
//! registered pattern is not an error at all; `find` and `resolve` express
//! it as an empty result.

use std::fmt;

// ── Pattern parsing ───────────────────────────────────────────────────────────

/// A page template string violates the pattern syntax.
///
/// Raised at parse/registration time, before any request is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The template string is empty.
    Empty,
    /// The template does not start with `/`.
    MissingLeadingSlash { template: String },
    /// The template contains an empty segment (`//`).
    EmptySegment { template: String },
    /// A wildcard segment is `{}` — wildcards must be named.
    UnnamedWildcard { template: String },
    /// A segment contains `{` or `}` without being an exact `{name}` wildcard.
    UnbalancedWildcard { template: String, segment: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern template is empty"),
            Self::MissingLeadingSlash { template } => {
                write!(f, "pattern `{template}` must start with '/'")
            }
            Self::EmptySegment { template } => {
                write!(f, "pattern `{template}` contains an empty segment")
            }
            Self::UnnamedWildcard { template } => {
                write!(f, "pattern `{template}` has a wildcard with no name")
            }
            Self::UnbalancedWildcard { template, segment } => {
                write!(f, "pattern `{template}`: segment `{segment}` has unbalanced wildcard delimiters")
            }
        }
    }
}

impl std::error::Error for PatternError {}

// ── Registration ──────────────────────────────────────────────────────────────

/// Registering a page with a route table failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The template could not be parsed.
    MalformedPattern(PatternError),
    /// A pattern with an identical raw template is already registered.
    DuplicatePattern { template: String },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPattern(e) => write!(f, "malformed pattern: {e}"),
            Self::DuplicatePattern { template } => {
                write!(f, "pattern `{template}` is already registered")
            }
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPattern(e) => Some(e),
            Self::DuplicatePattern { .. } => None,
        }
    }
}

impl From<PatternError> for RegisterError {
    fn from(e: PatternError) -> Self {
        Self::MalformedPattern(e)
    }
}

// ── Request paths ─────────────────────────────────────────────────────────────

/// An incoming request path failed normalization.
///
/// Request-level failure — the caller maps it to a client error, the
/// process keeps serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string is empty.
    Empty,
    /// The path does not start with `/`.
    MissingLeadingSlash { path: String },
    /// The path contains an empty segment between slashes (`/a//b`).
    EmptySegment { path: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "request path is empty"),
            Self::MissingLeadingSlash { path } => {
                write!(f, "request path `{path}` must start with '/'")
            }
            Self::EmptySegment { path } => {
                write!(f, "request path `{path}` contains an empty segment")
            }
        }
    }
}

impl std::error::Error for PathError {}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// A matched renderer failed to produce output.
///
/// The dispatcher propagates this unchanged — no retry, no fallback to the
/// next-best pattern.
#[derive(Debug)]
pub struct RenderError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    /// Attaches the underlying failure for error-chain reporting.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self { message: message.into(), source: Some(Box::new(source)) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render failed: {}", self.message)
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// A `resolve` call failed.
///
/// "No matching page" is not represented here — that is the `Ok(None)` arm
/// of [`Dispatcher::resolve`](crate::Dispatcher::resolve).
#[derive(Debug)]
pub enum DispatchError {
    /// The raw request path failed normalization.
    MalformedPath(PathError),
    /// A page matched but its renderer failed.
    Render(RenderError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPath(e) => write!(f, "malformed path: {e}"),
            Self::Render(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPath(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<PathError> for DispatchError {
    fn from(e: PathError) -> Self {
        Self::MalformedPath(e)
    }
}

impl From<RenderError> for DispatchError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// A configuration value is missing or has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key is absent.
    MissingKey { key: String },
    /// A value exists but has the wrong JSON type. `found` names the type
    /// actually present (`"number"`, `"array"`, …).
    InvalidType { key: String, expected: &'static str, found: &'static str },
    /// A value has the right type but violates a validation rule.
    InvalidValue { key: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => {
                write!(f, "configuration key `{key}` is missing")
            }
            Self::InvalidType { key, expected, found } => {
                write!(f, "configuration key `{key}` must be a {expected}, found a {found}")
            }
            Self::InvalidValue { key, reason } => {
                write!(f, "configuration key `{key}` is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
