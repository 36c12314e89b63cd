//! Page URI patterns and their specificity ordering.
//!
//! A pattern is a path template split into segments, each either a literal
//! (`page`) or a named wildcard (`{id}`). A wildcard matches exactly one
//! concrete segment and captures it under its name. Segment counts must
//! match exactly — no prefix matching, no multi-segment wildcards.
//!
//! Patterns are totally ordered by specificity so a route table can hold
//! them sorted and stop at the first match. The order is explicit and pure:
//! fewer wildcards first, then fewer segments, then the raw template
//! lexicographically as the final tie-break. Two patterns compare equal only
//! when their raw templates are equal, so the order is reproducible
//! regardless of insertion order or sort stability.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::path::RequestPath;

/// Wildcard name → captured segment value, produced by a successful match.
pub type Bindings = HashMap<String, String>;

/// One `/`-delimited element of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Wildcard(String),
}

/// A parsed, immutable page URI pattern.
///
/// ```rust
/// use trellis::{RequestPath, UriPattern};
///
/// let pattern: UriPattern = "/users/{id}/profile".parse().unwrap();
/// let path = RequestPath::parse("/users/42/profile").unwrap();
///
/// let bindings = pattern.matches(&path).unwrap();
/// assert_eq!(bindings["id"], "42");
/// ```
#[derive(Debug, Clone)]
pub struct UriPattern {
    raw: String,
    segments: Vec<Segment>,
    wildcard_count: usize,
}

impl UriPattern {
    /// Parses a path template.
    ///
    /// Rejected templates: the empty string, anything not starting with `/`,
    /// empty segments (`/a//b`), unnamed wildcards (`/{}`), and segments
    /// where `{` or `}` appear outside an exact `{name}` wrapper.
    ///
    /// The bare root `"/"` is valid and has zero segments.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        if template.is_empty() {
            return Err(PatternError::Empty);
        }
        if !template.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash { template: template.to_owned() });
        }

        let mut segments = Vec::new();
        let mut wildcard_count = 0;
        if template != "/" {
            for part in template[1..].split('/') {
                segments.push(parse_segment(template, part)?);
            }
            wildcard_count = segments
                .iter()
                .filter(|s| matches!(s, Segment::Wildcard(_)))
                .count();
        }

        Ok(Self { raw: template.to_owned(), segments, wildcard_count })
    }

    /// The template string this pattern was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of segments in the template. The root pattern has zero.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of wildcard segments in the template.
    pub fn wildcard_count(&self) -> usize {
        self.wildcard_count
    }

    /// Tests this pattern against a normalized request path.
    ///
    /// Returns the wildcard bindings on a match — one entry per wildcard
    /// declared in the template, nothing else. Returns `None` when the
    /// segment counts differ or any literal segment disagrees.
    pub fn matches(&self, path: &RequestPath) -> Option<Bindings> {
        let concrete = path.segments();
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut bindings = Bindings::with_capacity(self.wildcard_count);
        for (segment, value) in self.segments.iter().zip(concrete) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != value {
                        return None;
                    }
                }
                Segment::Wildcard(name) => {
                    bindings.insert(name.clone(), value.clone());
                }
            }
        }
        Some(bindings)
    }
}

fn parse_segment(template: &str, part: &str) -> Result<Segment, PatternError> {
    if part.is_empty() {
        return Err(PatternError::EmptySegment { template: template.to_owned() });
    }
    if let Some(name) = part.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
        if name.is_empty() {
            return Err(PatternError::UnnamedWildcard { template: template.to_owned() });
        }
        // A nested brace inside the name would make the wildcard ambiguous.
        if name.contains(['{', '}']) {
            return Err(PatternError::UnbalancedWildcard {
                template: template.to_owned(),
                segment: part.to_owned(),
            });
        }
        return Ok(Segment::Wildcard(name.to_owned()));
    }
    if part.contains(['{', '}']) {
        return Err(PatternError::UnbalancedWildcard {
            template: template.to_owned(),
            segment: part.to_owned(),
        });
    }
    Ok(Segment::Literal(part.to_owned()))
}

impl FromStr for UriPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UriPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Equality is by raw template only — the parsed form is derived from it.
impl PartialEq for UriPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for UriPattern {}

impl PartialOrd for UriPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Specificity order: (wildcard count, segment count, raw template), all
/// ascending. The most specific pattern sorts first; the raw template makes
/// the order total, so `cmp` returns `Equal` only for equal templates.
impl Ord for UriPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.wildcard_count, self.segments.len(), &self.raw).cmp(&(
            other.wildcard_count,
            other.segments.len(),
            &other.raw,
        ))
    }
}
