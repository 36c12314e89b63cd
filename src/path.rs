//! Request path normalization.
//!
//! Matching works on segments, not strings. A raw path is validated and
//! split once, up front, so every pattern test afterwards is a plain
//! segment-by-segment comparison. One trailing slash is normalized away:
//! `/a/b/` and `/a/b` match the same patterns.

use std::fmt;

use crate::error::PathError;

/// A normalized request path: an ordered list of non-empty segments.
///
/// The raw string is kept for diagnostics; matching only ever reads the
/// segments. The root path `"/"` has zero segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    raw: String,
    segments: Vec<String>,
}

impl RequestPath {
    /// Validates and splits a raw path.
    ///
    /// The path must be non-empty and start with `/`. A single trailing
    /// slash is stripped before splitting. An empty segment anywhere else
    /// (`/a//b`) is a [`PathError`].
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(PathError::MissingLeadingSlash { path: raw.to_owned() });
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        let mut segments = Vec::new();
        if !trimmed.is_empty() {
            for part in trimmed[1..].split('/') {
                if part.is_empty() {
                    return Err(PathError::EmptySegment { path: raw.to_owned() });
                }
                segments.push(part.to_owned());
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// The path string as received, before normalization.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_segments() {
        let p = RequestPath::parse("/a/b/c").unwrap();
        assert_eq!(p.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn root_is_zero_segments() {
        let p = RequestPath::parse("/").unwrap();
        assert_eq!(p.segment_count(), 0);
    }

    #[test]
    fn trailing_slash_is_normalized_away() {
        let with = RequestPath::parse("/a/b/").unwrap();
        let without = RequestPath::parse("/a/b").unwrap();
        assert_eq!(with.segments(), without.segments());
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(RequestPath::parse(""), Err(PathError::Empty));
    }

    #[test]
    fn rejects_missing_leading_slash() {
        assert!(matches!(
            RequestPath::parse("a/b"),
            Err(PathError::MissingLeadingSlash { .. })
        ));
    }

    #[test]
    fn rejects_empty_mid_segment() {
        assert!(matches!(
            RequestPath::parse("/a//b"),
            Err(PathError::EmptySegment { .. })
        ));
    }
}
