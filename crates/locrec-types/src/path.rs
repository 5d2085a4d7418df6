//! Dot-delimited key paths.
//!
//! A key path such as `seoPages.pages.pcr.title` addresses one node of a
//! document. Valid key paths:
//! - Are built from one or more segments separated by `.`
//! - Contain no empty segments (`a..b`, `.a`, `a.` are rejected)
//!
//! The only path with zero segments is [`KeyPath::root`], which names no node
//! and is used as the starting prefix of a traversal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Separator between key path segments.
pub const SEPARATOR: char = '.';

/// A validated sequence of key segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path. It never appears in a key set.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path.
    ///
    /// # Examples
    ///
    /// ```
    /// use locrec_types::KeyPath;
    ///
    /// let path = KeyPath::parse("seoPages.pages").unwrap();
    /// assert_eq!(path.segments(), ["seoPages", "pages"]);
    /// assert!(KeyPath::parse("").is_err());
    /// assert!(KeyPath::parse("a..b").is_err());
    /// ```
    pub fn parse(input: &str) -> TypeResult<Self> {
        if input.is_empty() {
            return Err(TypeError::InvalidKeyPath {
                path: input.to_string(),
                reason: "key path must not be empty".into(),
            });
        }
        Self::from_segments(input.split(SEPARATOR))
            .map_err(|_| TypeError::InvalidKeyPath {
                path: input.to_string(),
                reason: "segments must not be empty".into(),
            })
    }

    /// Build a path from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> TypeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if let Some(pos) = segments.iter().position(String::is_empty) {
            return Err(TypeError::InvalidKeyPath {
                path: segments.join("."),
                reason: format!("segment {pos} is empty"),
            });
        }
        Ok(Self { segments })
    }

    /// The individual segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The path without its last segment. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// The last segment. `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns `true` if `self` equals `prefix` or lies beneath it.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

/// Join a prefix and a key the way key sets spell their entries.
pub fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{key}")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for KeyPath {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.to_string()
    }
}
