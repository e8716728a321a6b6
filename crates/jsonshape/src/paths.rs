//! Locations of nodes inside the validated value.
use core::slice;
use std::fmt::{self, Write};

/// A single step from a container to one of its children.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Segment {
    /// A string key for object properties.
    Key(Box<str>),
    /// A numeric index for array elements.
    Index(usize),
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Key(value.into())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Key(value.into_boxed_str())
    }
}

impl From<usize> for Segment {
    fn from(value: usize) -> Self {
        Segment::Index(value)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(idx) => write!(f, "[{idx}]"),
            Segment::Key(key) if is_identifier(key) => {
                f.write_char('.')?;
                f.write_str(key)
            }
            Segment::Key(key) => {
                f.write_char('[')?;
                write_quoted(f, key)?;
                f.write_char(']')
            }
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in key.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// An owned path from the root of the input to a node, e.g. `.credentials.username` or `[2][0]`.
///
/// The root itself is the empty location.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Location(Vec<Segment>);

impl Location {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Return a new location with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment.into());
        Self(segments)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Segment> {
        self.0.iter()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Location {
    type Item = &'a Segment;
    type IntoIter = slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Segment> for Location {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum LazySegment<'a> {
    Key(&'a str),
    Index(usize),
}

impl From<LazySegment<'_>> for Segment {
    fn from(value: LazySegment<'_>) -> Self {
        match value {
            LazySegment::Key(key) => Segment::Key(key.into()),
            LazySegment::Index(idx) => Segment::Index(idx),
        }
    }
}

/// A location that lives on the stack during traversal.
///
/// Each node only links to its parent, so nothing is allocated until an error or a tracing
/// callback actually needs the path.
#[derive(Debug, Clone, Copy)]
pub struct LazyLocation<'a> {
    segment: Option<LazySegment<'a>>,
    parent: Option<&'a LazyLocation<'a>>,
}

impl Default for LazyLocation<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LazyLocation<'a> {
    #[must_use]
    pub const fn new() -> Self {
        LazyLocation {
            segment: None,
            parent: None,
        }
    }

    #[must_use]
    pub(crate) fn push_key(&'a self, key: &'a str) -> Self {
        LazyLocation {
            segment: Some(LazySegment::Key(key)),
            parent: Some(self),
        }
    }

    #[must_use]
    pub(crate) fn push_index(&'a self, idx: usize) -> Self {
        LazyLocation {
            segment: Some(LazySegment::Index(idx)),
            parent: Some(self),
        }
    }

    /// Number of segments between the root and this location.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        let mut len = 0;
        let mut head = self;
        while let Some(parent) = head.parent {
            len += 1;
            head = parent;
        }
        len
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Allocate an owned copy of this location.
    #[must_use]
    pub fn materialize(&self) -> Location {
        Location::from(self)
    }
}

impl From<&LazyLocation<'_>> for Location {
    fn from(value: &LazyLocation<'_>) -> Self {
        let mut segments = Vec::with_capacity(value.len());
        let mut head = value;
        while let (Some(segment), Some(parent)) = (head.segment, head.parent) {
            segments.push(segment.into());
            head = parent;
        }
        segments.reverse();
        Location(segments)
    }
}
