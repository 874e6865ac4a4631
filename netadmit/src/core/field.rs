//! Field paths used to label validation causes.
//!
//! A path renders the way the control plane prints field locations:
//! names joined by `.`, list indices as `[i]` on the preceding name, e.g.
//! `spec.domain.devices.interfaces[2].name`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Name(String),
    Index(usize),
}

/// Immutable location inside a workload spec.
///
/// `child` and `index` return a new path and leave `self` untouched, so a
/// prefix can be shared by every check in a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Root path with a single named segment.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Name(root.into())],
        }
    }

    /// Build a path from a dotted prefix such as `request.object.spec`.
    ///
    /// Returns `None` for an empty prefix or one with an empty segment.
    pub fn parse(prefix: &str) -> Option<Self> {
        let mut segments = Vec::new();
        for part in prefix.split('.') {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            segments.push(Segment::Name(part.to_string()));
        }
        Some(Self { segments })
    }

    /// Derive a path with `name` appended.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Name(name.into()));
        Self { segments }
    }

    /// Derive a path with each of `names` appended in order.
    pub fn children<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.extend(names.into_iter().map(|name| Segment::Name(name.into())));
        Self { segments }
    }

    /// Derive a path pointing at element `idx` of the list at `self`.
    pub fn index(&self, idx: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(idx));
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Name(name) if pos == 0 => f.write_str(name)?,
                Segment::Name(name) => write!(f, ".{}", name)?,
                Segment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
