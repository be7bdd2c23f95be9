//! Node paths for error reporting.
//!
//! A [`NodePath`] locates a node inside the raw sidebar literal, rendered the
//! way a reader would address it in the source file:
//!
//! - `docsSidebar` - the sidebar itself
//! - `docsSidebar[1]` - second top-level item
//! - `docsSidebar[1].items[0].link.id` - nested attribute

use std::fmt;

/// One step of a [`NodePath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Segment {
    Index(usize),
    Field(&'static str),
}

/// Location of a node in the sidebar configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    sidebar: Option<String>,
    segments: Vec<Segment>,
}

impl NodePath {
    /// Path of the registry root (outside any sidebar).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a named sidebar.
    #[must_use]
    pub fn sidebar(name: &str) -> Self {
        Self {
            sidebar: Some(name.to_owned()),
            segments: Vec::new(),
        }
    }

    /// Child path addressing element `index` of a list.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    /// Child path addressing attribute `name` of an object.
    #[must_use]
    pub fn field(&self, name: &'static str) -> Self {
        self.with(Segment::Field(name))
    }

    /// Name of the sidebar this path belongs to.
    #[must_use]
    pub fn sidebar_name(&self) -> Option<&str> {
        self.sidebar.as_deref()
    }

    /// Nesting depth below the sidebar (number of segments).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self {
            sidebar: self.sidebar.clone(),
            segments,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sidebar {
            Some(name) => f.write_str(name)?,
            None if self.segments.is_empty() => return f.write_str("(root)"),
            None => {}
        }
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::Field(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}
