//! Dotted/bracketed location within a JSON tree.
//!
//! Paths are built while walking and are only ever rendered for reporting,
//! never used for lookup.

use std::fmt;

/// One step from a container to a child
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Field of a mapping
    Key(String),

    /// Position in a sequence
    Index(usize),
}

/// Location of a node, from the root down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The empty path (document root)
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended with a mapping field
    pub fn key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_string()))
    }

    /// Path extended with a sequence position
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Name of the final segment: the field name for a key, `[n]` for an
    /// index, and the empty string at the root.
    pub fn leaf_name(&self) -> String {
        match self.segments.last() {
            Some(Segment::Key(key)) => key.clone(),
            Some(Segment::Index(index)) => format!("[{}]", index),
            None => String::new(),
        }
    }
}

impl fmt::Display for FieldPath {
    /// Renders `a.b[2].c`; the first key carries no leading separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
        assert_eq!(path.leaf_name(), "");
    }

    #[test]
    fn test_mixed_segments() {
        let path = FieldPath::root().key("a").key("b").index(2).key("c");
        assert_eq!(path.to_string(), "a.b[2].c");
        assert_eq!(path.leaf_name(), "c");
    }

    #[test]
    fn test_root_sequence_has_no_leading_separator() {
        let path = FieldPath::root().index(0).key("id");
        assert_eq!(path.to_string(), "[0].id");
    }

    #[test]
    fn test_child_does_not_modify_parent() {
        let parent = FieldPath::root().key("a");
        let _child = parent.key("b");
        assert_eq!(parent.to_string(), "a");
        assert_eq!(parent.segments().len(), 1);
    }

    #[test]
    fn test_index_leaf_name() {
        assert_eq!(FieldPath::root().key("xs").index(3).leaf_name(), "[3]");
    }
}
