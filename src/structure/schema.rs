//! Result of a structural comparison.

use serde::{Deserialize, Serialize};

/// Outcome of comparing two values
///
/// Exactly one of `path_where_structure_differs` / `properties_changed` is
/// set, chosen by `structure_is_identical`. Build it through
/// [`ComparisonResult::identical`] or [`ComparisonResult::diverged`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Whether key sets, kinds, and array lengths all line up
    pub structure_is_identical: bool,

    /// First location (traversal order) where the structures diverge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_where_structure_differs: Option<String>,

    /// De-duplicated names of mapping fields whose primitive value changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties_changed: Option<Vec<String>>,
}

impl ComparisonResult {
    /// Structures match; `properties_changed` lists changed leaf names
    pub fn identical(properties_changed: Vec<String>) -> Self {
        Self {
            structure_is_identical: true,
            path_where_structure_differs: None,
            properties_changed: Some(properties_changed),
        }
    }

    /// Structures diverge at `path`
    pub fn diverged(path: impl Into<String>) -> Self {
        Self {
            structure_is_identical: false,
            path_where_structure_differs: Some(path.into()),
            properties_changed: None,
        }
    }

    /// Changed property names, empty when the structure diverged
    pub fn changed_properties(&self) -> &[String] {
        self.properties_changed.as_deref().unwrap_or(&[])
    }

    /// Divergence path, if any
    pub fn divergence(&self) -> Option<&str> {
        self.path_where_structure_differs.as_deref()
    }
}
