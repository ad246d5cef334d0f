//! Reference table
//!
//! Records every container entered during one traversal so a second
//! encounter is reported instead of expanded. Entries live for the whole
//! traversal.

use std::collections::HashMap;

use crate::graph::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Path where the container was first entered
    pub path: String,

    /// Whether its simplified form kept no children
    pub empty: bool,
}

#[derive(Debug, Default)]
pub struct ReferenceTable {
    entries: HashMap<NodeId, Reference>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, id: NodeId) -> Option<&Reference> {
        self.entries.get(&id)
    }

    /// Register a container at `path`. The first registration of an
    /// identity wins.
    pub fn register(&mut self, id: NodeId, path: &str) {
        self.entries.entry(id).or_insert_with(|| Reference {
            path: path.to_string(),
            empty: false,
        });
    }

    pub fn mark_empty(&mut self, id: NodeId, empty: bool) {
        if let Some(reference) = self.entries.get_mut(&id) {
            reference.empty = empty;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Label substituted for a container already entered at `path`.
pub fn back_reference_label(path: &str) -> String {
    format!("<<Circular reference to '{}'>>", path)
}
