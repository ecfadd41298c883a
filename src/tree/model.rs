use serde::Serialize;

/// One nesting level of a rendered step list.
///
/// A container holds one entry per step at `depth`; group entries carry the
/// container for the next level down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    /// Nesting depth, 0 for a recipe's top-level steps
    pub depth: usize,
    pub entries: Vec<DisplayEntry>,
}

/// A single rendered step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub depth: usize,
    pub text: String,
    /// Nested container for a group's substeps, `None` for a leaf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<DisplayTree>,
}

/// A display entry with its position in a pre-order walk of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatEntry {
    pub depth: usize,
    pub text: String,
    pub has_children: bool,
}

impl DisplayTree {
    pub(crate) fn new(depth: usize) -> Self {
        DisplayTree {
            depth,
            entries: Vec::new(),
        }
    }

    /// Returns the deepest container depth in the tree.
    pub fn max_depth(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| entry.children.as_ref())
            .map(DisplayTree::max_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// Counts entries on every level.
    pub fn entry_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| 1 + entry.children.as_ref().map_or(0, DisplayTree::entry_count))
            .sum()
    }

    /// Walks the tree in display order, parents before their children.
    pub fn flatten(&self) -> Vec<FlatEntry> {
        let mut flat = Vec::new();
        collect_entries(self, &mut flat);
        flat
    }
}

fn collect_entries(tree: &DisplayTree, flat: &mut Vec<FlatEntry>) {
    for entry in &tree.entries {
        flat.push(FlatEntry {
            depth: entry.depth,
            text: entry.text.clone(),
            has_children: entry.children.is_some(),
        });
        if let Some(children) = &entry.children {
            collect_entries(children, flat);
        }
    }
}
