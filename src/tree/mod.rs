use crate::model::Step;

mod model;
pub use model::{DisplayEntry, DisplayTree, FlatEntry};

/// Converts a step list into a display tree rooted at `depth`.
///
/// Every step becomes one entry in the container for its level, in order.
/// A group's substeps are rendered into a nested container one level deeper.
/// Nothing is reordered or flattened and there is no depth limit.
///
/// A group with no substeps renders as an entry with an empty nested
/// container. Catalog loading rejects such groups, so this only happens for
/// hand-built steps that skipped [`Step::group`].
///
/// # Examples
///
/// ```
/// use recipe_cards::{render_steps, Step};
///
/// let steps = vec![
///     Step::leaf("Boil pasta"),
///     Step::group("Prepare sauce", vec![Step::leaf("Whisk eggs")])?,
/// ];
/// let tree = render_steps(&steps, 0);
/// assert_eq!(tree.entries.len(), 2);
/// assert_eq!(tree.max_depth(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_steps(steps: &[Step], depth: usize) -> DisplayTree {
    let mut tree = DisplayTree::new(depth);

    for step in steps {
        let entry = match step {
            Step::Leaf(text) => DisplayEntry {
                depth,
                text: text.clone(),
                children: None,
            },
            Step::Group { text, substeps } => DisplayEntry {
                depth,
                text: text.clone(),
                children: Some(render_steps(substeps, depth + 1)),
            },
        };
        tree.entries.push(entry);
    }

    tree
}
