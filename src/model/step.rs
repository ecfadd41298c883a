use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single instruction in a recipe.
///
/// Steps nest without a depth limit: a group carries its own text followed by
/// an ordered list of substeps, each of which may again be a group.
///
/// In catalog files a leaf is written as a plain string and a group as a map:
///
/// ```yaml
/// steps:
///   - Boil pasta
///   - text: Prepare sauce
///     substeps:
///       - Whisk eggs
///       - Add cheese
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Group { text: String, substeps: Vec<Step> },
}

/// Errors raised when a step tree breaks the group invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("Step group {text:?} has no substeps")]
    MalformedStepTree { text: String },
}

impl Step {
    /// Creates a leaf step.
    pub fn leaf(text: impl Into<String>) -> Self {
        Step::Leaf(text.into())
    }

    /// Creates a group step.
    ///
    /// # Errors
    ///
    /// Returns `StepError::MalformedStepTree` if `substeps` is empty.
    pub fn group(text: impl Into<String>, substeps: Vec<Step>) -> Result<Self, StepError> {
        let text = text.into();
        if substeps.is_empty() {
            return Err(StepError::MalformedStepTree { text });
        }
        Ok(Step::Group { text, substeps })
    }

    /// Returns the instruction text of this step.
    pub fn text(&self) -> &str {
        match self {
            Step::Leaf(text) => text.as_str(),
            Step::Group { text, .. } => text.as_str(),
        }
    }

    /// Returns the substeps of a group, or an empty slice for a leaf.
    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Leaf(_) => &[],
            Step::Group { substeps, .. } => substeps.as_slice(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Step::Group { .. })
    }

    /// Checks that every group in this subtree has at least one substep.
    pub fn validate(&self) -> Result<(), StepError> {
        match self {
            Step::Leaf(_) => Ok(()),
            Step::Group { text, substeps } => {
                if substeps.is_empty() {
                    return Err(StepError::MalformedStepTree { text: text.clone() });
                }
                substeps.iter().try_for_each(Step::validate)
            }
        }
    }
}
