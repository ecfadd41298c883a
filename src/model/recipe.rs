use super::step::{Step, StepError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recipe record.
///
/// Recipes are loaded once into a [`RecipeStore`](crate::RecipeStore) and
/// never edited afterwards. The pipeline functions clone records into new
/// view lists instead of mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique positive identifier
    pub id: u32,
    pub title: String,
    /// Total time in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Checks the step tree of this recipe.
    pub fn validate_steps(&self) -> Result<(), StepError> {
        self.steps.iter().try_for_each(Step::validate)
    }
}
