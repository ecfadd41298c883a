//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Step trees are recursive, so they cross the boundary as a flat pre-order
//! list of entries carrying their depth.

use crate::model::Recipe;
use crate::render::render_cards;
use crate::search::{compute_view, FilterKind, SortKind};
use crate::state::toggle_favorite as toggle_favorite_internal;
use crate::store::{RecipeStore, StoreError};
use crate::tree::{render_steps, FlatEntry};
use camino::Utf8Path;
use std::collections::HashSet;
use std::sync::Arc;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeCardsError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },
}

impl From<StoreError> for RecipeCardsError {
    fn from(e: StoreError) -> Self {
        let message = e.to_string();
        match e {
            StoreError::IoError(_) | StoreError::GlobError(_) => {
                RecipeCardsError::IoError { message }
            }
            StoreError::YamlError(_) | StoreError::JsonError(_) => {
                RecipeCardsError::ParseError { message }
            }
            StoreError::PatternError(_)
            | StoreError::DirectoryNotFound(_)
            | StoreError::InvalidPath(_)
            | StoreError::UnsupportedFormat(_) => RecipeCardsError::InvalidPath { message },
            StoreError::InvalidId { .. }
            | StoreError::DuplicateId(_)
            | StoreError::MalformedStep { .. } => RecipeCardsError::InvalidCatalog { message },
        }
    }
}

/// One rendered step with its nesting depth.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStepEntry {
    /// Nesting depth, 0 for top-level steps
    pub depth: u32,
    pub text: String,
    /// True if the entries that follow at `depth + 1` are this step's substeps
    pub has_children: bool,
}

impl From<FlatEntry> for FfiStepEntry {
    fn from(e: FlatEntry) -> Self {
        FfiStepEntry {
            depth: u32::try_from(e.depth).unwrap_or(u32::MAX),
            text: e.text,
            has_children: e.has_children,
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u32,
    pub title: String,
    /// Total time in minutes
    pub time: u32,
    /// One of "easy", "medium" or "hard"
    pub difficulty: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Steps in display order
    pub steps: Vec<FfiStepEntry>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id,
            title: r.title.clone(),
            time: r.time,
            difficulty: r.difficulty.to_string(),
            description: r.description.clone(),
            ingredients: r.ingredients.clone(),
            steps: flat_steps(r),
        }
    }
}

fn flat_steps(recipe: &Recipe) -> Vec<FfiStepEntry> {
    render_steps(&recipe.steps, 0)
        .flatten()
        .into_iter()
        .map(FfiStepEntry::from)
        .collect()
}

/// FFI-safe handle to a loaded recipe catalog.
///
/// Filter and sort names are parsed permissively: unknown names show all
/// recipes in catalog order.
#[derive(uniffi::Object)]
pub struct FfiRecipeStore {
    inner: RecipeStore,
}

#[uniffi::export]
impl FfiRecipeStore {
    /// Returns every recipe in catalog order.
    pub fn recipes(&self) -> Vec<FfiRecipe> {
        self.inner.recipes().iter().map(FfiRecipe::from).collect()
    }

    /// Returns the number of recipes.
    pub fn count(&self) -> u32 {
        u32::try_from(self.inner.len()).unwrap_or(u32::MAX)
    }

    /// Gets a recipe by id.
    pub fn get(&self, id: u32) -> Option<FfiRecipe> {
        self.inner.get(id).map(FfiRecipe::from)
    }

    /// Computes the view list: filter, then sort, then search.
    pub fn compute_view(&self, filter: String, sort: String, query: String) -> Vec<FfiRecipe> {
        self.view(&filter, &sort, &query)
            .iter()
            .map(FfiRecipe::from)
            .collect()
    }

    /// Renders the steps of a recipe, or `None` if the id is unknown.
    pub fn render_steps(&self, id: u32) -> Option<Vec<FfiStepEntry>> {
        self.inner.get(id).map(flat_steps)
    }

    /// Renders the view list as recipe card markup.
    pub fn render_cards(
        &self,
        filter: String,
        sort: String,
        query: String,
        favorites: Vec<u32>,
    ) -> String {
        let favorites: HashSet<u32> = favorites.into_iter().collect();
        render_cards(&self.view(&filter, &sort, &query), &favorites)
    }
}

impl FfiRecipeStore {
    fn new(store: RecipeStore) -> Self {
        FfiRecipeStore { inner: store }
    }

    fn view(&self, filter: &str, sort: &str, query: &str) -> Vec<Recipe> {
        compute_view(
            self.inner.recipes(),
            FilterKind::from(filter),
            SortKind::from(sort),
            query,
        )
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Returns a store holding the bundled sample catalog.
#[uniffi::export]
pub fn sample_store() -> Result<Arc<FfiRecipeStore>, RecipeCardsError> {
    Ok(Arc::new(FfiRecipeStore::new(RecipeStore::sample()?)))
}

/// Parses a YAML catalog.
///
/// # Arguments
/// * `content` - A YAML sequence of recipes
#[uniffi::export]
pub fn load_store_yaml(content: String) -> Result<Arc<FfiRecipeStore>, RecipeCardsError> {
    let store = RecipeStore::from_yaml_str(&content)?;
    Ok(Arc::new(FfiRecipeStore::new(store)))
}

/// Parses a JSON catalog.
///
/// # Arguments
/// * `content` - A JSON array of recipes
#[uniffi::export]
pub fn load_store_json(content: String) -> Result<Arc<FfiRecipeStore>, RecipeCardsError> {
    let store = RecipeStore::from_json_str(&content)?;
    Ok(Arc::new(FfiRecipeStore::new(store)))
}

/// Loads a catalog file, or every catalog file under a directory.
///
/// # Arguments
/// * `path` - A `.yaml`, `.yml` or `.json` file, or a directory of them
#[uniffi::export]
pub fn load_store_path(path: String) -> Result<Arc<FfiRecipeStore>, RecipeCardsError> {
    let path = Utf8Path::new(&path);
    let store = if path.is_dir() {
        RecipeStore::from_dir(path)?
    } else {
        RecipeStore::from_path(path)?
    };
    Ok(Arc::new(FfiRecipeStore::new(store)))
}

/// Toggles `id` in a favorites set, returning the new set in ascending order.
#[uniffi::export]
pub fn toggle_favorite(favorites: Vec<u32>, id: u32) -> Vec<u32> {
    let favorites: HashSet<u32> = favorites.into_iter().collect();
    let mut toggled: Vec<u32> = toggle_favorite_internal(favorites, id).into_iter().collect();
    toggled.sort_unstable();
    toggled
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sample_store() {
        let store = sample_store().unwrap();
        assert_eq!(store.count(), 3);
        let salad = store.get(3).unwrap();
        assert_eq!(salad.title, "Greek Salad");
        assert_eq!(salad.difficulty, "easy");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_compute_view_with_names() {
        let store = sample_store().unwrap();

        let view = store.compute_view("quick".into(), "name".into(), "".into());
        let titles: Vec<String> = view.into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Classic Spaghetti Carbonara", "Greek Salad"]);

        let view = store.compute_view("bogus".into(), "bogus".into(), "".into());
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_render_steps_flattened() {
        let store = sample_store().unwrap();
        let steps = store.render_steps(2).unwrap();

        let depths: Vec<u32> = steps.iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 1, 2, 2, 0, 0]);
        assert_eq!(steps[1].text, "Cook curry base");
        assert!(steps[1].has_children);
        assert_eq!(steps[6].text, "Add tomato puree");

        assert!(store.render_steps(42).is_none());
    }

    #[test]
    fn test_render_cards_marks_favorites() {
        let store = sample_store().unwrap();
        let html = store.render_cards("all".into(), "none".into(), "".into(), vec![3]);
        assert_eq!(html.matches("<div class=\"recipe-card").count(), 3);
        assert!(html.contains("<div class=\"recipe-card favorite\" data-id=\"3\">"));
    }

    #[test]
    fn test_load_store_yaml_error() {
        let result = load_store_yaml("- id: 1\n  title: [unclosed".to_string());
        assert!(matches!(result, Err(RecipeCardsError::ParseError { .. })));

        let result = load_store_yaml(
            indoc! {r#"
                - id: 1
                  title: Toast
                  time: 5
                  difficulty: easy
                  steps:
                    - text: Butter
                      substeps: []"#}
            .to_string(),
        );
        assert!(matches!(result, Err(RecipeCardsError::InvalidCatalog { .. })));
    }

    #[test]
    fn test_load_store_path() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        let file = format!("{}/dinner.json", temp_path);
        fs::write(
            &file,
            r#"[{"id": 5, "title": "Stew", "time": 90, "difficulty": "hard"}]"#,
        )
        .unwrap();

        assert_eq!(load_store_path(file).unwrap().count(), 1);
        assert_eq!(load_store_path(temp_path.to_string()).unwrap().count(), 1);
        assert!(matches!(
            load_store_path(format!("{}/missing.toml", temp_path)),
            Err(RecipeCardsError::IoError { .. })
        ));
    }

    #[test]
    fn test_toggle_favorite() {
        assert_eq!(toggle_favorite(vec![3, 1], 2), vec![1, 2, 3]);
        assert_eq!(toggle_favorite(vec![3, 1], 3), vec![1]);
    }

    #[test]
    fn test_step_depth_saturates() {
        let entry = FfiStepEntry::from(FlatEntry {
            depth: usize::MAX,
            text: "Deep".to_string(),
            has_children: false,
        });
        assert_eq!(entry.depth, u32::MAX);
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
