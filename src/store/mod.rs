//! Recipe catalog loading.
//!
//! This module provides the in-memory recipe list every view is derived
//! from. A store is built once, validated, and then only read. Catalogs are
//! YAML or JSON sequences of recipes; a directory may hold several catalog
//! files which are concatenated in path order.

use crate::model::{Recipe, StepError};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::collections::HashSet;
use thiserror::Error;

const SAMPLE_CATALOG: &str = include_str!("sample.yaml");

const CATALOG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Errors that can occur when loading a recipe catalog.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Recipe {title:?} has id 0, ids must be positive")]
    InvalidId { title: String },

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    #[error("Recipe {recipe_id} has a malformed step tree: {source}")]
    MalformedStep {
        recipe_id: u32,
        #[source]
        source: StepError,
    },
}

/// An ordered, validated list of recipes.
///
/// # Examples
///
/// ```
/// use recipe_cards::RecipeStore;
///
/// let store = RecipeStore::sample()?;
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.get(3).map(|r| r.title.as_str()), Some("Greek Salad"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Creates a store from already built recipes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an id is zero or repeated, or if a step group
    /// has no substeps.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, StoreError> {
        validate(&recipes)?;
        Ok(RecipeStore { recipes })
    }

    /// Returns the bundled sample catalog.
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_yaml_str(SAMPLE_CATALOG)
    }

    /// Parses a YAML sequence of recipes.
    pub fn from_yaml_str(content: &str) -> Result<Self, StoreError> {
        let recipes: Vec<Recipe> = serde_yaml::from_str(content)?;
        debug!("Parsed {} recipes from YAML catalog", recipes.len());
        Self::new(recipes)
    }

    /// Parses a JSON array of recipes.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        let recipes: Vec<Recipe> = serde_json::from_str(content)?;
        debug!("Parsed {} recipes from JSON catalog", recipes.len());
        Self::new(recipes)
    }

    /// Loads a single catalog file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, `.json` as JSON.
    pub fn from_path(path: &Utf8Path) -> Result<Self, StoreError> {
        Self::new(read_catalog(path)?)
    }

    /// Loads every catalog file under `base_dir`, recursively.
    ///
    /// Files are read in path order and their recipes concatenated, so ids
    /// must be unique across the whole directory.
    pub fn from_dir(base_dir: &Utf8Path) -> Result<Self, StoreError> {
        if !base_dir.is_dir() {
            return Err(StoreError::DirectoryNotFound(base_dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        for ext in CATALOG_EXTENSIONS {
            let pattern = base_dir.join(format!("**/*.{ext}"));
            for entry in glob::glob(pattern.as_str())? {
                let path = entry?;
                let path = Utf8PathBuf::from_path_buf(path)
                    .map_err(|p| StoreError::InvalidPath(p.display().to_string()))?;
                paths.push(path);
            }
        }
        paths.sort();

        let mut recipes = Vec::new();
        for path in &paths {
            recipes.extend(read_catalog(path)?);
        }
        debug!(
            "Loaded {} recipes from {} catalog files in {}",
            recipes.len(),
            paths.len(),
            base_dir
        );

        Self::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn read_catalog(path: &Utf8Path) -> Result<Vec<Recipe>, StoreError> {
    let content = std::fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = match path.extension() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => return Err(StoreError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!("Read {} recipes from {}", recipes.len(), path);
    Ok(recipes)
}

fn validate(recipes: &[Recipe]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if recipe.id == 0 {
            return Err(StoreError::InvalidId {
                title: recipe.title.clone(),
            });
        }
        if !seen.insert(recipe.id) {
            return Err(StoreError::DuplicateId(recipe.id));
        }
        recipe
            .validate_steps()
            .map_err(|source| StoreError::MalformedStep {
                recipe_id: recipe.id,
                source,
            })?;
    }
    Ok(())
}
