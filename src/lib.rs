pub mod config;
pub mod ffi;
pub mod model;
pub mod render;
pub mod search;
pub mod state;
pub mod store;
pub mod tree;

pub use crate::config::{OutputFormat, ViewConfig};
pub use model::*;
pub use render::{render_card, render_cards, render_step_tree, toggle_label, Panel};
pub use search::{
    apply_filter, apply_search, apply_sort, compute_view, compute_view_for, favorites_only,
    FilterKind, SortKind, QUICK_MAX_MINUTES,
};
pub use state::{reduce, toggle_favorite, Action, QueryState};
pub use store::{RecipeStore, StoreError};
pub use tree::{render_steps, DisplayEntry, DisplayTree, FlatEntry};

uniffi::setup_scaffolding!();
