//! UI query state and its transitions.
//!
//! The host UI owns a single [`QueryState`] value. Every event is turned into
//! an [`Action`] and folded in with [`reduce`], which returns the next state
//! without touching the previous one. The view is then recomputed from the
//! new state with [`compute_view_for`](crate::compute_view_for).

use crate::config::ViewConfig;
use crate::search::{FilterKind, SortKind};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current filter, sort, search text and favorites of a recipe list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub filter: FilterKind,
    pub sort: SortKind,
    pub query: String,
    pub favorites: HashSet<u32>,
}

/// A UI event that changes the query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetFilter(FilterKind),
    SetSort(SortKind),
    SetQuery(String),
    ToggleFavorite(u32),
    /// Back to the default state, dropping favorites
    Reset,
}

impl QueryState {
    /// Builds the initial state from configured defaults.
    pub fn from_config(config: &ViewConfig) -> Self {
        QueryState {
            filter: config.default_filter,
            sort: config.default_sort,
            ..QueryState::default()
        }
    }

    /// Whether the button for `filter` should be highlighted.
    pub fn is_active_filter(&self, filter: FilterKind) -> bool {
        self.filter == filter
    }

    /// Whether the button for `sort` should be highlighted.
    pub fn is_active_sort(&self, sort: SortKind) -> bool {
        self.sort == sort
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }
}

/// Applies `action` to `state`, returning the next state.
pub fn reduce(state: &QueryState, action: Action) -> QueryState {
    trace!("Reducing {:?}", action);
    let mut next = state.clone();
    match action {
        Action::SetFilter(filter) => next.filter = filter,
        Action::SetSort(sort) => next.sort = sort,
        Action::SetQuery(query) => next.query = query,
        Action::ToggleFavorite(id) => next.favorites = toggle_favorite(next.favorites, id),
        Action::Reset => next = QueryState::default(),
    }
    next
}

/// Removes `id` from `favorites` if present, otherwise inserts it.
pub fn toggle_favorite(mut favorites: HashSet<u32>, id: u32) -> HashSet<u32> {
    if !favorites.remove(&id) {
        favorites.insert(id);
    }
    favorites
}
