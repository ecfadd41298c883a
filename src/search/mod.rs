use crate::model::{Difficulty, Recipe};
use crate::state::QueryState;
use log::debug;
use std::collections::HashSet;

mod collate;
mod model;

pub use model::{FilterKind, SortKind};

/// Recipes strictly under this many minutes pass the quick filter.
pub const QUICK_MAX_MINUTES: u32 = 30;

/// Keeps the recipes that match `kind`.
///
/// Difficulty kinds keep exact matches, [`FilterKind::Quick`] keeps recipes
/// under [`QUICK_MAX_MINUTES`], and [`FilterKind::All`] returns the list as is.
/// Catalog order is preserved.
pub fn apply_filter(recipes: &[Recipe], kind: FilterKind) -> Vec<Recipe> {
    let keep = |recipe: &Recipe| match kind {
        FilterKind::All => true,
        FilterKind::Easy => recipe.difficulty == Difficulty::Easy,
        FilterKind::Medium => recipe.difficulty == Difficulty::Medium,
        FilterKind::Hard => recipe.difficulty == Difficulty::Hard,
        FilterKind::Quick => recipe.time < QUICK_MAX_MINUTES,
    };
    recipes.iter().filter(|&r| keep(r)).cloned().collect()
}

/// Returns a sorted copy of `recipes`.
///
/// Both sorts are stable, so recipes that compare equal keep their relative
/// order. [`SortKind::None`] keeps catalog order.
pub fn apply_sort(recipes: &[Recipe], kind: SortKind) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    match kind {
        SortKind::None => {}
        SortKind::Name => sorted.sort_by(|a, b| collate::locale_cmp(&a.title, &b.title)),
        SortKind::Time => sorted.sort_by_key(|r| r.time),
    }
    sorted
}

/// Keeps recipes whose title or any ingredient contains `query`, ignoring case.
///
/// A blank query matches everything. Order is never changed.
pub fn apply_search(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes.to_vec();
    }
    recipes
        .iter()
        .filter(|r| matches_query(r, &query))
        .cloned()
        .collect()
}

/// Checks a recipe against an already lowercased query.
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.title.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query))
}

/// Derives the view list: filter, then sort, then search.
///
/// # Examples
///
/// ```
/// use recipe_cards::{compute_view, FilterKind, RecipeStore, SortKind};
///
/// let store = RecipeStore::sample()?;
/// let view = compute_view(store.recipes(), FilterKind::Easy, SortKind::Name, "feta");
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].title, "Greek Salad");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_view(
    recipes: &[Recipe],
    filter: FilterKind,
    sort: SortKind,
    query: &str,
) -> Vec<Recipe> {
    let filtered = apply_filter(recipes, filter);
    let sorted = apply_sort(&filtered, sort);
    let view = apply_search(&sorted, query);
    debug!(
        "Computed view filter={} sort={} query={:?}: {} of {} recipes",
        filter,
        sort,
        query,
        view.len(),
        recipes.len()
    );
    view
}

/// Derives the view list for the current UI state.
pub fn compute_view_for(recipes: &[Recipe], state: &QueryState) -> Vec<Recipe> {
    compute_view(recipes, state.filter, state.sort, &state.query)
}

/// Narrows a view to favorited recipes, keeping its order.
pub fn favorites_only(recipes: &[Recipe], favorites: &HashSet<u32>) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| favorites.contains(&r.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;

    fn recipe(id: u32, title: &str, time: u32, difficulty: Difficulty) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            time,
            difficulty,
            description: String::new(),
            ingredients: Vec::new(),
            steps: vec![Step::leaf("Cook")],
        }
    }

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    fn setup_recipes() -> Vec<Recipe> {
        let mut pancakes = recipe(1, "Pancakes", 20, Difficulty::Easy);
        pancakes.ingredients = vec!["Flour".to_string(), "Maple Syrup".to_string()];
        let mut stew = recipe(2, "beef stew", 90, Difficulty::Hard);
        stew.ingredients = vec!["Beef".to_string(), "Carrots".to_string()];
        let mut risotto = recipe(3, "Risotto", 40, Difficulty::Medium);
        risotto.ingredients = vec!["Rice".to_string(), "Stock".to_string()];
        let mut waffles = recipe(4, "Waffles", 20, Difficulty::Easy);
        waffles.ingredients = vec!["Flour".to_string(), "Syrup".to_string()];
        vec![pancakes, stew, risotto, waffles]
    }

    #[test]
    fn test_filter_by_difficulty() {
        let recipes = setup_recipes();
        assert_eq!(
            titles(&apply_filter(&recipes, FilterKind::Easy)),
            vec!["Pancakes", "Waffles"]
        );
        assert_eq!(
            titles(&apply_filter(&recipes, FilterKind::Medium)),
            vec!["Risotto"]
        );
        assert_eq!(
            titles(&apply_filter(&recipes, FilterKind::Hard)),
            vec!["beef stew"]
        );
    }

    #[test]
    fn test_filter_quick_is_strictly_under_threshold() {
        let mut recipes = setup_recipes();
        recipes.push(recipe(5, "Omelette", QUICK_MAX_MINUTES, Difficulty::Easy));
        recipes.push(recipe(6, "Toast", 29, Difficulty::Easy));

        assert_eq!(
            titles(&apply_filter(&recipes, FilterKind::Quick)),
            vec!["Pancakes", "Waffles", "Toast"]
        );
    }

    #[test]
    fn test_filter_all_passes_through() {
        let recipes = setup_recipes();
        assert_eq!(apply_filter(&recipes, FilterKind::All), recipes);
        assert_eq!(apply_filter(&recipes, FilterKind::from("unknown")), recipes);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let recipes = setup_recipes();
        assert_eq!(
            titles(&apply_sort(&recipes, SortKind::Name)),
            vec!["beef stew", "Pancakes", "Risotto", "Waffles"]
        );
    }

    #[test]
    fn test_sort_by_time_is_stable() {
        let recipes = setup_recipes();
        assert_eq!(
            titles(&apply_sort(&recipes, SortKind::Time)),
            vec!["Pancakes", "Waffles", "Risotto", "beef stew"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let recipes = setup_recipes();
        let before = recipes.clone();
        let _ = apply_sort(&recipes, SortKind::Name);
        assert_eq!(recipes, before);
        assert_eq!(apply_sort(&recipes, SortKind::None), before);
    }

    #[test]
    fn test_search_title_and_ingredients() {
        let recipes = setup_recipes();
        assert_eq!(
            titles(&apply_search(&recipes, "SYRUP")),
            vec!["Pancakes", "Waffles"]
        );
        assert_eq!(titles(&apply_search(&recipes, "stew")), vec!["beef stew"]);
        assert_eq!(titles(&apply_search(&recipes, "  rice ")), vec!["Risotto"]);
    }

    #[test]
    fn test_search_blank_query_is_identity() {
        let recipes = setup_recipes();
        assert_eq!(apply_search(&recipes, ""), recipes);
        assert_eq!(apply_search(&recipes, "   "), recipes);
    }

    #[test]
    fn test_search_no_matches() {
        let recipes = setup_recipes();
        assert!(apply_search(&recipes, "chocolate").is_empty());
    }

    #[test]
    fn test_compute_view_order() {
        let recipes = setup_recipes();
        let view = compute_view(&recipes, FilterKind::Easy, SortKind::Name, "flour");
        assert_eq!(titles(&view), vec!["Pancakes", "Waffles"]);

        let view = compute_view(&recipes, FilterKind::All, SortKind::Time, "");
        assert_eq!(
            titles(&view),
            vec!["Pancakes", "Waffles", "Risotto", "beef stew"]
        );
    }

    #[test]
    fn test_compute_view_for_state() {
        let recipes = setup_recipes();
        let state = QueryState {
            filter: FilterKind::Quick,
            sort: SortKind::Name,
            query: "waff".to_string(),
            ..QueryState::default()
        };
        assert_eq!(titles(&compute_view_for(&recipes, &state)), vec!["Waffles"]);
    }

    #[test]
    fn test_favorites_only() {
        let recipes = setup_recipes();
        let favorites = HashSet::from([4, 2]);
        assert_eq!(
            titles(&favorites_only(&recipes, &favorites)),
            vec!["beef stew", "Waffles"]
        );
    }
}
