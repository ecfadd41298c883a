//! Command-line front end for browsing a recipe catalog.
//!
//! ```bash
//! recipe-cards --filter quick --sort name
//! recipe-cards --catalog ./recipes --query tomato --format html > cards.html
//! RUST_LOG=debug recipe-cards --favorite 2 --favorites-only
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use recipe_cards::{
    compute_view_for, favorites_only, reduce, render_cards, render_steps, Action, FilterKind,
    OutputFormat, QueryState, Recipe, RecipeStore, SortKind, ViewConfig,
};

#[derive(Debug, Parser)]
#[command(name = "recipe-cards", version, about = "Filter, sort and search a recipe catalog")]
struct Args {
    /// Settings file (defaults to ./recipe-cards.toml if present)
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Catalog file or directory (defaults to the bundled sample)
    #[arg(long)]
    catalog: Option<Utf8PathBuf>,

    /// all, easy, medium, hard or quick
    #[arg(long)]
    filter: Option<String>,

    /// none, name or time
    #[arg(long)]
    sort: Option<String>,

    /// Text to find in titles or ingredients
    #[arg(long, default_value = "")]
    query: String,

    /// Mark a recipe id as favorite (repeatable)
    #[arg(long = "favorite")]
    favorites: Vec<u32>,

    /// Only show favorited recipes
    #[arg(long)]
    favorites_only: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ViewConfig::load_from(path)?,
        None => ViewConfig::load()?,
    };
    debug!("{:?}", config);

    let store = match args.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => load_store(path)?,
        None => RecipeStore::sample()?,
    };

    let mut actions = vec![Action::SetQuery(args.query.clone())];
    if let Some(filter) = &args.filter {
        actions.push(Action::SetFilter(FilterKind::from(filter.as_str())));
    }
    if let Some(sort) = &args.sort {
        actions.push(Action::SetSort(SortKind::from(sort.as_str())));
    }
    actions.extend(args.favorites.iter().copied().map(Action::ToggleFavorite));

    let state = actions
        .into_iter()
        .fold(QueryState::from_config(&config), |state, action| {
            reduce(&state, action)
        });

    let mut view = compute_view_for(store.recipes(), &state);
    if args.favorites_only {
        view = favorites_only(&view, &state.favorites);
    }

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => print!("{}", render_text(&view, &state)),
        OutputFormat::Html => println!("{}", render_cards(&view, &state.favorites)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}

fn load_store(path: &Utf8Path) -> Result<RecipeStore, recipe_cards::StoreError> {
    if path.is_dir() {
        RecipeStore::from_dir(path)
    } else {
        RecipeStore::from_path(path)
    }
}

fn render_text(view: &[Recipe], state: &QueryState) -> String {
    if view.is_empty() {
        return "No recipes match.\n".to_string();
    }

    let mut out = String::new();
    for recipe in view {
        let star = if state.is_favorite(recipe.id) { " ★" } else { "" };
        out.push_str(&format!(
            "{} ({} min, {}){}\n",
            recipe.title, recipe.time, recipe.difficulty, star
        ));
        if !recipe.description.is_empty() {
            out.push_str(&format!("  {}\n", recipe.description));
        }
        if !recipe.ingredients.is_empty() {
            out.push_str(&format!("  Ingredients: {}\n", recipe.ingredients.join(", ")));
        }
        for entry in render_steps(&recipe.steps, 0).flatten() {
            let indent = "  ".repeat(entry.depth + 2);
            out.push_str(&format!("{indent}- {}\n", entry.text));
        }
        out.push('\n');
    }
    out
}
