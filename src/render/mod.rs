//! HTML markup for recipe cards.
//!
//! The markup matches what the host stylesheet and event delegation expect:
//! every card is a `.recipe-card` carrying `data-id`, the steps and
//! ingredients panels start hidden, and their toggle buttons carry
//! `data-id`/`data-type` so one click handler on the container can find the
//! panel to show. Output always replaces the whole container, so panels come
//! back collapsed after every recompute.

use crate::model::Recipe;
use crate::tree::{render_steps, DisplayTree};
use html_escape::encode_text;
use std::collections::HashSet;
use std::fmt::Write;

/// An expandable section of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Steps,
    Ingredients,
}

impl Panel {
    /// Value of the `data-type` attribute and prefix of the container class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Steps => "steps",
            Panel::Ingredients => "ingredients",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Panel::Steps => "Steps",
            Panel::Ingredients => "Ingredients",
        }
    }
}

/// Label for a panel's toggle button, given whether the panel is hidden.
pub fn toggle_label(panel: Panel, hidden: bool) -> String {
    if hidden {
        format!("Show {}", panel.title())
    } else {
        format!("Hide {}", panel.title())
    }
}

/// Renders a display tree as nested lists, one `<ul>` per depth level.
pub fn render_step_tree(tree: &DisplayTree) -> String {
    let mut html = String::new();
    write_step_tree(&mut html, tree);
    html
}

fn write_step_tree(html: &mut String, tree: &DisplayTree) {
    let _ = write!(html, "<ul class=\"step-level-{}\">", tree.depth);
    for entry in &tree.entries {
        html.push_str("<li>");
        html.push_str(&encode_text(&entry.text));
        if let Some(children) = &entry.children {
            write_step_tree(html, children);
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
}

/// Renders one recipe card.
pub fn render_card(recipe: &Recipe, favorite: bool) -> String {
    let id = recipe.id;
    let mut html = String::new();

    let class = if favorite {
        "recipe-card favorite"
    } else {
        "recipe-card"
    };
    let _ = write!(html, "<div class=\"{class}\" data-id=\"{id}\">");
    let _ = write!(html, "<h3>{}</h3>", encode_text(&recipe.title));

    html.push_str("<div class=\"recipe-meta\">");
    let _ = write!(html, "<span>⏱️ {} min</span>", recipe.time);
    let _ = write!(
        html,
        "<span class=\"difficulty {0}\">{0}</span>",
        recipe.difficulty
    );
    html.push_str("</div>");

    let _ = write!(html, "<p>{}</p>", encode_text(&recipe.description));

    let _ = write!(
        html,
        "<button class=\"favorite-btn\" data-id=\"{id}\">{}</button>",
        if favorite { "★" } else { "☆" }
    );
    for panel in [Panel::Steps, Panel::Ingredients] {
        let _ = write!(
            html,
            "<button class=\"toggle-btn\" data-id=\"{id}\" data-type=\"{}\">{}</button>",
            panel.as_str(),
            toggle_label(panel, true)
        );
    }

    let _ = write!(html, "<div class=\"steps-container hidden\" data-id=\"{id}\">");
    html.push_str(&render_step_tree(&render_steps(&recipe.steps, 0)));
    html.push_str("</div>");

    let _ = write!(
        html,
        "<div class=\"ingredients-container hidden\" data-id=\"{id}\"><ul>"
    );
    for ingredient in &recipe.ingredients {
        let _ = write!(html, "<li>{}</li>", encode_text(ingredient));
    }
    html.push_str("</ul></div>");

    html.push_str("</div>");
    html
}

/// Renders the whole view list, replacing any prior output.
pub fn render_cards(view: &[Recipe], favorites: &HashSet<u32>) -> String {
    view.iter()
        .map(|recipe| render_card(recipe, favorites.contains(&recipe.id)))
        .collect()
}

/// CSS selector of a card's panel, as used by the toggle click handler.
pub fn panel_selector(panel: Panel, id: u32) -> String {
    format!(".{}-container[data-id=\"{id}\"]", panel.as_str())
}
