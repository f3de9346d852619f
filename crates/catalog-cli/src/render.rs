//! Plain-text rendering of the catalog views.

use catalog_core::model::Game;
use catalog_core::view::{CatalogView, EMPTY_MESSAGE, PaginationView};

/// Render whichever branch `view` selects, followed by the canonical URL.
pub fn render_view(view: &CatalogView, search: &str) -> String {
    let mut out = match view {
        CatalogView::Loading { .. } => "Loading…\n".to_string(),
        CatalogView::Error { message } => format!("Error: {message}\n"),
        CatalogView::Empty => format!("{EMPTY_MESSAGE}\n"),
        CatalogView::Populated {
            games,
            summary,
            pagination,
        } => {
            let mut out = format!("{summary}\n\n");
            for game in games {
                out.push_str(&game_line(game));
            }
            if let Some(bar) = pagination {
                out.push_str(&format!("\n{}\n", pagination_line(bar)));
            }
            out
        }
    };

    if search.is_empty() {
        out.push_str("URL: /\n");
    } else {
        out.push_str(&format!("URL: /?{search}\n"));
    }
    out
}

/// Full description of a single game.
pub fn render_game(game: &Game) -> String {
    let mut out = format!("{game}\n");
    if let Some(category) = &game.category {
        out.push_str(&format!("Category:  {}\n", category.name));
    }
    if let Some(publisher) = &game.publisher {
        out.push_str(&format!("Publisher: {}\n", publisher.name));
    }
    if let Some(rating) = game.rating_label() {
        out.push_str(&format!("Rating:    ★ {rating}\n"));
    }
    out.push_str(&format!("\n{}\n", game.description));
    out
}

fn game_line(game: &Game) -> String {
    let mut line = format!("  {game}");
    if let Some(rating) = game.rating_label() {
        line.push_str(&format!("  ★ {rating}"));
    }
    line.push('\n');

    let tags: Vec<&str> = [
        game.category.as_ref().map(|c| c.name.as_str()),
        game.publisher.as_ref().map(|p| p.name.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !tags.is_empty() {
        line.push_str(&format!("      {}\n", tags.join(" · ")));
    }
    line
}

fn pagination_line(bar: &PaginationView) -> String {
    let pages: Vec<String> = bar
        .window
        .clone()
        .map(|page| {
            if page == bar.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("{}   {}", pages.join(" "), bar.info_text())
}
