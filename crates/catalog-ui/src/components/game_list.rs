//! Game list — skeletons, error panel, empty state, or the card grid.

use dioxus::prelude::*;
use catalog_core::list_state::GameListState;
use catalog_core::view::{CatalogView, EMPTY_MESSAGE};

use super::game_card::{GameCard, SkeletonCard};
use super::pagination_bar::PaginationBar;

const GRID_CLASS: &str = "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3";

#[component]
pub fn GameList(state: Signal<GameListState>) -> Element {
    let gs = state.read();
    let go_to_input = gs.go_to_input.clone();

    match gs.view() {
        CatalogView::Loading { skeletons } => rsx! {
            div { class: GRID_CLASS,
                for i in 0..skeletons {
                    SkeletonCard { key: "{i}" }
                }
            }
        },
        CatalogView::Error { message } => rsx! {
            div { class: "bg-primary/10 border border-primary/40 text-primary rounded-xl p-4 text-center",
                "data-testid": "error-message",
                "{message}"
            }
        },
        CatalogView::Empty => rsx! {
            div { class: "text-center py-12 text-foreground/60",
                "data-testid": "empty-state",
                "{EMPTY_MESSAGE}"
            }
        },
        CatalogView::Populated {
            games,
            summary,
            pagination,
        } => rsx! {
            div { class: "flex flex-col gap-6",
                p { class: "text-sm text-foreground/60",
                    "data-testid": "pagination-summary",
                    "{summary}"
                }
                div { class: GRID_CLASS,
                    "data-testid": "games-grid",
                    for game in games {
                        GameCard { key: "{game.id}", game: game.clone() }
                    }
                }
                if let Some(bar) = pagination {
                    PaginationBar { view: bar, go_to_input }
                }
            }
        },
    }
}
