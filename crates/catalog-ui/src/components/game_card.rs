//! Game card rendering helpers.

use dioxus::prelude::*;
use catalog_core::model::Game;

/// Render a single game as a link to its detail page.
#[component]
pub fn GameCard(game: Game) -> Element {
    let href = game.detail_path();
    let rating = game.rating_label();

    rsx! {
        a {
            class: "group block bg-surface rounded-xl overflow-hidden shadow-lg border border-muted/50 hover:border-primary/60 transition",
            href: "{href}",
            "data-testid": "game-card",
            "data-game-id": "{game.id}",
            "data-game-title": "{game.title}",
            div { class: "p-6 flex flex-col gap-2",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "text-xl font-semibold text-foreground group-hover:text-primary transition",
                        "data-testid": "game-title",
                        "{game.title}"
                    }
                    if let Some(rating) = rating {
                        span { class: "text-accent text-sm font-semibold whitespace-nowrap",
                            "data-testid": "game-rating",
                            "★ {rating}"
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2 text-xs",
                    if let Some(category) = &game.category {
                        span { class: "px-2 py-1 rounded-full bg-primary/20 text-primary",
                            "data-testid": "game-category",
                            "{category.name}"
                        }
                    }
                    if let Some(publisher) = &game.publisher {
                        span { class: "px-2 py-1 rounded-full bg-muted/40 text-foreground/80",
                            "data-testid": "game-publisher",
                            "{publisher.name}"
                        }
                    }
                }
                p { class: "text-foreground/70 text-sm line-clamp-3",
                    "data-testid": "game-description",
                    "{game.description}"
                }
            }
        }
    }
}

/// Render a placeholder card while a page is loading.
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "bg-surface rounded-xl overflow-hidden shadow-lg animate-pulse",
            "data-testid": "loading-skeleton",
            div { class: "p-6 flex flex-col gap-3",
                div { class: "h-6 bg-muted/50 rounded w-3/4" }
                div { class: "h-4 bg-muted/40 rounded w-1/2" }
                div { class: "h-4 bg-muted/30 rounded w-full" }
                div { class: "h-4 bg-muted/30 rounded w-5/6" }
            }
        }
    }
}
