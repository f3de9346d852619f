//! Pagination bar — previous/next, numbered pages, go-to-page field.

use dioxus::prelude::*;
use catalog_core::view::PaginationView;

use crate::UiMessage;

#[component]
pub fn PaginationBar(view: PaginationView, go_to_input: String) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let current = view.current_page;
    let total_pages = view.total_pages;
    let info = view.info_text();

    rsx! {
        nav { class: "flex flex-col items-center gap-4 mt-8",
            "data-testid": "pagination",
            "aria-label": "Game list pages",

            div { class: "flex items-center gap-2",
                button {
                    class: "px-3 py-2 rounded-lg bg-surface hover:bg-muted text-foreground font-semibold transition disabled:opacity-40 disabled:cursor-not-allowed",
                    "data-testid": "pagination-previous",
                    disabled: view.previous_disabled,
                    onclick: move |_| coroutine.send(UiMessage::Previous),
                    "Previous"
                }

                for page in view.window.clone() {
                    button {
                        key: "{page}",
                        class: "w-10 h-10 rounded-lg font-semibold transition {page_style(page == current)}",
                        "data-testid": "page-button-{page}",
                        "aria-current": if page == current { "page" } else { "false" },
                        onclick: move |_| coroutine.send(UiMessage::GoToPage(page)),
                        "{page}"
                    }
                }

                button {
                    class: "px-3 py-2 rounded-lg bg-surface hover:bg-muted text-foreground font-semibold transition disabled:opacity-40 disabled:cursor-not-allowed",
                    "data-testid": "pagination-next",
                    disabled: view.next_disabled,
                    onclick: move |_| coroutine.send(UiMessage::Next),
                    "Next"
                }
            }

            div { class: "flex items-center gap-3 text-sm text-foreground/70",
                span { "data-testid": "pagination-info", "{info}" }

                // Go to page
                div { class: "flex items-center gap-2",
                    input {
                        class: "bg-surface rounded-lg px-3 py-1.5 w-20 text-foreground outline-none focus:ring-2 focus:ring-primary",
                        "data-testid": "go-to-page-input",
                        r#type: "text",
                        "inputmode": "numeric",
                        placeholder: "1-{total_pages}",
                        value: "{go_to_input}",
                        oninput: move |e| coroutine.send(UiMessage::GoToInput(e.value())),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                coroutine.send(UiMessage::SubmitGoTo);
                            }
                        },
                    }
                    button {
                        class: "px-3 py-1.5 rounded-lg bg-primary hover:brightness-110 text-white font-semibold transition",
                        "data-testid": "go-to-page-button",
                        onclick: move |_| coroutine.send(UiMessage::SubmitGoTo),
                        "Go"
                    }
                }
            }
        }
    }
}

fn page_style(is_current: bool) -> &'static str {
    if is_current {
        "bg-primary text-white"
    } else {
        "bg-surface hover:bg-muted text-foreground"
    }
}
