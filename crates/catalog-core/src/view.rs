//! Render model derived from [`GameListState`].
//!
//! Exactly one branch is active at a time, chosen in the order
//! loading, error, empty, populated.

use std::ops::RangeInclusive;

use crate::list_state::GameListState;
use crate::model::Game;
use crate::pagination;

/// Number of placeholder cards shown while loading.
pub const SKELETON_CARDS: usize = 6;

/// Text of the empty-state panel.
pub const EMPTY_MESSAGE: &str = "No games available at the moment.";

/// What the pagination bar should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub window: RangeInclusive<u32>,
}

impl PaginationView {
    pub fn info_text(&self) -> String {
        pagination::page_info_text(self.current_page, self.total_pages)
    }
}

/// Branch of the game list to render.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading { skeletons: usize },
    Error { message: String },
    Empty,
    Populated {
        games: Vec<Game>,
        summary: String,
        /// Absent when everything fits on one page.
        pagination: Option<PaginationView>,
    },
}

impl CatalogView {
    pub fn of(state: &GameListState) -> Self {
        if state.loading {
            return CatalogView::Loading {
                skeletons: SKELETON_CARDS,
            };
        }
        if let Some(message) = &state.error {
            return CatalogView::Error {
                message: message.clone(),
            };
        }
        if state.games.is_empty() {
            return CatalogView::Empty;
        }

        let pagination = (state.total_pages > 1).then(|| PaginationView {
            current_page: state.current_page,
            total_pages: state.total_pages,
            previous_disabled: !pagination::has_previous(state.current_page),
            next_disabled: !pagination::has_next(state.current_page, state.total_pages),
            window: pagination::page_window(state.current_page, state.total_pages),
        });

        CatalogView::Populated {
            games: state.games.clone(),
            summary: pagination::summary_text(state.current_page, state.per_page, state.total),
            pagination,
        }
    }
}
