//! State container for the game list.
//!
//! All mutations go through methods on [`GameListState`]; frontends clone
//! the state into whatever reactive cell they render from and call
//! [`GameListState::view`] to decide what to draw.

use crate::error::FetchError;
use crate::model::{Game, GamePage, normalize_per_page};
use crate::pagination;
use crate::view::CatalogView;

/// Handle for one issued page request.
///
/// Tickets increase monotonically; only the newest one may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
}

/// What applying a completed request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New page committed. The address bar should now show `page`.
    Loaded { page: u32 },
    /// The request failed; the previous page is still in place.
    Failed,
    /// A newer request was issued after this one, so it was discarded.
    Superseded,
}

/// Everything the game list renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct GameListState {
    pub games: Vec<Game>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub per_page: u32,
    /// Raw text of the "go to page" field.
    pub go_to_input: String,
    /// Sequence number of the newest issued request.
    latest_seq: u64,
}

impl GameListState {
    /// Fresh state, loading until the first request completes.
    pub fn new(per_page: u32) -> Self {
        Self {
            games: Vec::new(),
            loading: true,
            error: None,
            current_page: 1,
            total_pages: 0,
            total: 0,
            per_page: normalize_per_page(per_page),
            go_to_input: String::new(),
            latest_seq: 0,
        }
    }

    // -- requests ----------------------------------------------------------

    /// Mark a request for `page` as started and return its ticket.
    ///
    /// Clears any previous error; `loading` stays set until the newest
    /// request settles.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            seq: self.latest_seq,
            page,
        }
    }

    /// Whether `ticket` belongs to the newest request.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Commit the result of a request.
    ///
    /// Success replaces the games and pagination fields in one step. Failure
    /// records the error message and leaves the last good page alone.
    pub fn apply_result(
        &mut self,
        ticket: FetchTicket,
        result: Result<GamePage, FetchError>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Superseded;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.games = page.data;
                self.current_page = page.page;
                self.total_pages = page.total_pages;
                self.total = page.total;
                self.per_page = page.per_page;
                self.error = None;
                FetchOutcome::Loaded {
                    page: self.current_page,
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    // -- navigation targets ------------------------------------------------

    /// Page to fetch for "previous", if any.
    pub fn previous_target(&self) -> Option<u32> {
        pagination::has_previous(self.current_page).then(|| self.current_page - 1)
    }

    /// Page to fetch for "next", if any.
    pub fn next_target(&self) -> Option<u32> {
        pagination::has_next(self.current_page, self.total_pages).then(|| self.current_page + 1)
    }

    /// Page to fetch for a direct jump, if `page` is in range.
    pub fn go_to_target(&self, page: u32) -> Option<u32> {
        pagination::in_range(page, self.total_pages).then_some(page)
    }

    /// Replace the raw "go to page" text.
    pub fn set_go_to_input(&mut self, text: impl Into<String>) {
        self.go_to_input = text.into();
    }

    /// Validate the "go to page" text. On success the field is cleared and
    /// the target page returned; otherwise the text is left as typed.
    pub fn take_go_to_input(&mut self) -> Option<u32> {
        let page = pagination::parse_page_input(&self.go_to_input, self.total_pages)?;
        self.go_to_input.clear();
        Some(page)
    }

    // -- rendering ---------------------------------------------------------

    /// Which branch to render right now.
    pub fn view(&self) -> CatalogView {
        CatalogView::of(self)
    }
}

impl Default for GameListState {
    fn default() -> Self {
        Self::new(crate::model::DEFAULT_PER_PAGE)
    }
}
