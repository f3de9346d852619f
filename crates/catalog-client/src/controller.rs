//! Framework-agnostic game list controller.
//!
//! Owns a [`GamesApi`], a [`UrlSync`] and the [`GameListState`], and is
//! the single place that mutates the state:
//!
//! - Starting page requests and committing their results.
//! - Rewriting the URL after every successful load.
//! - Turning previous / next / go-to actions into requests, or nothing
//!   when the target is out of range.
//!
//! Frontends that render while requests are in flight use
//! [`CatalogController::start`] + [`CatalogController::finish`]; simpler
//! callers just `await` [`CatalogController::load`] and friends.

use futures_util::future::LocalBoxFuture;

use catalog_core::error::FetchError;
use catalog_core::list_state::{FetchOutcome, FetchTicket, GameListState};
use catalog_core::model::{Game, GamePage};

use crate::api::GamesApi;
use crate::url_sync::UrlSync;

/// A settled page request, ready for [`CatalogController::finish`].
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: Result<GamePage, FetchError>,
}

/// An in-flight page request. Owns everything it needs, so several can be
/// polled at once without borrowing the controller.
pub type PendingFetch = LocalBoxFuture<'static, FetchCompletion>;

/// Owns the API client, the URL adapter and the list state.
pub struct CatalogController<A, U> {
    api: A,
    url: U,
    state: GameListState,
}

impl<A, U> CatalogController<A, U>
where
    A: GamesApi + Clone + 'static,
    U: UrlSync,
{
    pub fn new(api: A, url: U, per_page: u32) -> Self {
        Self {
            api,
            url,
            state: GameListState::new(per_page),
        }
    }

    /// Borrow the list state.
    pub fn state(&self) -> &GameListState {
        &self.state
    }

    /// Page the URL asked for when the list was opened.
    pub fn initial_page(&self) -> u32 {
        self.url.initial_page()
    }

    // ------------------------------------------------------------------
    // Request lifecycle
    // ------------------------------------------------------------------

    /// Mark `page` as loading and return the request future.
    pub fn start(&mut self, page: u32) -> PendingFetch {
        let ticket = self.state.begin_fetch(page);
        let per_page = self.state.per_page;
        let api = self.api.clone();
        tracing::debug!(page, seq = ticket.seq, "requesting games page");

        Box::pin(async move {
            let result = api.fetch_page(page, per_page).await;
            FetchCompletion { ticket, result }
        })
    }

    /// Commit a settled request and sync the URL if it loaded.
    pub fn finish(&mut self, done: FetchCompletion) -> FetchOutcome {
        let ticket = done.ticket;
        let outcome = self.state.apply_result(ticket, done.result);
        match &outcome {
            FetchOutcome::Loaded { page } => {
                self.url.replace_page(*page);
                tracing::debug!(page, total = self.state.total, "games page loaded");
            }
            FetchOutcome::Failed => {
                tracing::warn!(
                    page = ticket.page,
                    error = self.state.error.as_deref().unwrap_or_default(),
                    "games page request failed"
                );
            }
            FetchOutcome::Superseded => {
                tracing::debug!(page = ticket.page, seq = ticket.seq, "dropping stale response");
            }
        }
        outcome
    }

    /// Fetch `page` and wait for it.
    pub async fn load(&mut self, page: u32) -> FetchOutcome {
        let done = self.start(page).await;
        self.finish(done)
    }

    /// Load whatever page the URL names.
    pub async fn mount(&mut self) -> FetchOutcome {
        let page = self.initial_page();
        self.load(page).await
    }

    // ------------------------------------------------------------------
    // Navigation: request_* start a fetch, the async forms also await it
    // ------------------------------------------------------------------

    pub fn request_previous(&mut self) -> Option<PendingFetch> {
        let page = self.state.previous_target()?;
        Some(self.start(page))
    }

    pub fn request_next(&mut self) -> Option<PendingFetch> {
        let page = self.state.next_target()?;
        Some(self.start(page))
    }

    /// Jump straight to `page`; out-of-range pages are ignored.
    pub fn request_page(&mut self, page: u32) -> Option<PendingFetch> {
        let page = self.state.go_to_target(page)?;
        Some(self.start(page))
    }

    /// Submit the "go to page" field. Invalid input is ignored and kept.
    pub fn request_go_to(&mut self) -> Option<PendingFetch> {
        let page = self.state.take_go_to_input()?;
        Some(self.start(page))
    }

    pub fn set_go_to_input(&mut self, text: impl Into<String>) {
        self.state.set_go_to_input(text);
    }

    pub async fn previous(&mut self) -> Option<FetchOutcome> {
        let pending = self.request_previous()?;
        Some(self.settle(pending).await)
    }

    pub async fn next(&mut self) -> Option<FetchOutcome> {
        let pending = self.request_next()?;
        Some(self.settle(pending).await)
    }

    pub async fn go_to_page(&mut self, page: u32) -> Option<FetchOutcome> {
        let pending = self.request_page(page)?;
        Some(self.settle(pending).await)
    }

    pub async fn submit_go_to(&mut self) -> Option<FetchOutcome> {
        let pending = self.request_go_to()?;
        Some(self.settle(pending).await)
    }

    /// Fetch a single game. Does not touch the list state.
    pub async fn game(&self, id: u64) -> Result<Game, FetchError> {
        self.api.fetch_game(id).await
    }

    async fn settle(&mut self, pending: PendingFetch) -> FetchOutcome {
        let done = pending.await;
        self.finish(done)
    }
}
