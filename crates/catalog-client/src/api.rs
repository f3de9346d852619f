//! The games endpoint as seen by the controller.
//!
//! [`GamesApi`] keeps the controller independent of the HTTP stack; the
//! real implementation lives in [`crate::http`], tests use an in-memory
//! catalog.

use std::future::Future;
use std::time::Duration;

use catalog_core::error::FetchError;
use catalog_core::model::{DEFAULT_PER_PAGE, Game, GamePage, games_query, normalize_per_page};

/// Read access to the catalog backend.
pub trait GamesApi {
    /// `GET /api/games?page={page}&per_page={per_page}`.
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<GamePage, FetchError>>;

    /// `GET /api/games/{id}`.
    fn fetch_game(&self, id: u64) -> impl Future<Output = Result<Game, FetchError>>;
}

/// Where the catalog API lives and how to talk to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin (and optional prefix) the `/api/...` paths are appended to.
    /// Empty means "same origin".
    pub base_url: String,
    /// Games per page, kept within the range the backend accepts.
    pub per_page: u32,
    /// Connection timeout for native clients.
    pub connect_timeout: Duration,
    /// Whole-request timeout for native clients.
    pub read_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            per_page: DEFAULT_PER_PAGE,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default settings.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set the page size. Values the backend would reject fall back to the
    /// default size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = normalize_per_page(per_page);
        self
    }

    /// Set timeouts.
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Full URL of one list page.
    pub fn page_url(&self, page: u32, per_page: u32) -> String {
        format!("{}/api/games?{}", self.base_url, games_query(page, per_page))
    }

    /// Full URL of one game.
    pub fn game_url(&self, id: u64) -> String {
        format!("{}/api/games/{id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:5100/");
        assert_eq!(
            config.page_url(2, 20),
            "http://localhost:5100/api/games?page=2&per_page=20"
        );
        assert_eq!(config.game_url(9), "http://localhost:5100/api/games/9");
    }

    #[test]
    fn same_origin_by_default() {
        let config = ApiConfig::default();
        assert_eq!(config.page_url(1, 20), "/api/games?page=1&per_page=20");
    }

    #[test]
    fn page_size_is_normalized() {
        assert_eq!(ApiConfig::default().with_per_page(12).per_page, 12);
        assert_eq!(ApiConfig::default().with_per_page(0).per_page, 20);
        assert_eq!(ApiConfig::default().with_per_page(500).per_page, 20);
    }
}
