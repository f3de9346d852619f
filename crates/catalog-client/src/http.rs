//! HTTP implementation of [`GamesApi`].
//!
//! Native builds go through `reqwest`; WASM builds use `gloo-net`'s
//! wrapper around the browser's `fetch`. Both map failures the same way:
//! non-2xx responses become [`FetchError::Http`], anything that kept a
//! response from arriving becomes [`FetchError::Transport`], and bodies
//! that are not the expected JSON become [`FetchError::Decode`].

use catalog_core::error::FetchError;
use catalog_core::model::{Game, GamePage};
use serde::de::DeserializeOwned;

use crate::api::{ApiConfig, GamesApi};

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// Native (reqwest)
// ---------------------------------------------------------------------------

/// Catalog client speaking plain HTTP.
#[cfg(feature = "native")]
#[derive(Clone, Debug)]
pub struct HttpGamesApi {
    client: reqwest::Client,
    config: ApiConfig,
}

#[cfg(feature = "native")]
impl HttpGamesApi {
    /// Build a client with the configured timeouts.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode(&body)
    }
}

#[cfg(feature = "native")]
impl GamesApi for HttpGamesApi {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<GamePage, FetchError> {
        self.get(&self.config.page_url(page, per_page)).await
    }

    async fn fetch_game(&self, id: u64) -> Result<Game, FetchError> {
        self.get(&self.config.game_url(id)).await
    }
}

// ---------------------------------------------------------------------------
// WASM (gloo-net)
// ---------------------------------------------------------------------------

/// Catalog client using the browser's `fetch`.
#[cfg(all(feature = "web", not(feature = "native")))]
#[derive(Clone, Debug)]
pub struct HttpGamesApi {
    config: ApiConfig,
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl HttpGamesApi {
    /// Timeouts are left to the browser.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Ok(Self { config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        use gloo_net::http::Request;

        tracing::debug!(%url, "GET");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode(&body)
    }
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl GamesApi for HttpGamesApi {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<GamePage, FetchError> {
        self.get(&self.config.page_url(page, per_page)).await
    }

    async fn fetch_game(&self, id: u64) -> Result<Game, FetchError> {
        self.get(&self.config.game_url(id)).await
    }
}
