//! One-shot catalog requests for the terminal.
//!
//! Drives the same [`CatalogController`] the web app uses, with an
//! in-memory URL standing in for the address bar.

use std::error::Error;

use catalog_client::api::ApiConfig;
use catalog_client::controller::CatalogController;
use catalog_client::http::HttpGamesApi;
use catalog_client::url_sync::MemoryUrl;

use crate::render;

/// Fetch `page` and render it as text.
pub async fn list_page(config: ApiConfig, page: u32) -> Result<String, Box<dyn Error>> {
    let per_page = config.per_page;
    let api = HttpGamesApi::new(config)?;
    let url = MemoryUrl::with_search(&format!("page={page}"));
    let mut ctrl = CatalogController::new(api, url.clone(), per_page);

    ctrl.mount().await;
    if let Some(message) = &ctrl.state().error {
        return Err(message.clone().into());
    }

    Ok(render::render_view(&ctrl.state().view(), &url.search()))
}

/// Fetch one game and render its details.
pub async fn show_game(config: ApiConfig, id: u64) -> Result<String, Box<dyn Error>> {
    let per_page = config.per_page;
    let api = HttpGamesApi::new(config)?;
    let ctrl = CatalogController::new(api, MemoryUrl::default(), per_page);
    let game = ctrl.game(id).await?;
    Ok(render::render_game(&game))
}
