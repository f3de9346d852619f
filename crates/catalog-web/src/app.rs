//! Root application component for the web frontend.
//!
//! Builds the HTTP client and address-bar adapter, hands them to the
//! shared game list session, and renders the page chrome around the list.

use dioxus::prelude::*;
use catalog_client::api::ApiConfig;
use catalog_client::controller::CatalogController;
use catalog_client::http::HttpGamesApi;
use catalog_core::list_state::GameListState;
use catalog_core::model::DEFAULT_PER_PAGE;
use catalog_ui::UiMessage;
use catalog_ui::app_logic::run_catalog_session;
use catalog_ui::components::game_list::GameList;

use crate::browser_url::BrowserUrl;

const TAILWIND_CSS: Asset = asset!(
    "/assets/tailwind.css",
    AssetOptions::css()
        .with_preload(true)
        .with_static_head(true)
);

/// Build-time override for where the API lives. Unset means same origin,
/// which is how the app is served behind the catalog backend.
fn api_config() -> ApiConfig {
    let base = option_env!("CATALOG_API_URL").unwrap_or_default();
    ApiConfig::new(base).with_per_page(DEFAULT_PER_PAGE)
}

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let list_state = use_signal(|| GameListState::new(DEFAULT_PER_PAGE));

    // Spawn the list coroutine. Components send UiMessage via the handle.
    let _coroutine = use_coroutine(move |rx: UnboundedReceiver<UiMessage>| async move {
        let config = api_config();
        let per_page = config.per_page;
        let api = match HttpGamesApi::new(config) {
            Ok(api) => api,
            Err(err) => {
                tracing::error!(%err, "could not create catalog client");
                return;
            }
        };
        let ctrl = CatalogController::new(api, BrowserUrl, per_page);
        run_catalog_session(rx, list_state, ctrl).await;
    });

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "Game Catalog" }
        div { class: "min-h-screen bg-base text-foreground font-sans",
            main { class: "max-w-6xl mx-auto px-4 py-10 flex flex-col gap-8",
                h1 { class: "text-3xl font-bold text-center", "Featured Games" }
                GameList { state: list_state }
            }
        }
    }
}
