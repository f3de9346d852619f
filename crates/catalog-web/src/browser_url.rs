//! Address-bar adapter backed by `window.location` and `window.history`.

use catalog_client::url_sync::UrlSync;
use catalog_core::location;
use wasm_bindgen::JsValue;

/// The browser's current URL.
///
/// Page changes go through `history.replaceState`, so they never add a
/// back-button entry or reload the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUrl;

impl UrlSync for BrowserUrl {
    fn initial_page(&self) -> u32 {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        location::page_from_search(&search)
    }

    fn replace_page(&self, page: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let loc = window.location();
        let pathname = loc.pathname().unwrap_or_default();
        let search = loc.search().unwrap_or_default();
        let hash = loc.hash().unwrap_or_default();
        let url = location::url_for_page(&pathname, &search, &hash, page);

        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = replaced {
            tracing::warn!(?err, %url, "could not rewrite address bar");
        }
    }
}
