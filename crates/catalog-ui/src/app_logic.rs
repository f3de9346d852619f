//! Platform-agnostic Dioxus session logic for the game list.
//!
//! The coroutine owns the [`CatalogController`]; components only read the
//! mirrored [`GameListState`] signal and send [`UiMessage`]s. Platform
//! crates (catalog-web, a future desktop shell) construct the controller
//! with their own [`GamesApi`] and [`UrlSync`] and hand it over.

use dioxus::prelude::*;
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;

use catalog_client::api::GamesApi;
use catalog_client::controller::{CatalogController, PendingFetch};
use catalog_client::url_sync::UrlSync;
use catalog_core::list_state::GameListState;

use crate::UiMessage;

/// Turn one UI message into at most one new request.
fn dispatch<A, U>(ctrl: &mut CatalogController<A, U>, msg: UiMessage) -> Option<PendingFetch>
where
    A: GamesApi + Clone + 'static,
    U: UrlSync,
{
    match msg {
        UiMessage::Previous => ctrl.request_previous(),
        UiMessage::Next => ctrl.request_next(),
        UiMessage::GoToPage(page) => ctrl.request_page(page),
        UiMessage::GoToInput(text) => {
            ctrl.set_go_to_input(text);
            None
        }
        UiMessage::SubmitGoTo => ctrl.request_go_to(),
    }
}

/// The first request of a session: whatever page the URL names.
fn initial_request<A, U>(ctrl: &mut CatalogController<A, U>) -> PendingFetch
where
    A: GamesApi + Clone + 'static,
    U: UrlSync,
{
    let page = ctrl.initial_page();
    ctrl.start(page)
}

/// Drive the game list for as long as the component is mounted.
///
/// This is the async body a Dioxus `use_coroutine` should run. It:
///
/// 1. Loads the page named by the URL.
/// 2. Polls UI messages and in-flight requests together, so a new
///    navigation never waits for an older request to finish.
/// 3. Copies the controller state into `list_state` after every change.
pub async fn run_catalog_session<A, U>(
    mut rx: UnboundedReceiver<UiMessage>,
    mut list_state: Signal<GameListState>,
    mut ctrl: CatalogController<A, U>,
) where
    A: GamesApi + Clone + 'static,
    U: UrlSync,
{
    let mut in_flight: FuturesUnordered<PendingFetch> = FuturesUnordered::new();

    in_flight.push(initial_request(&mut ctrl));
    list_state.set(ctrl.state().clone());

    loop {
        tokio::select! {
            Some(done) = in_flight.next(), if !in_flight.is_empty() => {
                ctrl.finish(done);
            }
            msg = rx.next() => {
                let Some(msg) = msg else {
                    tracing::debug!("game list closed");
                    return;
                };
                if let Some(pending) = dispatch(&mut ctrl, msg) {
                    in_flight.push(pending);
                }
            }
        }
        list_state.set(ctrl.state().clone());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use catalog_client::url_sync::MemoryUrl;
    use catalog_core::error::FetchError;
    use catalog_core::list_state::FetchOutcome;
    use catalog_core::model::{Game, GamePage};
    use catalog_core::view::CatalogView;
    use tokio_test::block_on;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeApi {
        total: u64,
        requests: Rc<RefCell<Vec<u32>>>,
    }

    impl GamesApi for FakeApi {
        async fn fetch_page(&self, page: u32, per_page: u32) -> Result<GamePage, FetchError> {
            self.requests.borrow_mut().push(page);
            let per = u64::from(per_page);
            let first = u64::from(page.max(1) - 1) * per + 1;
            let last = (u64::from(page.max(1)) * per).min(self.total);
            Ok(GamePage {
                data: (first..=last)
                    .map(|id| Game {
                        id,
                        title: format!("Game {id}"),
                        description: String::new(),
                        publisher: None,
                        category: None,
                        star_rating: None,
                    })
                    .collect(),
                page: page.max(1),
                per_page,
                total: self.total,
                total_pages: self.total.div_ceil(per) as u32,
            })
        }

        async fn fetch_game(&self, _id: u64) -> Result<Game, FetchError> {
            Err(FetchError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            })
        }
    }

    type Ctrl = CatalogController<FakeApi, MemoryUrl>;

    /// Controller opened at `search`, with the first request settled.
    fn opened(total: u64, search: &str) -> (Ctrl, FakeApi, MemoryUrl) {
        let api = FakeApi {
            total,
            ..Default::default()
        };
        let url = MemoryUrl::with_search(search);
        let mut ctrl = CatalogController::new(api.clone(), url.clone(), 20);
        let done = block_on(initial_request(&mut ctrl));
        ctrl.finish(done);
        (ctrl, api, url)
    }

    fn send(ctrl: &mut Ctrl, msg: UiMessage) -> Option<FetchOutcome> {
        let pending = dispatch(ctrl, msg)?;
        let done = block_on(pending);
        Some(ctrl.finish(done))
    }

    #[test]
    fn session_opens_at_url_page() {
        let (ctrl, api, url) = opened(45, "?page=2");
        assert_eq!(*api.requests.borrow(), vec![2]);
        assert_eq!(ctrl.state().current_page, 2);
        assert_eq!(url.search(), "page=2");
    }

    #[test]
    fn session_opened_past_the_end_shows_empty() {
        let (ctrl, _api, url) = opened(45, "?page=999");
        assert_eq!(ctrl.state().view(), CatalogView::Empty);
        assert_eq!(url.search(), "page=999");
    }

    #[test]
    fn submit_go_to_follows_input_validity() {
        let (mut ctrl, api, url) = opened(45, "");

        assert!(send(&mut ctrl, UiMessage::GoToInput("abc".to_string())).is_none());
        assert!(send(&mut ctrl, UiMessage::SubmitGoTo).is_none());
        assert_eq!(ctrl.state().go_to_input, "abc");
        assert_eq!(api.requests.borrow().len(), 1);

        assert!(send(&mut ctrl, UiMessage::GoToInput("2".to_string())).is_none());
        assert_eq!(
            send(&mut ctrl, UiMessage::SubmitGoTo),
            Some(FetchOutcome::Loaded { page: 2 })
        );
        assert!(ctrl.state().go_to_input.is_empty());
        assert_eq!(url.search(), "page=2");
    }

    #[test]
    fn navigation_messages_respect_bounds() {
        let (mut ctrl, api, url) = opened(45, "");
        assert!(send(&mut ctrl, UiMessage::Previous).is_none());
        assert!(send(&mut ctrl, UiMessage::GoToPage(4)).is_none());

        assert_eq!(
            send(&mut ctrl, UiMessage::Next),
            Some(FetchOutcome::Loaded { page: 2 })
        );
        assert_eq!(
            send(&mut ctrl, UiMessage::GoToPage(3)),
            Some(FetchOutcome::Loaded { page: 3 })
        );
        assert!(send(&mut ctrl, UiMessage::Next).is_none());
        assert_eq!(
            send(&mut ctrl, UiMessage::Previous),
            Some(FetchOutcome::Loaded { page: 2 })
        );
        assert_eq!(
            send(&mut ctrl, UiMessage::GoToPage(1)),
            Some(FetchOutcome::Loaded { page: 1 })
        );

        assert_eq!(*api.requests.borrow(), vec![1, 2, 3, 2, 1]);
        assert_eq!(url.search(), "");
    }

    #[test]
    fn newest_of_several_in_flight_wins() {
        let (mut ctrl, _api, url) = opened(95, "");
        let mut in_flight: FuturesUnordered<PendingFetch> = FuturesUnordered::new();
        for page in [2, 5, 3] {
            in_flight.extend(dispatch(&mut ctrl, UiMessage::GoToPage(page)));
        }
        assert_eq!(in_flight.len(), 3);
        assert!(ctrl.state().loading);

        let outcomes: Vec<FetchOutcome> = block_on(in_flight.collect::<Vec<_>>())
            .into_iter()
            .map(|done| ctrl.finish(done))
            .collect();

        assert_eq!(
            outcomes
                .iter()
                .filter(|o| **o == FetchOutcome::Superseded)
                .count(),
            2
        );
        assert!(!ctrl.state().loading);
        assert_eq!(ctrl.state().current_page, 3);
        assert_eq!(url.search(), "page=3");
    }
}
