//! Shared Dioxus UI for the game catalog.
//!
//! This crate is platform-agnostic: it provides the list components, the
//! shared `UiMessage` type and the coroutine body that drives a
//! [`CatalogController`](catalog_client::controller::CatalogController).
//! Platform crates supply the HTTP client and URL adapter.

pub mod app_logic;
pub mod components;

/// Messages sent from UI components to the background coroutine.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    /// "Previous" button.
    Previous,
    /// "Next" button.
    Next,
    /// A numbered page button.
    GoToPage(u32),
    /// The "go to page" field changed.
    GoToInput(String),
    /// "Go" button or Enter in the "go to page" field.
    SubmitGoTo,
}
