//! Address-bar synchronization.
//!
//! These live in the client crate so the controller can keep the URL in
//! step with the list without depending on a browser API.

use std::cell::RefCell;
use std::rc::Rc;

use catalog_core::location;

/// Abstraction over "the current URL" so page syncing stays
/// platform-agnostic.
///
/// The browser implementation lives in the web crate; [`MemoryUrl`] backs
/// the CLI and tests.
pub trait UrlSync {
    /// Page named by the URL the list was opened with.
    fn initial_page(&self) -> u32;
    /// Rewrite the URL for `page` without adding a history entry.
    fn replace_page(&self, page: u32);
}

/// A URL held in memory. Clones share the same value.
#[derive(Clone, Debug, Default)]
pub struct MemoryUrl {
    search: Rc<RefCell<String>>,
}

impl MemoryUrl {
    /// Start from a query string such as `"?page=2"`.
    pub fn with_search(search: &str) -> Self {
        Self {
            search: Rc::new(RefCell::new(
                search.strip_prefix('?').unwrap_or(search).to_string(),
            )),
        }
    }

    /// Current query string, without a leading `?`.
    pub fn search(&self) -> String {
        self.search.borrow().clone()
    }
}

impl UrlSync for MemoryUrl {
    fn initial_page(&self) -> u32 {
        location::page_from_search(&self.search.borrow())
    }

    fn replace_page(&self, page: u32) {
        let next = location::search_with_page(&self.search.borrow(), page);
        *self.search.borrow_mut() = next;
    }
}
