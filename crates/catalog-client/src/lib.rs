//! Client side of the game catalog: HTTP access, address-bar syncing and
//! the controller that ties them to the list state.

pub mod api;
pub mod controller;
#[cfg(any(feature = "native", feature = "web"))]
pub mod http;
pub mod url_sync;
