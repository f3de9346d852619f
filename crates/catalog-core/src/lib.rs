pub mod error;
pub mod list_state;
pub mod location;
pub mod model;
pub mod pagination;
pub mod view;
