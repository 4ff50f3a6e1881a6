//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete_link;
pub mod ping;
pub mod register;
pub mod resolve;
pub mod shorten;
pub mod status;

pub use delete_link::delete_link_handler;
pub use ping::ping_handler;
pub use register::register_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
pub use status::status_handler;
