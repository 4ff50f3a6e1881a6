//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with no persistence or transport
//! concerns; repositories and DTOs translate to and from them.

pub mod link;
pub mod user;

pub use link::{Link, NewLink, Visibility};
pub use user::{NewUser, User};
