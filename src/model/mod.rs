//! Data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
