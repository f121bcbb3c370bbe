//! Holocron: a catalog of characters and planets with per-user favorites.
//!
//! The `model` module holds the JSON data transfer objects shared by the HTTP API and its
//! clients, while `server` contains persistence, services, and HTTP handlers.

pub mod model;
pub mod server;
