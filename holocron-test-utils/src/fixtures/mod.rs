//! Fixtures for database rows and mock catalog endpoints.
//!
//! - `user` - user accounts
//! - `catalog` - characters and planets, catalog JSON factories and mock endpoints
//! - `favorite` - favorite links between users and catalog rows

pub mod catalog;
pub mod favorite;
pub mod user;
