//! HTTP handlers for the holocron API.
//!
//! Handlers extract the request, call a service, and map the result onto a status code and a
//! JSON body. Every handler carries a `utoipa::path` annotation which the router collects into
//! the OpenAPI document.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod population;
pub mod user;
pub mod util;
