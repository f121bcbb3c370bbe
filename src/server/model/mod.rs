//! Server-side types shared between services and controllers.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod db;
