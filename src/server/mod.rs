//! Server application core modules.
//!
//! This module contains all server-side functionality for holocron: configuration, persistence,
//! services, HTTP handlers and routing, and the client used to import records from the
//! external catalog.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
