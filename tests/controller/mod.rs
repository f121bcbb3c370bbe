//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, bypassing routing and the bearer token
//! extractor. Routing and authentication are covered in the router tests.

mod auth;
mod character;
mod favorite;
mod planet;
mod population;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron_test_utils::prelude::*;

use crate::util::{register_user, TestContextExt};
