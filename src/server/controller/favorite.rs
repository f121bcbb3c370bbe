use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
    },
    server::{
        controller::util::auth_user::AuthUser,
        error::Error,
        model::{app::AppState, catalog::CatalogKind},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Favorite a character for the authenticated user
#[utoipa::path(
    post,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("character_id" = i32, Path, description = "ID of the character to favorite")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 409, description = "Character is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::CREATED, Json(FavoriteDto::from(favorite))))
}

/// Remove a favorite character of the authenticated user
#[utoipa::path(
    delete,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("character_id" = i32, Path, description = "ID of the favorited character")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Character is not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, CatalogKind::Character, character_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite removed"))))
}

/// Favorite a planet for the authenticated user
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 409, description = "Planet is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(FavoriteDto::from(favorite))))
}

/// Remove a favorite planet of the authenticated user
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("planet_id" = i32, Path, description = "ID of the favorited planet")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Planet is not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, CatalogKind::Planet, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite removed"))))
}
