use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        catalog::{CharacterDto, NewCharacterDto},
    },
    server::{error::Error, model::app::AppState, service::character::CharacterService},
};

pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All stored characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    let characters: Vec<CharacterDto> = characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character from a JSON object
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Fields missing, mistyped or too long", body = ValidationErrorDto),
        (status = 409, description = "A character with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .create_from_json(&fields)
        .await?;

    Ok((StatusCode::CREATED, Json(CharacterDto::from(character))))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}
