use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        favorite::FavoriteDto,
        user::{NewUserDto, UserDto},
    },
    server::{
        controller::util::auth_user::AuthUser,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users in registration order", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Required fields missing or too long", body = ValidationErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete the authenticated user and their favorites
#[utoipa::path(
    delete,
    path = "/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete_user(user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}

/// List the authenticated user's favorites
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Favorites in the order they were added", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
