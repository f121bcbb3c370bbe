use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, entity::EntityError, Error},
    model::app::AppState,
    service::{auth::verify_token, user::UserService},
};

/// ID of the user authenticated by the request's bearer token
///
/// Handlers taking this extractor reject requests with 401 before the handler runs when the
/// `Authorization` header lacks a valid bearer token, or when the token's user has since been
/// deleted or deactivated. The scheme name is matched case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser(pub i32);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.trim().split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredentials)?;

        let user_id = verify_token(&state.auth, token)?;

        match UserService::new(&state.db).get_user(user_id).await {
            Ok(_) => Ok(AuthUser(user_id)),
            Err(Error::EntityError(EntityError::NotFound { .. })) => Err(AuthError::InvalidToken(
                "user no longer exists or is inactive".to_string(),
            )
            .into()),
            Err(err) => Err(err),
        }
    }
}
