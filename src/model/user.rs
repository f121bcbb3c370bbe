use serde::{Deserialize, Serialize};

/// Public view of a user account, the password hash is never exposed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Registration request body, every field is required
#[derive(Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct NewUserDto {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body
#[derive(Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response carrying the bearer token
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponseDto {
    pub user_id: i32,
    pub username: String,
    pub token: String,
}
