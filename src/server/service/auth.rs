//! Password hashing, login, and bearer token handling.
//!
//! Passwords are stored as argon2 PHC strings and only ever compared through the hash. Hashing
//! and verification run on the blocking thread pool. Bearer tokens are HS256 JWTs whose subject
//! is the user ID.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, LoginResponseDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::auth::{AuthConfig, Claims},
        service::required_fields,
    },
};

/// Hashes a password with a fresh random salt
pub async fn hash_password(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::PasswordHashError(e.to_string()))
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks a password against a stored hash, an unreadable hash never matches
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || {
        let parsed = match PasswordHash::new(&password_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))
}

/// Issues a bearer token for `user_id` valid for the configured lifetime
pub fn issue_token(auth: &AuthConfig, user_id: i32) -> Result<String, Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: Utc::now().timestamp() + auth.expiry_secs,
    };

    Ok(encode(&Header::new(Algorithm::HS256), &claims, &auth.encoding_key)?)
}

/// Verifies a bearer token and returns the user ID it was issued for
///
/// # Returns
/// - `Ok(i32)`: Signature and expiry are valid
/// - `Err(AuthError::InvalidToken)`: Bad signature, expired, or a subject that is not a user ID
pub fn verify_token(auth: &AuthConfig, token: &str) -> Result<i32, AuthError> {
    let data = decode::<Claims>(token, &auth.decoding_key, &Validation::new(Algorithm::HS256))
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    data.claims.sub.parse::<i32>().map_err(|_| {
        AuthError::InvalidToken(format!("subject {} is not a user ID", data.claims.sub))
    })
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig) -> Self {
        Self { db, auth }
    }

    /// Verifies a username and password and issues a bearer token
    ///
    /// # Returns
    /// - `Ok(LoginResponseDto)`: Credentials match an active user
    /// - `Err(Error::ValidationError)`: Username or password is missing
    /// - `Err(Error::AuthError(AuthError::InvalidLogin))`: Unknown user, inactive user, or wrong password
    pub async fn login(&self, credentials: LoginDto) -> Result<LoginResponseDto, Error> {
        let [username, password] = required_fields([
            ("username", credentials.username),
            ("password", credentials.password),
        ])?;

        let Some(user) = UserRepository::new(self.db)
            .get_by_username(&username)
            .await?
        else {
            tracing::debug!(%username, "Login attempt for unknown user");
            return Err(AuthError::InvalidLogin.into());
        };

        if !user.is_active || !verify_password(password, user.password_hash.clone()).await? {
            tracing::debug!(user_id = user.id, "Rejected login");
            return Err(AuthError::InvalidLogin.into());
        }

        let token = issue_token(self.auth, user.id)?;

        Ok(LoginResponseDto {
            user_id: user.id,
            username: user.username,
            token,
        })
    }
}
