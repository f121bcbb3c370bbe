//! Service layer for business logic.
//!
//! Services validate input, run repository calls inside transactions, and translate store
//! constraint violations into domain errors. The population service additionally drives the
//! external catalog client.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod population;
pub mod user;

use sea_orm::DbErr;

use crate::server::{
    data::{hydrate::RejectedField, is_unique_violation},
    error::{entity::EntityError, validation::ValidationError, Error},
};

/// Unwraps required request fields, listing every absent or blank one in a single error
fn required_fields<const N: usize>(
    fields: [(&str, Option<String>); N],
) -> Result<[String; N], ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}

/// Rejects values longer than their column allows, listing every offending field
fn within_lengths(fields: &[(&str, &str, usize)]) -> Result<(), ValidationError> {
    let rejected: Vec<RejectedField> = fields
        .iter()
        .filter_map(|(name, value, max_len)| {
            let len = value.chars().count();
            (len > *max_len).then(|| RejectedField {
                name: name.to_string(),
                reason: format!("{} characters exceeds the limit of {}", len, max_len),
            })
        })
        .collect();

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFields(rejected))
    }
}

/// Maps a unique violation raised by the store to [`EntityError::AlreadyExists`]
fn already_exists_on_conflict(err: DbErr, entity: &'static str, detail: &str) -> Error {
    if is_unique_violation(&err) {
        EntityError::AlreadyExists {
            entity,
            detail: detail.to_string(),
        }
        .into()
    } else {
        err.into()
    }
}
