//! Data access layer repositories.
//!
//! Repositories wrap single-table queries for users, characters, planets, and favorites. Each
//! one is generic over [`ConnectionTrait`](sea_orm::ConnectionTrait) so services can run it
//! against the connection pool or inside a transaction.

pub mod character;
pub mod favorite;
pub mod hydrate;
pub mod planet;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Returns true when the error was raised by a unique constraint or unique index
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true when the error was raised by a foreign key constraint
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
