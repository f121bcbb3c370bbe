//! SeaORM entities for the holocron database.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
