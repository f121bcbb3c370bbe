use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub skin_color: String,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: i64,
    pub rotation_period: i32,
    pub orbital_period: i32,
}

/// Outcome of importing a page of records from the external catalog
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PopulationDto<T> {
    /// Entries created by this import
    pub created: Vec<T>,
    /// Catalog records which could not be imported
    pub skipped: Vec<SkippedItemDto>,
}

/// A catalog record which was skipped during import
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkippedItemDto {
    /// Detail URL of the catalog record
    pub url: String,
    /// Why the record was not imported
    pub reason: String,
}

/// Character creation request body
///
/// Integer fields also accept numeric strings. Fields of the wrong type are rejected with 400.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewCharacterDto {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub skin_color: String,
    pub eye_color: String,
    pub hair_color: String,
}

/// Planet creation request body
///
/// Integer fields also accept numeric strings. Fields of the wrong type are rejected with 400.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewPlanetDto {
    pub name: String,
    pub diameter: i32,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: i64,
    pub rotation_period: i32,
    pub orbital_period: i32,
}
