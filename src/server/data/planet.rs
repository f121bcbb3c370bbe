use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::hydrate::{FieldSpec, Hydrated},
    error::validation::ValidationError,
};

/// Fields a planet is built from, all of them required
pub static PLANET_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", 50),
    FieldSpec::integer("diameter"),
    FieldSpec::text("gravity", 50),
    FieldSpec::text("terrain", 50),
    FieldSpec::text("surface_water", 50),
    FieldSpec::big_integer("population"),
    FieldSpec::integer("rotation_period"),
    FieldSpec::integer("orbital_period"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: i32,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: i64,
    pub rotation_period: i32,
    pub orbital_period: i32,
}

impl NewPlanet {
    /// Builds a planet from a hydrated record, listing every field that is missing
    pub fn from_hydrated(hydrated: &Hydrated) -> Result<Self, ValidationError> {
        let mut fields = hydrated.reader();

        let planet = Self {
            name: fields.text("name"),
            diameter: fields.integer("diameter"),
            gravity: fields.text("gravity"),
            terrain: fields.text("terrain"),
            surface_water: fields.text("surface_water"),
            population: fields.big_integer("population"),
            rotation_period: fields.integer("rotation_period"),
            orbital_period: fields.integer("orbital_period"),
        };

        fields.finish()?;

        Ok(planet)
    }
}

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            diameter: ActiveValue::Set(planet.diameter),
            gravity: ActiveValue::Set(planet.gravity),
            terrain: ActiveValue::Set(planet.terrain),
            surface_water: ActiveValue::Set(planet.surface_water),
            population: ActiveValue::Set(planet.population),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }
}
