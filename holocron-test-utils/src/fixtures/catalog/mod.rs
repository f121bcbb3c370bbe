//! Character and planet fixtures.
//!
//! Database inserts live here, JSON bodies shaped like the external catalog live in
//! [`factory`], and the mock endpoints serving them in [`mockito`].

pub mod factory;
pub mod mockito;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Inserts a character with the values of [`factory::person_properties`]
    pub async fn insert_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                gender: ActiveValue::Set("male".to_string()),
                height: ActiveValue::Set(172),
                mass: ActiveValue::Set(77),
                skin_color: ActiveValue::Set("fair".to_string()),
                eye_color: ActiveValue::Set("blue".to_string()),
                hair_color: ActiveValue::Set("blond".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a planet with the values of [`factory::planet_detail`]
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(10465),
                gravity: ActiveValue::Set("1 standard".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                surface_water: ActiveValue::Set("1".to_string()),
                population: ActiveValue::Set(200000),
                rotation_period: ActiveValue::Set(23),
                orbital_period: ActiveValue::Set(304),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
