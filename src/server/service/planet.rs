use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::{
        hydrate::hydrate,
        planet::{NewPlanet, PlanetRepository, PLANET_FIELDS},
    },
    error::{entity::EntityError, validation::ValidationError, Error},
    model::db::PlanetModel,
    service::already_exists_on_conflict,
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet from a request body, rejecting fields of the wrong type or length
    pub async fn create_from_json(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<PlanetModel, Error> {
        let hydrated = hydrate(PLANET_FIELDS, fields);
        if !hydrated.rejected().is_empty() {
            return Err(ValidationError::InvalidFields(hydrated.rejected().to_vec()).into());
        }

        let planet = NewPlanet::from_hydrated(&hydrated)?;

        self.create(planet).await
    }

    /// Creates a planet in its own transaction, failing with `AlreadyExists` for a taken name
    pub async fn create(&self, planet: NewPlanet) -> Result<PlanetModel, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.get_by_name(&planet.name).await?.is_some() {
            return Err(EntityError::AlreadyExists {
                entity: "planet",
                detail: planet.name,
            }
            .into());
        }

        let name = planet.name.clone();
        let created = planet_repo
            .create(planet)
            .await
            .map_err(|e| already_exists_on_conflict(e, "planet", &name))?;

        txn.commit().await?;

        tracing::debug!(id = created.id, name = %created.name, "Created planet");

        Ok(created)
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetModel, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| {
                EntityError::NotFound {
                    entity: "planet",
                    id: planet_id,
                }
                .into()
            })
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetModel>, Error> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }
}
