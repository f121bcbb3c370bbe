use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::{
        character::{CharacterRepository, NewCharacter, CHARACTER_FIELDS},
        hydrate::hydrate,
    },
    error::{entity::EntityError, validation::ValidationError, Error},
    model::db::CharacterModel,
    service::already_exists_on_conflict,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character from a request body.
    ///
    /// Unlike a catalog import, a request body with a field of the wrong type is rejected
    /// outright instead of having the field dropped.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)`: The created character
    /// - `Err(Error::ValidationError(ValidationError::InvalidFields))`: A field has the wrong type
    ///   or exceeds its column length
    /// - `Err(Error::ValidationError(ValidationError::MissingFields))`: Required fields are absent
    /// - `Err(Error::EntityError(EntityError::AlreadyExists))`: The name is taken
    pub async fn create_from_json(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<CharacterModel, Error> {
        let hydrated = hydrate(CHARACTER_FIELDS, fields);
        if !hydrated.rejected().is_empty() {
            return Err(ValidationError::InvalidFields(hydrated.rejected().to_vec()).into());
        }

        let character = NewCharacter::from_hydrated(&hydrated)?;

        self.create(character).await
    }

    /// Creates a character in its own transaction
    ///
    /// # Returns
    /// - `Ok(CharacterModel)`: The created character
    /// - `Err(Error::EntityError(EntityError::AlreadyExists))`: The name is taken
    /// - `Err(Error::DbErr)`: Any other database failure
    pub async fn create(&self, character: NewCharacter) -> Result<CharacterModel, Error> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);

        if character_repo.get_by_name(&character.name).await?.is_some() {
            return Err(EntityError::AlreadyExists {
                entity: "character",
                detail: character.name,
            }
            .into());
        }

        let name = character.name.clone();
        let created = character_repo
            .create(character)
            .await
            .map_err(|e| already_exists_on_conflict(e, "character", &name))?;

        txn.commit().await?;

        tracing::debug!(id = created.id, name = %created.name, "Created character");

        Ok(created)
    }

    pub async fn get_character(&self, character_id: i32) -> Result<CharacterModel, Error> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| {
                EntityError::NotFound {
                    entity: "character",
                    id: character_id,
                }
                .into()
            })
    }

    /// Lists all characters in insertion order
    pub async fn get_characters(&self) -> Result<Vec<CharacterModel>, Error> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }
}
