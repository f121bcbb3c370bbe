use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::hydrate::{FieldSpec, Hydrated},
    error::validation::ValidationError,
};

/// Fields a character is built from, all of them required
pub static CHARACTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", 50),
    FieldSpec::text("birth_year", 25),
    FieldSpec::text("gender", 25),
    FieldSpec::integer("height"),
    FieldSpec::integer("mass"),
    FieldSpec::text("skin_color", 25),
    FieldSpec::text("eye_color", 25),
    FieldSpec::text("hair_color", 25),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub skin_color: String,
    pub eye_color: String,
    pub hair_color: String,
}

impl NewCharacter {
    /// Builds a character from a hydrated record
    ///
    /// # Returns
    /// - `Ok(NewCharacter)`: Every field in [`CHARACTER_FIELDS`] was accepted
    /// - `Err(ValidationError::MissingFields)`: Lists every field which is absent or was rejected
    pub fn from_hydrated(hydrated: &Hydrated) -> Result<Self, ValidationError> {
        let mut fields = hydrated.reader();

        let character = Self {
            name: fields.text("name"),
            birth_year: fields.text("birth_year"),
            gender: fields.text("gender"),
            height: fields.integer("height"),
            mass: fields.integer("mass"),
            skin_color: fields.text("skin_color"),
            eye_color: fields.text("eye_color"),
            hair_color: fields.text("hair_color"),
        };

        fields.finish()?;

        Ok(character)
    }
}

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        character: NewCharacter,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            height: ActiveValue::Set(character.height),
            mass: ActiveValue::Set(character.mass),
            skin_color: ActiveValue::Set(character.skin_color),
            eye_color: ActiveValue::Set(character.eye_color),
            hair_color: ActiveValue::Set(character.hair_color),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }
}
