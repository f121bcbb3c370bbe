//! Favorites manager.
//!
//! A favorite links a user to a character or planet under a display name. Names are unique per
//! user: two users may favorite the same target under the same name, one user may not use a
//! name twice.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            favorite::{FavoriteRepository, NewFavorite},
            is_foreign_key_violation,
        },
        error::{entity::EntityError, Error},
        model::{catalog::CatalogKind, db::FavoriteModel},
        service::{
            already_exists_on_conflict, character::CharacterService, planet::PlanetService,
        },
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite for a user.
    ///
    /// The target is not looked up, `target_id` is stored as given.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    /// - `kind` - Kind of the favorited item
    /// - `target_id` - ID of the favorited character or planet
    /// - `display_name` - Name of the favorite, unique per user
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The created favorite
    /// - `Err(Error::EntityError(EntityError::AlreadyExists))` - The user already has a favorite
    ///   with this name, including when a concurrent insert wins the race
    /// - `Err(Error::EntityError(EntityError::NotFound))` - The user does not exist
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
        display_name: &str,
    ) -> Result<FavoriteModel, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if favorite_repo
            .get_by_user_and_name(user_id, display_name)
            .await?
            .is_some()
        {
            return Err(EntityError::AlreadyExists {
                entity: "favorite",
                detail: display_name.to_string(),
            }
            .into());
        }

        let favorite = favorite_repo
            .create(NewFavorite {
                user_id,
                name: display_name.to_string(),
                nature: kind.as_str().to_string(),
                nature_id: target_id,
            })
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    EntityError::NotFound {
                        entity: "user",
                        id: user_id,
                    }
                    .into()
                } else {
                    already_exists_on_conflict(e, "favorite", display_name)
                }
            })?;

        txn.commit().await?;

        tracing::debug!(user_id, %kind, target_id, "Added favorite");

        Ok(favorite)
    }

    /// Favorites a character under its own name
    ///
    /// # Returns
    /// - `Err(Error::EntityError(EntityError::NotFound))` - The character does not exist
    /// - See [`FavoriteService::add_favorite`] for the remaining cases
    pub async fn favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteModel, Error> {
        let character = CharacterService::new(self.db)
            .get_character(character_id)
            .await?;

        self.add_favorite(user_id, CatalogKind::Character, character.id, &character.name)
            .await
    }

    /// Favorites a planet under its own name
    pub async fn favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, Error> {
        let planet = PlanetService::new(self.db).get_planet(planet_id).await?;

        self.add_favorite(user_id, CatalogKind::Planet, planet.id, &planet.name)
            .await
    }

    /// Removes a user's favorite of the given target
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(Error::EntityError(EntityError::NotFound))` - The user has no favorite of this target
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let Some(favorite) = favorite_repo
            .get_by_user_and_target(user_id, kind.as_str(), target_id)
            .await?
        else {
            return Err(EntityError::NotFound {
                entity: "favorite",
                id: target_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;
        txn.commit().await?;

        tracing::debug!(user_id, %kind, target_id, "Removed favorite");

        Ok(())
    }

    /// Lists a user's favorites in insertion order
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
