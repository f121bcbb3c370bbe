use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// A favorite link to be inserted
///
/// `nature_id` is not checked against the target table, callers resolve the target first.
pub struct NewFavorite {
    pub user_id: i32,
    pub name: String,
    pub nature: String,
    pub nature_id: i32,
}

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite, failing on a duplicate `(user_id, name)` or an unknown user
    pub async fn create(&self, favorite: NewFavorite) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(favorite.user_id),
            name: ActiveValue::Set(favorite.name),
            nature: ActiveValue::Set(favorite.nature),
            nature_id: ActiveValue::Set(favorite.nature_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_by_user_and_target(
        &self,
        user_id: i32,
        nature: &str,
        nature_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Nature.eq(nature))
            .filter(entity::favorite::Column::NatureId.eq(nature_id))
            .one(self.db)
            .await
    }

    /// Gets a user's favorites in insertion order
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every favorite owned by a user
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
