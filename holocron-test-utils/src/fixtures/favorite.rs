use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Inserts a favorite without checking that the target exists
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user, which must exist
    /// - `nature` - `"character"` or `"planet"`
    /// - `nature_id` - ID of the target row
    /// - `name` - Display name of the favorite
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        nature: &str,
        nature_id: i32,
        name: &str,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                nature: ActiveValue::Set(nature.to_string()),
                nature_id: ActiveValue::Set(nature_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
