use serde::{Deserialize, Serialize};

/// A user's favorite character or planet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub user_id: i32,
    /// Display name of the favorited item
    pub name: String,
    /// Kind of item, either `character` or `planet`
    pub nature: String,
    /// ID of the favorited character or planet
    pub nature_id: i32,
}
