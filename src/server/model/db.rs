//! Type aliases for the entity models used across services.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

/// A user's link to a character or planet, see [`entity::favorite::Model`]
pub type FavoriteModel = entity::favorite::Model;

impl From<UserModel> for crate::model::user::UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}

impl From<CharacterModel> for crate::model::catalog::CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            gender: character.gender,
            height: character.height,
            mass: character.mass,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            hair_color: character.hair_color,
        }
    }
}

impl From<PlanetModel> for crate::model::catalog::PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            gravity: planet.gravity,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            population: planet.population,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
        }
    }
}

impl From<FavoriteModel> for crate::model::favorite::FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            user_id: favorite.user_id,
            name: favorite.name,
            nature: favorite.nature,
            nature_id: favorite.nature_id,
        }
    }
}
