use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{NewUserDto, UserDto},
    server::{
        data::{
            favorite::FavoriteRepository,
            user::{NewUser, UserRepository},
        },
        error::{entity::EntityError, Error},
        service::{already_exists_on_conflict, auth::hash_password, required_fields, within_lengths},
    },
};

/// Service for managing user accounts.
///
/// User DTOs returned from here never carry the password or its hash.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Every field is validated before the store is touched; the password is hashed with
    /// argon2 before it is stored.
    ///
    /// # Arguments
    /// - `new_user` - Registration request, every field is required
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - One or more fields are missing, blank, or longer than
    ///   their column allows
    /// - `Err(Error::EntityError(EntityError::AlreadyExists))` - Username or email is taken
    /// - `Err(Error::PasswordHashError)` - Hashing the password failed
    pub async fn create_user(&self, new_user: NewUserDto) -> Result<UserDto, Error> {
        let [name, username, email, password] = required_fields([
            ("name", new_user.name),
            ("username", new_user.username),
            ("email", new_user.email),
            ("password", new_user.password),
        ])?;

        within_lengths(&[
            ("name", &name, 30),
            ("username", &username, 30),
            ("email", &email, 50),
        ])?;

        let password_hash = hash_password(password).await?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo
            .find_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            return Err(EntityError::AlreadyExists {
                entity: "user",
                detail: "username or email is already in use".to_string(),
            }
            .into());
        }

        let user = user_repo
            .create(NewUser {
                name,
                username,
                email,
                password_hash,
            })
            .await
            .map_err(|e| {
                already_exists_on_conflict(e, "user", "username or email is already in use")
            })?;

        txn.commit().await?;

        tracing::debug!(user_id = user.id, "Created user");

        Ok(user.into())
    }

    /// Lists all users in insertion order
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves an active user by ID
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(Error::EntityError(EntityError::NotFound))` - No user with that ID, or the user
    ///   is deactivated
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .map(UserDto::from)
            .ok_or_else(|| {
                EntityError::NotFound {
                    entity: "user",
                    id: user_id,
                }
                .into()
            })
    }

    /// Deletes a user together with their favorites
    ///
    /// Favorites are removed in the same transaction as the user, so either both are gone or
    /// neither is.
    ///
    /// # Returns
    /// - `Ok(())` - The user and their favorites were deleted
    /// - `Err(Error::EntityError(EntityError::NotFound))` - No user with that ID, nothing was deleted
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let favorites = FavoriteRepository::new(&txn)
            .delete_many_by_user_id(user_id)
            .await?;
        let deleted = UserRepository::new(&txn).delete(user_id).await?;

        if deleted.rows_affected == 0 {
            return Err(EntityError::NotFound {
                entity: "user",
                id: user_id,
            }
            .into());
        }

        txn.commit().await?;

        tracing::debug!(
            user_id,
            favorites = favorites.rows_affected,
            "Deleted user and their favorites"
        );

        Ok(())
    }
}
