//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up and registering users by
//! username, with conversion between entity models and domain models at the
//! infrastructure boundary.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::user::User;

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns the user with `username`, registering it first if it does not exist.
    ///
    /// Uses an upsert on the unique username column so concurrent logins with the same
    /// name resolve to a single row.
    ///
    /// # Returns
    /// - `Ok(User)` - The existing or newly created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn find_or_create(&self, username: String) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Username)
                .update_column(entity::user::Column::Username)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
