use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{LoginParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the user for a login, registering the username on first use.
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_or_create(param.username)
            .await?;

        tracing::info!("User {} ({}) logged in", user.id, user.username);

        Ok(user)
    }
}
