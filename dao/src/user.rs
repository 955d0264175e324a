use anyhow::Result;
use chrono::{DateTime, Utc};
use pb_db_postgresql::model::user::UserModel as UserPostgresModel;
use uuid::Uuid;

use crate::Db;

pub struct UserDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    full_name: String,
    password_hash: String,
    is_admin: bool,
}

impl UserDao {
    pub fn new(email: &str, full_name: &str, password_hash: &str, is_admin: &bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
            full_name: full_name.to_owned(),
            password_hash: password_hash.to_owned(),
            is_admin: *is_admin,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> &bool {
        &self.is_admin
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_owned();
    }

    pub fn set_full_name(&mut self, full_name: &str) {
        self.full_name = full_name.to_owned();
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_user(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => Ok(db
                .select_user(id)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))),
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => Ok(db
                .select_user_by_email(email)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))),
        }
    }

    pub async fn db_select_many_non_admins(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let users = db.select_many_non_admin_users().await?;
                let mut users_data = Vec::with_capacity(users.len());
                for user in &users {
                    users_data.push(Self::from_postgresdb_model(user));
                }
                Ok(users_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_user(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_user(id).await,
        }
    }

    fn from_postgresdb_model(model: &UserPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            full_name: model.full_name().to_owned(),
            password_hash: model.password_hash().to_owned(),
            is_admin: *model.is_admin(),
        }
    }

    fn to_postgresdb_model(&self) -> UserPostgresModel {
        UserPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.full_name,
            &self.password_hash,
            &self.is_admin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_matching_timestamps() {
        let user = UserDao::new("user@example.com", "Regular User", "hash", &false);

        assert!(!user.id().is_nil());
        assert_eq!(user.created_at(), user.updated_at());
        assert!(!*user.is_admin());
    }

    #[test]
    fn postgres_model_roundtrip_preserves_fields() {
        let mut user = UserDao::new("admin@example.com", "Administrator", "hash", &true);
        user.set_full_name("Renamed Administrator");

        let restored = UserDao::from_postgresdb_model(&user.to_postgresdb_model());

        assert_eq!(restored.id(), user.id());
        assert_eq!(restored.email(), "admin@example.com");
        assert_eq!(restored.full_name(), "Renamed Administrator");
        assert!(*restored.is_admin());
    }
}
