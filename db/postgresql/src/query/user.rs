use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::user::UserModel};

const INSERT: &str = "INSERT INTO \"users\" (\"id\", \"created_at\", \"updated_at\", \"email\", \"full_name\", \"password_hash\", \"is_admin\") VALUES ($1, $2, $3, $4, $5, $6, $7)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"full_name\", \"password_hash\", \"is_admin\" FROM \"users\" WHERE \"id\" = $1";
const SELECT_BY_EMAIL: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"full_name\", \"password_hash\", \"is_admin\" FROM \"users\" WHERE \"email\" = $1";
const SELECT_MANY_NON_ADMIN: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"full_name\", \"password_hash\", \"is_admin\" FROM \"users\" WHERE \"is_admin\" = false ORDER BY \"id\"";
const UPDATE: &str = "UPDATE \"users\" SET \"updated_at\" = $1, \"email\" = $2, \"full_name\" = $3, \"password_hash\" = $4 WHERE \"id\" = $5";
const DELETE: &str = "DELETE FROM \"users\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    pb_log::info(Some("🔧"), "[PostgreSQL] Preparing users statements");

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_BY_EMAIL),
        pool.prepare(SELECT_MANY_NON_ADMIN),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_user(&self, value: &UserModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.email())
                .bind(value.full_name())
                .bind(value.password_hash())
                .bind(value.is_admin()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_user(&self, id: &Uuid) -> Result<Option<UserModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_user_by_email(&self, email: &str) -> Result<Option<UserModel>> {
        Ok(self
            .fetch_optional(sqlx::query_as(SELECT_BY_EMAIL).bind(email))
            .await?)
    }

    pub async fn select_many_non_admin_users(&self) -> Result<Vec<UserModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY_NON_ADMIN)).await?)
    }

    pub async fn update_user(&self, value: &UserModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.email())
                .bind(value.full_name())
                .bind(value.password_hash())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
