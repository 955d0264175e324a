use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::account::AccountModel};

const INSERT: &str = "INSERT INTO \"accounts\" (\"id\", \"created_at\", \"updated_at\", \"user_id\", \"balance\") VALUES ($1, $2, $3, $4, $5)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"balance\" FROM \"accounts\" WHERE \"id\" = $1";
const SELECT_MANY_BY_USER_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"balance\" FROM \"accounts\" WHERE \"user_id\" = $1 ORDER BY \"id\"";
const CREDIT_BALANCE: &str = "UPDATE \"accounts\" SET \"updated_at\" = $1, \"balance\" = \"balance\" + $2 WHERE \"id\" = $3";

pub async fn init(pool: &Pool<Postgres>) {
    pb_log::info(Some("🔧"), "[PostgreSQL] Preparing accounts statements");

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY_BY_USER_ID),
        pool.prepare(CREDIT_BALANCE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_account(&self, value: &AccountModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.user_id())
                .bind(value.balance()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_account(&self, id: &Uuid) -> Result<Option<AccountModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_accounts_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<AccountModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_USER_ID).bind(user_id))
            .await?)
    }

    pub async fn credit_account_balance(
        &self,
        id: &Uuid,
        amount: &f64,
        updated_at: &DateTime<Utc>,
    ) -> Result<()> {
        self.execute(
            sqlx::query(CREDIT_BALANCE)
                .bind(updated_at)
                .bind(amount)
                .bind(id),
        )
        .await?;
        Ok(())
    }
}
