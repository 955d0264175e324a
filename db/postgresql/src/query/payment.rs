use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::payment::PaymentModel};

const INSERT: &str = "INSERT INTO \"payments\" (\"id\", \"created_at\", \"transaction_id\", \"account_id\", \"amount\", \"signature\") VALUES ($1, $2, $3, $4, $5, $6)";
const SELECT_BY_TRANSACTION_ID: &str = "SELECT \"id\", \"created_at\", \"transaction_id\", \"account_id\", \"amount\", \"signature\" FROM \"payments\" WHERE \"transaction_id\" = $1";
const SELECT_MANY_BY_ACCOUNT_ID: &str = "SELECT \"id\", \"created_at\", \"transaction_id\", \"account_id\", \"amount\", \"signature\" FROM \"payments\" WHERE \"account_id\" = $1 ORDER BY \"created_at\"";

pub async fn init(pool: &Pool<Postgres>) {
    pb_log::info(Some("🔧"), "[PostgreSQL] Preparing payments statements");

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT_BY_TRANSACTION_ID),
        pool.prepare(SELECT_MANY_BY_ACCOUNT_ID),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_payment(&self, value: &PaymentModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.transaction_id())
                .bind(value.account_id())
                .bind(value.amount())
                .bind(value.signature()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_payment_by_transaction_id(
        &self,
        transaction_id: &Uuid,
    ) -> Result<Option<PaymentModel>> {
        Ok(self
            .fetch_optional(sqlx::query_as(SELECT_BY_TRANSACTION_ID).bind(transaction_id))
            .await?)
    }

    pub async fn select_many_payments_by_account_id(
        &self,
        account_id: &Uuid,
    ) -> Result<Vec<PaymentModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_ACCOUNT_ID).bind(account_id))
            .await?)
    }
}
