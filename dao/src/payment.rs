use anyhow::Result;
use chrono::{DateTime, Utc};
use pb_db_postgresql::model::payment::PaymentModel as PaymentPostgresModel;
use uuid::Uuid;

use crate::Db;

pub struct PaymentDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    transaction_id: Uuid,
    account_id: Uuid,
    amount: f64,
    signature: String,
}

impl PaymentDao {
    pub fn new(transaction_id: &Uuid, account_id: &Uuid, amount: &f64, signature: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            transaction_id: *transaction_id,
            account_id: *account_id,
            amount: *amount,
            signature: signature.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn transaction_id(&self) -> &Uuid {
        &self.transaction_id
    }

    pub fn account_id(&self) -> &Uuid {
        &self.account_id
    }

    pub fn amount(&self) -> &f64 {
        &self.amount
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_payment(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select_by_transaction_id(db: &Db, transaction_id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => Ok(db
                .select_payment_by_transaction_id(transaction_id)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))),
        }
    }

    pub async fn db_select_many_by_account_id(db: &Db, account_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let payments = db.select_many_payments_by_account_id(account_id).await?;
                let mut payments_data = Vec::with_capacity(payments.len());
                for payment in &payments {
                    payments_data.push(Self::from_postgresdb_model(payment));
                }
                Ok(payments_data)
            }
        }
    }

    fn from_postgresdb_model(model: &PaymentPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            transaction_id: *model.transaction_id(),
            account_id: *model.account_id(),
            amount: *model.amount(),
            signature: model.signature().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> PaymentPostgresModel {
        PaymentPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.transaction_id,
            &self.account_id,
            &self.amount,
            &self.signature,
        )
    }
}
