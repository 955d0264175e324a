use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct PaymentModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    transaction_id: Uuid,
    account_id: Uuid,
    amount: f64,
    signature: String,
}

impl PaymentModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        transaction_id: &Uuid,
        account_id: &Uuid,
        amount: &f64,
        signature: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
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
}
