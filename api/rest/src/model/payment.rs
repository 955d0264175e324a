use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct InsertOnePaymentReqJson {
    transaction_id: Uuid,
    user_id: Uuid,
    account_id: Uuid,
    #[validate(range(exclusive_min = 0.0))]
    amount: f64,
    signature: String,
}

impl InsertOnePaymentReqJson {
    pub fn transaction_id(&self) -> &Uuid {
        &self.transaction_id
    }

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
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

#[derive(Serialize, ToSchema)]
pub struct PaymentResJson {
    id: Uuid,
    transaction_id: Uuid,
    account_id: Uuid,
    amount: f64,
    created_at: DateTime<Utc>,
}

impl PaymentResJson {
    pub fn new(
        id: &Uuid,
        transaction_id: &Uuid,
        account_id: &Uuid,
        amount: &f64,
        created_at: &DateTime<Utc>,
    ) -> Self {
        Self {
            id: *id,
            transaction_id: *transaction_id,
            account_id: *account_id,
            amount: *amount,
            created_at: *created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_non_positive_amount() {
        let data = serde_json::from_value::<InsertOnePaymentReqJson>(json!({
            "transaction_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c1",
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c2",
            "account_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c3",
            "amount": 0.0,
            "signature": "deadbeef"
        }))
        .unwrap();

        assert!(data.validate().is_err());
    }

    #[test]
    fn accepts_positive_amount() {
        let data = serde_json::from_value::<InsertOnePaymentReqJson>(json!({
            "transaction_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c1",
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c2",
            "account_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c3",
            "amount": 100.5,
            "signature": "deadbeef"
        }))
        .unwrap();

        assert!(data.validate().is_ok());
        assert_eq!(data.amount(), &100.5);
    }
}
