use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct FindManyAccountPath {
    user_id: Uuid,
}

impl FindManyAccountPath {
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }
}

#[derive(Serialize, ToSchema)]
pub struct AccountResJson {
    id: Uuid,
    balance: f64,
}

impl AccountResJson {
    pub fn new(id: &Uuid, balance: &f64) -> Self {
        Self {
            id: *id,
            balance: *balance,
        }
    }
}
