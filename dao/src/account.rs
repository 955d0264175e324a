use anyhow::Result;
use chrono::{DateTime, Utc};
use pb_db_postgresql::model::account::AccountModel as AccountPostgresModel;
use uuid::Uuid;

use crate::Db;

pub struct AccountDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    balance: f64,
}

impl AccountDao {
    // Accounts are opened by the payment provider, which supplies the id.
    pub fn new(id: &Uuid, user_id: &Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: *id,
            created_at: now,
            updated_at: now,
            user_id: *user_id,
            balance: 0.0,
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

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    pub fn balance(&self) -> &f64 {
        &self.balance
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_account(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => Ok(db
                .select_account(id)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))),
        }
    }

    pub async fn db_select_many_by_user_id(db: &Db, user_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let accounts = db.select_many_accounts_by_user_id(user_id).await?;
                let mut accounts_data = Vec::with_capacity(accounts.len());
                for account in &accounts {
                    accounts_data.push(Self::from_postgresdb_model(account));
                }
                Ok(accounts_data)
            }
        }
    }

    /// Adds `amount` to the stored balance. The increment happens in the
    /// database so concurrent payments to one account cannot lose credits.
    pub async fn db_credit_balance(&mut self, db: &Db, amount: &f64) -> Result<()> {
        self.updated_at = Utc::now();
        self.balance += amount;
        match db {
            Db::PostgresqlDb(db) => {
                db.credit_account_balance(&self.id, amount, &self.updated_at)
                    .await
            }
        }
    }

    fn from_postgresdb_model(model: &AccountPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            user_id: *model.user_id(),
            balance: *model.balance(),
        }
    }

    fn to_postgresdb_model(&self) -> AccountPostgresModel {
        AccountPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.user_id,
            &self.balance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_zero_balance() {
        let id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let account = AccountDao::new(&id, &user_id);

        assert_eq!(account.id(), &id);
        assert_eq!(account.user_id(), &user_id);
        assert_eq!(account.balance(), &0.0);
    }
}
