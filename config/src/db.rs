use serde::Deserialize;

use crate::db::postgres::DbPostgresConfig;

pub mod postgres;

#[derive(Deserialize)]
pub struct DbConfig {
    postgres: DbPostgresConfig,
}

impl DbConfig {
    pub fn postgres(&self) -> &DbPostgresConfig {
        &self.postgres
    }
}
