use pb_db_postgresql::db::PostgresDb;

pub mod account;
pub mod payment;
pub mod user;

pub enum Db {
    PostgresqlDb(PostgresDb),
}
