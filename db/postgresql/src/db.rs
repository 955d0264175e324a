use sqlx::{
    postgres::{PgArguments, PgPoolOptions, PgQueryResult, PgRow},
    query::{Query, QueryAs},
    Error, Pool, Postgres,
};

use crate::query::{account, payment, user};

pub struct PostgresDb {
    pool: Pool<Postgres>,
}

impl PostgresDb {
    pub async fn new(
        user: &str,
        password: &str,
        host: &str,
        port: &str,
        db_name: &str,
        max_connections: &u32,
    ) -> Self {
        pb_log::info(Some("⚡"), "PostgresDb: Initializing component");

        let url = format!("postgres://{user}:{password}@{host}:{port}/{db_name}");
        let pool = match PgPoolOptions::new()
            .max_connections(*max_connections)
            .connect(&url)
            .await
        {
            Ok(pool) => pool,
            Err(err) => pb_log::panic(
                None,
                format!("[PostgreSQL] Failed to connect to {host}:{port}/{db_name}: {err}"),
            ),
        };

        Self::init(&pool).await;

        Self { pool }
    }

    async fn init(pool: &Pool<Postgres>) {
        pb_log::info(Some("🔧"), "[PostgreSQL] Applying pending migrations");
        if let Err(err) = sqlx::migrate!().run(pool).await {
            pb_log::panic(None, format!("[PostgreSQL] Migration failed: {err}"));
        }

        user::init(pool).await;
        account::init(pool).await;
        payment::init(pool).await;
    }

    pub async fn execute(
        &self,
        query: Query<'_, Postgres, PgArguments>,
    ) -> Result<PgQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_one<T: Send + Unpin + for<'r> sqlx::FromRow<'r, PgRow>>(
        &self,
        query: QueryAs<'_, Postgres, T, PgArguments>,
    ) -> Result<T, Error> {
        query.fetch_one(&self.pool).await
    }

    pub async fn fetch_optional<T: Send + Unpin + for<'r> sqlx::FromRow<'r, PgRow>>(
        &self,
        query: QueryAs<'_, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<T: Send + Unpin + for<'r> sqlx::FromRow<'r, PgRow>>(
        &self,
        query: QueryAs<'_, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }
}
