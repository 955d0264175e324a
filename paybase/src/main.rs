use std::sync::Arc;

use anyhow::Result;
use pb_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx},
    ApiRestServer,
};
use pb_config::AuthSeedConfig;
use pb_dao::{user::UserDao, Db};
use pb_db_postgresql::db::PostgresDb;
use pb_hash_argon2::argon2::Argon2Hash;
use pb_hash_sha256::sha256::Sha256Hash;
use pb_token_jwt::token::JwtToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = pb_config::from_path(&config_path);

    pb_log::init(config.log().display_level(), config.log().level_filter());

    pb_log::info(Some("🚀"), "[Paybase] Starting");

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    );

    let sha256_hash = Sha256Hash::new(config.hash().sha256().secret_key());

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().access_expiry_duration(),
        config.token().jwt().refresh_expiry_duration(),
    );

    let db = Arc::new(Db::PostgresqlDb(
        PostgresDb::new(
            config.db().postgres().user(),
            config.db().postgres().password(),
            config.db().postgres().host(),
            config.db().postgres().port(),
            config.db().postgres().db_name(),
            config.db().postgres().max_connections(),
        )
        .await,
    ));

    if let Err(err) = seed_users(&db, &argon2_hash, config.auth().seed()).await {
        pb_log::panic(None, format!("[Paybase] Seeding accounts failed: {err}"));
    }

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash, sha256_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(db),
        ),
    );

    match api_rest_server.run().await {
        Ok(_) => pb_log::info(Some("👋"), "[Paybase] Turned off"),
        Err(err) => pb_log::error(Some("👋"), format!("[Paybase] Turned off with error: {err}")),
    }
}

// Existing emails are left untouched, so a redeploy never resets passwords.
async fn seed_users(
    db: &Db,
    argon2_hash: &Argon2Hash,
    seeds: &Option<Vec<AuthSeedConfig>>,
) -> Result<()> {
    let Some(seeds) = seeds else {
        return Ok(());
    };

    for seed in seeds {
        if UserDao::db_select_by_email(db, seed.email()).await?.is_some() {
            continue;
        }

        let password_hash = match argon2_hash.hash_password(seed.password().as_bytes()) {
            Ok(hash) => hash,
            Err(err) => return Err(anyhow::anyhow!("{err}")),
        };
        let user_data = UserDao::new(seed.email(), seed.full_name(), &password_hash, seed.is_admin());
        user_data.db_insert(db).await?;

        pb_log::info(
            Some("🌱"),
            format!("[Paybase] Seeded account {}", seed.email()),
        );
    }

    Ok(())
}
