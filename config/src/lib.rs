use std::fs::File;

use serde::Deserialize;

pub use crate::{
    api::{ApiConfig, ApiRestConfig},
    app::{AppConfig, AppConfigMode},
    auth::{AuthConfig, AuthSeedConfig},
    db::{postgres::DbPostgresConfig, DbConfig},
    hash::{Argon2HashConfig, HashConfig, Sha256HashConfig},
    log::LogConfig,
    token::{JwtTokenConfig, TokenConfig},
};

mod api;
mod app;
mod auth;
mod db;
mod hash;
mod log;
mod token;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    auth: AuthConfig,
    db: DbConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_YAML: &str = r#"
app:
  mode: development
log:
  display_level: true
  level_filter: "info"
hash:
  argon2:
    algorithm: "Argon2id"
    version: "V0x13"
    salt: "cGF5YmFzZXNhbHQ"
  sha256:
    secret_key: "gfdmhghif38yrf9ew0jkf32"
token:
  jwt:
    secret: "secret"
    access_expiry_duration: 1800
    refresh_expiry_duration: 604800
auth:
  seed:
    - email: "admin@example.com"
      password: "1234"
      full_name: "Administrator"
      is_admin: true
db:
  postgres:
    user: "postgres"
    password: "postgres"
    host: "localhost"
    port: "5432"
    db_name: "paybase"
    max_connections: 20
api:
  rest:
    host: "0.0.0.0"
    port: 8080
"#;

    #[test]
    fn parses_full_config() {
        let config = serde_yaml::from_str::<Config>(CONFIG_YAML).unwrap();

        assert!(matches!(config.app().mode(), AppConfigMode::Development));
        assert_eq!(config.log().level_filter(), "info");
        assert_eq!(config.hash().argon2().algorithm(), "Argon2id");
        assert_eq!(config.hash().sha256().secret_key(), "gfdmhghif38yrf9ew0jkf32");
        assert_eq!(*config.token().jwt().access_expiry_duration(), 1800);
        assert_eq!(*config.token().jwt().refresh_expiry_duration(), 604800);
        assert_eq!(config.db().postgres().db_name(), "paybase");
        assert_eq!(*config.api().rest().port(), 8080);
        assert!(config.api().rest().allowed_origin().is_none());

        let seed = config.auth().seed().as_ref().unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].email(), "admin@example.com");
        assert!(*seed[0].is_admin());
    }
}
