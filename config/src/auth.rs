use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    seed: Option<Vec<AuthSeedConfig>>,
}

impl AuthConfig {
    pub fn seed(&self) -> &Option<Vec<AuthSeedConfig>> {
        &self.seed
    }
}

/// Account created at startup when no user with its email exists yet.
#[derive(Deserialize)]
pub struct AuthSeedConfig {
    email: String,
    password: String,
    full_name: String,
    is_admin: bool,
}

impl AuthSeedConfig {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_admin(&self) -> &bool {
        &self.is_admin
    }
}
