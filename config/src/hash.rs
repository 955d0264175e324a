use serde::Deserialize;

#[derive(Deserialize)]
pub struct HashConfig {
    argon2: Argon2HashConfig,
    sha256: Sha256HashConfig,
}

impl HashConfig {
    pub fn argon2(&self) -> &Argon2HashConfig {
        &self.argon2
    }

    pub fn sha256(&self) -> &Sha256HashConfig {
        &self.sha256
    }
}

#[derive(Deserialize)]
pub struct Argon2HashConfig {
    algorithm: String,
    version: String,
    salt: String,
}

impl Argon2HashConfig {
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

#[derive(Deserialize)]
pub struct Sha256HashConfig {
    secret_key: String,
}

impl Sha256HashConfig {
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}
