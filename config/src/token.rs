use serde::Deserialize;

#[derive(Deserialize)]
pub struct TokenConfig {
    jwt: JwtTokenConfig,
}

impl TokenConfig {
    pub fn jwt(&self) -> &JwtTokenConfig {
        &self.jwt
    }
}

#[derive(Deserialize)]
pub struct JwtTokenConfig {
    secret: String,
    access_expiry_duration: u64,
    refresh_expiry_duration: u64,
}

impl JwtTokenConfig {
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn access_expiry_duration(&self) -> &u64 {
        &self.access_expiry_duration
    }

    pub fn refresh_expiry_duration(&self) -> &u64 {
        &self.refresh_expiry_duration
    }
}
