use std::time;

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{claim::Claim, kind::JwtTokenKind};

pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_expiry_duration: u64,
    refresh_expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, access_expiry_duration: &u64, refresh_expiry_duration: &u64) -> Self {
        pb_log::info(Some("⚡"), "JwtToken: Initializing component");

        let secret = secret.as_bytes();
        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_expiry_duration: *access_expiry_duration,
            refresh_expiry_duration: *refresh_expiry_duration,
        }
    }

    pub fn encode(&self, id: &Uuid, kind: &JwtTokenKind) -> Result<String> {
        let expiry_duration = match kind {
            JwtTokenKind::Access => self.access_expiry_duration,
            JwtTokenKind::Refresh => self.refresh_expiry_duration,
        };
        let expiration_time = usize::try_from(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)?
                .as_secs()
                + expiry_duration,
        )?;

        Ok(encode(
            &self.header,
            &Claim::new(id, kind, &expiration_time),
            &self.encoding_key,
        )?)
    }

    pub fn decode(&self, token: &str) -> Result<Claim> {
        Ok(decode::<Claim>(token, &self.decoding_key, &Validation::default())?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> JwtToken {
        JwtToken::new("jwt-secret", &1800, &604800)
    }

    #[test]
    fn encodes_and_decodes_access_token() {
        let id = Uuid::now_v7();
        let encoded = token().encode(&id, &JwtTokenKind::Access).unwrap();

        let claim = token().decode(&encoded).unwrap();
        assert_eq!(claim.id(), &id);
        assert_eq!(claim.kind(), &JwtTokenKind::Access);
    }

    #[test]
    fn keeps_token_kind_in_claim() {
        let id = Uuid::now_v7();
        let encoded = token().encode(&id, &JwtTokenKind::Refresh).unwrap();

        let claim = token().decode(&encoded).unwrap();
        assert_eq!(claim.kind(), &JwtTokenKind::Refresh);
        assert!(claim.exp() > &0);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let id = Uuid::now_v7();
        let encoded = JwtToken::new("other-secret", &1800, &604800)
            .encode(&id, &JwtTokenKind::Access)
            .unwrap();

        assert!(token().decode(&encoded).is_err());
    }
}
