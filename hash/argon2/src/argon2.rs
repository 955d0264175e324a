use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    pub fn new(algorithm: &str, version: &str, salt: &str) -> Self {
        pb_log::info(Some("⚡"), "Argon2Hash: Initializing component");

        let algorithm = match algorithm {
            "Argon2d" => Algorithm::Argon2d,
            "Argon2i" => Algorithm::Argon2i,
            "Argon2id" => Algorithm::Argon2id,
            _ => pb_log::panic(None, format!("Unknown argon2 algorithm '{algorithm}'")),
        };

        let version = match version {
            "V0x10" => Version::V0x10,
            "V0x13" => Version::V0x13,
            _ => pb_log::panic(None, format!("Unknown argon2 version '{version}'")),
        };

        let salt = match SaltString::from_b64(salt) {
            Ok(salt) => salt,
            Err(err) => pb_log::panic(None, format!("Invalid argon2 salt: {err}")),
        };

        Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt,
        }
    }

    pub fn hash_password(&self, password: &[u8]) -> Result<String, password_hash::Error> {
        Ok(self.argon2.hash_password(password, &self.salt)?.to_string())
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<(), password_hash::Error> {
        let hash = PasswordHash::new(hash)?;
        self.argon2.verify_password(password.as_bytes(), &hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hash {
        Argon2Hash::new("Argon2id", "V0x13", "cGF5YmFzZXNhbHQ")
    }

    #[test]
    fn hashes_and_verifies_password() {
        let hash = hasher().hash_password(b"Sup3r$ecret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher().verify_password("Sup3r$ecret", &hash).is_ok());
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hasher().hash_password(b"Sup3r$ecret").unwrap();
        assert!(hasher().verify_password("Sup3r$ecret2", &hash).is_err());
    }

    #[test]
    fn hashing_is_deterministic_for_fixed_salt() {
        let first = hasher().hash_password(b"1234").unwrap();
        let second = hasher().hash_password(b"1234").unwrap();
        assert_eq!(first, second);
    }
}
