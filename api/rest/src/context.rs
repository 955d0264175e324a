use std::sync::Arc;

use pb_dao::Db;
use pb_hash_argon2::argon2::Argon2Hash;
use pb_hash_sha256::sha256::Sha256Hash;
use pb_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
}

impl ApiRestCtx {
    pub fn new(hash: ApiRestHashCtx, token: ApiRestTokenCtx, dao: ApiRestDaoCtx) -> Self {
        Self { hash, token, dao }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
    sha256: Sha256Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash, sha256: Sha256Hash) -> Self {
        Self { argon2, sha256 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }

    pub fn sha256(&self) -> &Sha256Hash {
        &self.sha256
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
