use actix_web::{http::StatusCode, HttpResponse};
use pb_dao::{user::UserDao, Db};
use pb_token_jwt::kind::JwtTokenKind;
use uuid::Uuid;

use crate::{context::ApiRestCtx, model::Response};

pub mod account;
pub mod auth;
pub mod payment;
pub mod root;
pub mod user;

/// Resolves a bearer token to its user. The role check always runs
/// against the stored user, never against the claim alone.
async fn authenticated_user(ctx: &ApiRestCtx, token: &str) -> Result<UserDao, HttpResponse> {
    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(claim) => claim,
        Err(_) => {
            return Err(Response::error_raw(
                &StatusCode::UNAUTHORIZED,
                "Could not validate credentials",
            ))
        }
    };

    if token_claim.kind() != &JwtTokenKind::Access {
        return Err(Response::error_raw(
            &StatusCode::UNAUTHORIZED,
            "Must authenticate with an access token",
        ));
    }

    select_user(ctx.dao().db(), token_claim.id()).await
}

async fn select_user(db: &Db, id: &Uuid) -> Result<UserDao, HttpResponse> {
    match UserDao::db_select(db, id).await {
        Ok(Some(user_data)) => Ok(user_data),
        Ok(None) => Err(Response::error_raw(
            &StatusCode::UNAUTHORIZED,
            "Could not validate credentials",
        )),
        Err(err) => Err(Response::error_raw(
            &StatusCode::INTERNAL_SERVER_ERROR,
            &err.to_string(),
        )),
    }
}
