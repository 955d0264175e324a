use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use pb_dao::user::UserDao;
use pb_token_jwt::kind::JwtTokenKind;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{LoginReqJson, TokenResJson},
        ErrorRes, Response,
    },
    service::select_user,
};

pub static AUTH_TAG: &str = "auth";

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login))
        .route("/auth/refresh-token", web::post().to(refresh_token));
}

#[utoipa::path(
    post,
    path = "/api/rest/auth/login",
    tag = AUTH_TAG,
    request_body = LoginReqJson,
    responses(
        (status = 200, description = "Issued access and refresh tokens", body = TokenResJson),
        (status = 401, description = "Incorrect email or password", body = ErrorRes)
    ),
)]
pub(crate) async fn login(ctx: web::Data<ApiRestCtx>, data: web::Json<LoginReqJson>) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let user_data = match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return Response::error_raw(&StatusCode::UNAUTHORIZED, "Incorrect email or password")
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if ctx
        .hash()
        .argon2()
        .verify_password(data.password(), user_data.password_hash())
        .is_err()
    {
        return Response::error_raw(&StatusCode::UNAUTHORIZED, "Incorrect email or password");
    }

    let access_token = match ctx
        .token()
        .jwt()
        .encode(user_data.id(), &JwtTokenKind::Access)
    {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };
    let refresh_token = match ctx
        .token()
        .jwt()
        .encode(user_data.id(), &JwtTokenKind::Refresh)
    {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &TokenResJson::new_pair(&access_token, &refresh_token),
    )
}

#[utoipa::path(
    post,
    path = "/api/rest/auth/refresh-token",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Issued a new access token", body = TokenResJson),
        (status = 401, description = "Token is not a valid refresh token", body = ErrorRes)
    ),
)]
pub(crate) async fn refresh_token(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token_claim = match ctx.token().jwt().decode(auth.token()) {
        Ok(claim) => claim,
        Err(_) => {
            return Response::error_raw(&StatusCode::UNAUTHORIZED, "Could not validate credentials")
        }
    };

    if token_claim.kind() != &JwtTokenKind::Refresh {
        return Response::error_raw(
            &StatusCode::UNAUTHORIZED,
            "Must authenticate with a refresh token",
        );
    }

    let user_data = match select_user(ctx.dao().db(), token_claim.id()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    let access_token = match ctx
        .token()
        .jwt()
        .encode(user_data.id(), &JwtTokenKind::Access)
    {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &TokenResJson::new_access(&access_token))
}
