use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use pb_dao::{account::AccountDao, user::UserDao};

use crate::{
    context::ApiRestCtx,
    model::{
        account::{AccountResJson, FindManyAccountPath},
        ErrorRes, Response,
    },
    service::authenticated_user,
};

pub static ACCOUNT_TAG: &str = "account";

pub fn account_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/accounts", web::get().to(find_many_current))
        .route("/user/{user_id}/accounts", web::get().to(find_many_by_user));
}

#[utoipa::path(
    get,
    path = "/api/rest/accounts",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "The authenticated user's accounts", body = [AccountResJson]),
        (status = 403, description = "Admin cannot have an account", body = ErrorRes),
        (status = 404, description = "The user has no accounts", body = ErrorRes)
    ),
)]
pub(crate) async fn find_many_current(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if *user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Admin cannot have an account");
    }

    let accounts_data = match AccountDao::db_select_many_by_user_id(ctx.dao().db(), user_data.id()).await
    {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if accounts_data.is_empty() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "The current user has no accounts");
    }

    let accounts_res = accounts_data
        .iter()
        .map(|account| AccountResJson::new(account.id(), account.balance()))
        .collect::<Vec<_>>();

    Response::data(&StatusCode::OK, &accounts_res)
}

#[utoipa::path(
    get,
    path = "/api/rest/user/{user_id}/accounts",
    tag = ACCOUNT_TAG,
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user's accounts", body = [AccountResJson]),
        (status = 403, description = "Caller is not an admin or target is an admin", body = ErrorRes),
        (status = 404, description = "No user with this id or the user has no accounts", body = ErrorRes)
    ),
)]
pub(crate) async fn find_many_by_user(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindManyAccountPath>,
) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "Only admin can get another user accounts",
        );
    }

    let target_data = match UserDao::db_select(ctx.dao().db(), path.user_id()).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return Response::error_raw(&StatusCode::NOT_FOUND, "User with this id not found")
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if *target_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Admin cannot get another admin data");
    }

    let accounts_data =
        match AccountDao::db_select_many_by_user_id(ctx.dao().db(), target_data.id()).await {
            Ok(data) => data,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    if accounts_data.is_empty() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "User with this id has no accounts");
    }

    let accounts_res = accounts_data
        .iter()
        .map(|account| AccountResJson::new(account.id(), account.balance()))
        .collect::<Vec<_>>();

    Response::data(&StatusCode::OK, &accounts_res)
}
