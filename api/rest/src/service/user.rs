use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use pb_dao::user::UserDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        user::{
            DeleteOneUserPath, DeleteOneUserResJson, FindOneUserPath, InsertOneUserReqJson,
            UpdateOneUserPath, UpdateOneUserReqJson, UserResJson,
        },
        ErrorRes, Response,
    },
    service::authenticated_user,
};

pub static USER_TAG: &str = "user";

pub fn user_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::post().to(insert_one))
        .route("/user", web::get().to(find_current))
        .route("/users", web::get().to(find_many))
        .route("/user/{user_id}", web::get().to(find_one))
        .route("/user/{user_id}", web::patch().to(update_one))
        .route("/user/{user_id}", web::delete().to(delete_one));
}

#[utoipa::path(
    post,
    path = "/api/rest/user",
    tag = USER_TAG,
    request_body = InsertOneUserReqJson,
    responses(
        (status = 201, description = "Created a user", body = UserResJson),
        (status = 403, description = "Caller is not an admin", body = ErrorRes),
        (status = 409, description = "Email is already taken", body = ErrorRes),
        (status = 422, description = "Invalid user data", body = ErrorRes)
    ),
)]
pub(crate) async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneUserReqJson>,
) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Only admin can create users");
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::UNPROCESSABLE_ENTITY, &err.to_string());
    }
    if data.password() != data.repeat_password() {
        return Response::error_raw(&StatusCode::UNPROCESSABLE_ENTITY, "Passwords do not match");
    }

    match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(Some(_)) => {
            return Response::error_raw(
                &StatusCode::CONFLICT,
                "User with this email already exists",
            )
        }
        Ok(None) => (),
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }

    let password_hash = match ctx.hash().argon2().hash_password(data.password().as_bytes()) {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let new_user_data = UserDao::new(data.email(), data.full_name(), &password_hash, &false);
    if let Err(err) = new_user_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &UserResJson::new(
            new_user_data.id(),
            new_user_data.email(),
            new_user_data.full_name(),
            new_user_data.created_at(),
            new_user_data.updated_at(),
        ),
    )
}

#[utoipa::path(
    get,
    path = "/api/rest/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The authenticated user's own data", body = UserResJson),
        (status = 401, description = "Missing or invalid access token", body = ErrorRes)
    ),
)]
pub(crate) async fn find_current(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    Response::data(
        &StatusCode::OK,
        &UserResJson::new(
            user_data.id(),
            user_data.email(),
            user_data.full_name(),
            user_data.created_at(),
            user_data.updated_at(),
        ),
    )
}

#[utoipa::path(
    get,
    path = "/api/rest/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user's data", body = UserResJson),
        (status = 403, description = "Caller is not an admin or target is an admin", body = ErrorRes),
        (status = 404, description = "No user with this id", body = ErrorRes)
    ),
)]
pub(crate) async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindOneUserPath>,
) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Only admin can get user data");
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

    Response::data(
        &StatusCode::OK,
        &UserResJson::new(
            target_data.id(),
            target_data.email(),
            target_data.full_name(),
            target_data.created_at(),
            target_data.updated_at(),
        ),
    )
}

#[utoipa::path(
    get,
    path = "/api/rest/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All non-admin users", body = [UserResJson]),
        (status = 403, description = "Caller is not an admin", body = ErrorRes),
        (status = 404, description = "No non-admin users exist", body = ErrorRes)
    ),
)]
pub(crate) async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Only admin can get list of users");
    }

    let users_data = match UserDao::db_select_many_non_admins(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if users_data.is_empty() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "No non-admin users");
    }

    let users_res = users_data
        .iter()
        .map(|user| {
            UserResJson::new(
                user.id(),
                user.email(),
                user.full_name(),
                user.created_at(),
                user.updated_at(),
            )
        })
        .collect::<Vec<_>>();

    Response::data(&StatusCode::OK, &users_res)
}

#[utoipa::path(
    patch,
    path = "/api/rest/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateOneUserReqJson,
    responses(
        (status = 200, description = "Updated the user", body = UserResJson),
        (status = 403, description = "Caller is not an admin or target is an admin", body = ErrorRes),
        (status = 404, description = "No user with this id", body = ErrorRes),
        (status = 409, description = "Email is already taken", body = ErrorRes),
        (status = 422, description = "Invalid user data or no fields to update", body = ErrorRes)
    ),
)]
pub(crate) async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneUserPath>,
    data: web::Json<UpdateOneUserReqJson>,
) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Only admin can update users");
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::UNPROCESSABLE_ENTITY, &err.to_string());
    }
    if data.is_all_none() {
        return Response::error_raw(
            &StatusCode::UNPROCESSABLE_ENTITY,
            "At least one field must be provided",
        );
    }
    if data.password() != data.repeat_password() {
        return Response::error_raw(&StatusCode::UNPROCESSABLE_ENTITY, "Passwords do not match");
    }

    let mut target_data = match UserDao::db_select(ctx.dao().db(), path.user_id()).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return Response::error_raw(&StatusCode::NOT_FOUND, "User with this id not found")
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if *target_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Admin cannot update another admin");
    }

    if let Some(email) = data.email() {
        if email != target_data.email() {
            match UserDao::db_select_by_email(ctx.dao().db(), email).await {
                Ok(Some(_)) => {
                    return Response::error_raw(
                        &StatusCode::CONFLICT,
                        "User with this email already exists",
                    )
                }
                Ok(None) => (),
                Err(err) => {
                    return Response::error_raw(
                        &StatusCode::INTERNAL_SERVER_ERROR,
                        &err.to_string(),
                    )
                }
            }
        }
        target_data.set_email(email);
    }
    if let Some(full_name) = data.full_name() {
        target_data.set_full_name(full_name);
    }
    if let Some(password) = data.password() {
        let password_hash = match ctx.hash().argon2().hash_password(password.as_bytes()) {
            Ok(hash) => hash,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };
        target_data.set_password_hash(&password_hash);
    }

    if let Err(err) = target_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &UserResJson::new(
            target_data.id(),
            target_data.email(),
            target_data.full_name(),
            target_data.created_at(),
            target_data.updated_at(),
        ),
    )
}

#[utoipa::path(
    delete,
    path = "/api/rest/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted the user", body = DeleteOneUserResJson),
        (status = 403, description = "Caller is not an admin or target is an admin", body = ErrorRes),
        (status = 404, description = "No user with this id", body = ErrorRes)
    ),
)]
pub(crate) async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneUserPath>,
) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if !user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Only admin can delete users");
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
        return Response::error_raw(&StatusCode::FORBIDDEN, "Admin cannot delete another admin");
    }

    if let Err(err) = UserDao::db_delete(ctx.dao().db(), target_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &DeleteOneUserResJson::new(target_data.id()),
    )
}
