use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use pb_dao::{account::AccountDao, payment::PaymentDao, user::UserDao};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        payment::{InsertOnePaymentReqJson, PaymentResJson},
        ErrorRes, Response,
    },
    service::authenticated_user,
};

pub static PAYMENT_TAG: &str = "payment";

pub fn payment_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/payments", web::get().to(find_many_current))
        .route("/payment", web::post().to(process_one));
}

#[utoipa::path(
    get,
    path = "/api/rest/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Payments credited to the authenticated user's accounts", body = [PaymentResJson]),
        (status = 403, description = "Admin cannot have payments", body = ErrorRes),
        (status = 404, description = "The user has no payments", body = ErrorRes)
    ),
)]
pub(crate) async fn find_many_current(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let user_data = match authenticated_user(&ctx, auth.token()).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    if *user_data.is_admin() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Admin cannot have payments");
    }

    let accounts_data = match AccountDao::db_select_many_by_user_id(ctx.dao().db(), user_data.id()).await
    {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let mut payments_data = Vec::new();
    for account_data in &accounts_data {
        match PaymentDao::db_select_many_by_account_id(ctx.dao().db(), account_data.id()).await {
            Ok(mut data) => payments_data.append(&mut data),
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        }
    }

    if payments_data.is_empty() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "User does not have payments");
    }

    let payments_res = payments_data
        .iter()
        .map(|payment| {
            PaymentResJson::new(
                payment.id(),
                payment.transaction_id(),
                payment.account_id(),
                payment.amount(),
                payment.created_at(),
            )
        })
        .collect::<Vec<_>>();

    Response::data(&StatusCode::OK, &payments_res)
}

#[utoipa::path(
    post,
    path = "/api/rest/payment",
    tag = PAYMENT_TAG,
    request_body = InsertOnePaymentReqJson,
    responses(
        (status = 200, description = "Processed the payment", body = String),
        (status = 400, description = "Invalid payment data, replayed transaction or bad signature", body = ErrorRes),
        (status = 403, description = "The target user is an admin", body = ErrorRes)
    ),
)]
pub(crate) async fn process_one(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertOnePaymentReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let user_data = match UserDao::db_select(ctx.dao().db(), data.user_id()).await {
        Ok(Some(data)) => data,
        Ok(None) => return Response::error_raw(&StatusCode::BAD_REQUEST, "User does not exist"),
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };
    if *user_data.is_admin() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "Cannot process a payment if the user is an admin",
        );
    }

    match PaymentDao::db_select_by_transaction_id(ctx.dao().db(), data.transaction_id()).await {
        Ok(Some(_)) => {
            return Response::error_raw(
                &StatusCode::BAD_REQUEST,
                "Transaction with this id already exists",
            )
        }
        Ok(None) => (),
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }

    if !ctx.hash().sha256().verify_payment_signature(
        data.signature(),
        data.transaction_id(),
        data.user_id(),
        data.account_id(),
        data.amount(),
    ) {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Signature is incorrect");
    }

    let mut account_data = match AccountDao::db_select(ctx.dao().db(), data.account_id()).await {
        Ok(Some(account_data)) => {
            if account_data.user_id() != data.user_id() {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    "Account does not belong to the specified user",
                );
            }
            account_data
        }
        Ok(None) => {
            let account_data = AccountDao::new(data.account_id(), data.user_id());
            if let Err(err) = account_data.db_insert(ctx.dao().db()).await {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }
            account_data
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if let Err(err) = account_data
        .db_credit_balance(ctx.dao().db(), data.amount())
        .await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let payment_data = PaymentDao::new(
        data.transaction_id(),
        data.account_id(),
        data.amount(),
        data.signature(),
    );
    if let Err(err) = payment_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, "Payment was successfully processed")
}
