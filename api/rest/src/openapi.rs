use utoipa::OpenApi;

use crate::{
    model::{
        account::AccountResJson,
        auth::{LoginReqJson, TokenResJson},
        payment::{InsertOnePaymentReqJson, PaymentResJson},
        user::{DeleteOneUserResJson, InsertOneUserReqJson, UpdateOneUserReqJson, UserResJson},
        ErrorRes,
    },
    service,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paybase",
        description = "Payment and wallet REST API: users, accounts and signed payment processing"
    ),
    paths(
        service::auth::login,
        service::auth::refresh_token,
        service::user::insert_one,
        service::user::find_current,
        service::user::find_one,
        service::user::find_many,
        service::user::update_one,
        service::user::delete_one,
        service::account::find_many_current,
        service::account::find_many_by_user,
        service::payment::find_many_current,
        service::payment::process_one,
    ),
    components(schemas(
        LoginReqJson,
        TokenResJson,
        InsertOneUserReqJson,
        UpdateOneUserReqJson,
        UserResJson,
        DeleteOneUserResJson,
        AccountResJson,
        InsertOnePaymentReqJson,
        PaymentResJson,
        ErrorRes,
    )),
    tags(
        (name = "auth", description = "Login and token refresh"),
        (name = "user", description = "User management"),
        (name = "account", description = "User accounts"),
        (name = "payment", description = "Payment processing"),
    )
)]
pub struct ApiDoc;
