use actix_web::web;

use crate::service::{
    account::account_api, auth::auth_api, payment::payment_api, root::root_api, user::user_api,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).service(
        web::scope("/api/rest")
            .configure(auth_api)
            .configure(user_api)
            .configure(account_api)
            .configure(payment_api),
    );
}
