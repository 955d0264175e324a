use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use pb_config::AppConfigMode;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    configure::configure, context::ApiRestCtx, error_handler::default_error_handler,
    logger::logger_format, openapi::ApiDoc,
};

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod openapi;
mod service;

pub struct ApiRestServer {
    mode: AppConfigMode,
    address: String,
    allowed_origin: Option<String>,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        mode: &AppConfigMode,
        host: &str,
        port: &u16,
        allowed_origin: &Option<String>,
        ctx: ApiRestCtx,
    ) -> Self {
        pb_log::info(Some("⚡"), "ApiRestServer: Initializing component");

        Self {
            mode: *mode,
            address: format!("{host}:{port}"),
            allowed_origin: allowed_origin.clone(),
            context: web::Data::new(ctx),
        }
    }

    pub async fn run(self) -> Result<()> {
        pb_log::info(Some("💫"), "ApiRestServer: Running component");

        let mode = self.mode;
        let allowed_origin = self.allowed_origin;
        let context = self.context;

        Ok(HttpServer::new(move || {
            let cors = match mode {
                AppConfigMode::Development => Cors::permissive(),
                AppConfigMode::Production => {
                    let cors = Cors::default().allow_any_method().allow_any_header();
                    match &allowed_origin {
                        Some(origin) => cors.allowed_origin(origin),
                        None => cors,
                    }
                }
            };

            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .wrap(cors)
                .app_data(context.clone())
                .configure(configure)
                .service(
                    SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
                )
        })
        .bind(self.address)?
        .run()
        .await?)
    }
}
