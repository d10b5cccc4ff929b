//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            ),
    );
}

/// Post bodies carry only `text`, so any unreadable body is reported as missing text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(board_core::ValidationError::Required.to_string()).into()
    })
}
