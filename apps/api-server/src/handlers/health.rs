//! Health check endpoint.

use actix_web::HttpResponse;
use board_shared::HealthResponse;

/// Health check endpoint - liveness only.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok(env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app =
            test::init_service(App::new().route("/api/health", web::get().to(health_check))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
    }
}
