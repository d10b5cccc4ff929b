//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use board_shared::PostTextRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.board.list().await)
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostTextRequest>,
) -> AppResult<HttpResponse> {
    let text = body.into_inner().text.unwrap_or_default();
    let post = state.board.create(&text).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostTextRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let text = body.into_inner().text.unwrap_or_default();
    let post = state.board.update(&id, &text).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.board.delete(&id).await?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
