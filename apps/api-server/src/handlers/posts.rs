//! REST handlers for the post operations.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::NewPost;
use inkpost_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::ApiResult;
use crate::state::AppState;

/// POST /posts
///
/// Creates the post and returns the row as re-read from the store, so the
/// response carries the store-assigned id and creation timestamp.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create_post(NewPost::new(req.title, req.content, req.author))
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;

    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let post = state.posts.get_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
