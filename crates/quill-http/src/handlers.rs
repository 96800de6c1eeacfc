//! The four post handlers. Each performs one store operation.

use quill_core::PostService;
use quill_core::domain::NewPost;
use quill_shared::MessageResponse;

use crate::error::ApiResult;
use crate::reply::Reply;

/// POST /posts
pub async fn create(posts: &PostService, body: Option<&[u8]>) -> ApiResult {
    let fields = NewPost::from_body(body)?;
    posts.create(fields).await?;
    Ok(Reply::message(200, MessageResponse::post_created()))
}

/// GET /posts
pub async fn get_all(posts: &PostService) -> ApiResult {
    let all = posts.list().await?;
    Reply::ok(&all)
}

/// GET /posts/{id}
pub async fn get_one(posts: &PostService, id: &str) -> ApiResult {
    let post = posts.find(id).await?;
    Reply::ok(&post)
}

/// DELETE /posts/{id}
pub async fn delete(posts: &PostService, id: &str) -> ApiResult {
    posts.delete(id).await?;
    Ok(Reply::message(200, MessageResponse::post_deleted()))
}
