use crate::post::post_model::{CreatePostRequest, NewBlogPost, UpdatePostRequest};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Upper bound on posts returned by the list endpoint.
pub const MAX_LISTED_POSTS: i64 = 10;

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CustomError> {
    value.ok_or(CustomError::MissingField(field))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /blog-posts
pub async fn list_posts(store: web::Data<dyn PostStore>) -> Result<HttpResponse, CustomError> {
    let posts = store.find(MAX_LISTED_POSTS).await?;
    let blogposts: Vec<_> = posts.iter().map(|p| p.public_view()).collect();

    Ok(HttpResponse::Ok().json(json!({ "blogposts": blogposts })))
}

/// GET /blog-posts/{id}
pub async fn get_post(
    store: web::Data<dyn PostStore>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let post = store.find_by_id(&post_id).await?.ok_or_else(|| {
        CustomError::InternalServerError(format!("No blog post with id {}", post_id))
    })?;

    Ok(HttpResponse::Ok().json(post.public_view()))
}

/// POST /blog-posts
pub async fn create_post(
    store: web::Data<dyn PostStore>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let CreatePostRequest {
        title,
        content,
        author,
    } = body.into_inner();

    // Checked in this order; the first missing field names the error.
    let title = require("title", non_empty(title))?;
    let content = require("content", non_empty(content))?;
    let author = require("author", author)?;

    let post = store
        .create(NewBlogPost {
            title,
            content,
            author,
        })
        .await?;
    log::info!("Created blog post {}", post.id);

    Ok(HttpResponse::Created().json(post.public_view()))
}

/// PUT /blog-posts/{id}
pub async fn update_post(
    store: web::Data<dyn PostStore>,
    post_id: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let body = body.into_inner();

    let body_id = body.id.as_ref().and_then(|id| id.as_str());
    if body_id != Some(post_id.as_str()) {
        return Err(CustomError::BadRequestError(
            "Request path id and request body id values must match".to_string(),
        ));
    }

    store.update_by_id(&post_id, body.into()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
pub async fn delete_post(
    store: web::Data<dyn PostStore>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    store.delete_by_id(&post_id).await?;
    log::info!("Deleted blog post {}", post_id);

    Ok(HttpResponse::NoContent().finish())
}
