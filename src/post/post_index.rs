use super::post_controller::{create_post, delete_post, get_post, list_posts, update_post};
use crate::utils::error::CustomError;
use actix_web::web;

/// Malformed JSON bodies are client errors with a JSON message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| CustomError::BadRequestError(err.to_string()).into())
}

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog-posts")
            .app_data(json_config())
            .route("", web::get().to(list_posts))
            .route("", web::post().to(create_post))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(update_post))
            .route("/{id}", web::delete().to(delete_post)),
    );
}
