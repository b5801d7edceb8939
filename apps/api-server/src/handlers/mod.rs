//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/authors")
                    .route("", web::post().to(authors::create_author))
                    .route("", web::get().to(authors::list_authors))
                    .route("/{id}", web::get().to(authors::get_author))
                    .route("/{id}", web::patch().to(authors::update_author))
                    .route("/{id}", web::delete().to(authors::delete_author)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("", web::get().to(posts::list_posts))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::patch().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}

/// Malformed JSON bodies get the same problem-details shape as other errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
