//! Author handlers.

use actix_web::{HttpResponse, web};

use quill_core::AuthorChanges;
use quill_core::domain::{Author, NewAuthor};
use quill_shared::ApiResponse;
use quill_shared::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn author_response(author: &Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id(),
        name: author.name().to_owned(),
        phone_number: author.phone_number().map(str::to_owned),
        created_at: author.created_at().to_rfc3339(),
        updated_at: author.updated_at().map(|t| t.to_rfc3339()),
    }
}

/// POST /api/authors
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewAuthor::new(req.name.unwrap_or_default(), req.phone_number)?;
    let author = state.authors.create(draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(author_response(&author))))
}

/// GET /api/authors
pub async fn list_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors: Vec<_> = state
        .authors
        .list()
        .await?
        .iter()
        .map(author_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(authors)))
}

/// GET /api/authors/{id}
pub async fn get_author(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let author = state.authors.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(author_response(&author))))
}

/// PATCH /api/authors/{id}
pub async fn update_author(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = AuthorChanges {
        name: req.name,
        phone_number: req.phone_number,
    };

    let author = state.authors.update(path.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(author_response(&author))))
}

/// DELETE /api/authors/{id}
pub async fn delete_author(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.authors.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
