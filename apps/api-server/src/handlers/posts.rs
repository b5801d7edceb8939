//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::PostChanges;
use quill_core::domain::{Category, NewPost, Post};
use quill_shared::ApiResponse;
use quill_shared::dto::{CreatePostRequest, PostListQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id(),
        title: post.title().to_owned(),
        content: post.content().to_owned(),
        summary: post.summary().map(str::to_owned),
        category: post.category().as_str().to_owned(),
        created_at: post.created_at().to_rfc3339(),
        updated_at: post.updated_at().map(|t| t.to_rfc3339()),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
        req.summary,
        req.category.as_deref().unwrap_or_default(),
    )?;
    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(post_response(&post))))
}

/// GET /api/posts?category=Fiction
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let category = query
        .into_inner()
        .category
        .map(|c| c.parse::<Category>())
        .transpose()?;

    let posts: Vec<_> = state
        .posts
        .list(category)
        .await?
        .iter()
        .map(post_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        summary: req.summary,
        category: req.category,
    };

    let post = state.posts.update(path.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::handlers::test_support::app;
    use crate::state::AppState;

    fn content() -> String {
        "a".repeat(300)
    }

    #[actix_web::test]
    async fn test_create_clickbait_post() {
        let app = test::init_service(app(AppState::in_memory())).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Top 10 Secrets",
                "content": content(),
                "category": "Fiction",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["category"], "Fiction");
        assert!(body["data"]["summary"].is_null());
    }

    #[actix_web::test]
    async fn test_rejected_posts_name_the_field() {
        let app = test::init_service(app(AppState::in_memory())).await;

        for (payload, field, detail) in [
            (
                json!({ "title": "My Day", "content": content(), "category": "Fiction" }),
                "title",
                "Post title must be sufficiently clickbait-y",
            ),
            (
                json!({ "title": "Top 10 Secrets", "content": content(), "category": "fiction" }),
                "category",
                "Post category must be 'Fiction' or 'Non-Fiction'",
            ),
            (
                json!({ "content": content(), "category": "Fiction" }),
                "title",
                "Post must have a title",
            ),
            (
                json!({ "title": "Top 10 Secrets", "content": "short", "category": "Fiction" }),
                "content",
                "Post content must be at least 250 characters",
            ),
            (
                json!({
                    "title": "Top 10 Secrets",
                    "content": content(),
                    "summary": "s".repeat(251),
                    "category": "Fiction",
                }),
                "summary",
                "Post summary must be 250 characters or fewer",
            ),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["field"], field);
            assert_eq!(body["detail"], detail);
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_list_by_category() {
        let app = test::init_service(app(AppState::in_memory())).await;

        for (title, category) in [
            ("Guess Again", "Fiction"),
            ("Secret History", "Non-Fiction"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "title": title, "content": content(), "category": category }))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get()
            .uri("/api/posts?category=Non-Fiction")
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        let posts = listed["data"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["title"], "Secret History");

        let req = test::TestRequest::get()
            .uri("/api/posts?category=poetry")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[actix_web::test]
    async fn test_patch_post() {
        let app = test::init_service(app(AppState::in_memory())).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Top Picks",
                "content": content(),
                "summary": "Picks.",
                "category": "Fiction",
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{id}"))
            .set_json(json!({ "summary": null, "category": "Non-Fiction" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert!(updated["data"]["summary"].is_null());
        assert_eq!(updated["data"]["category"], "Non-Fiction");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{id}"))
            .set_json(json!({ "title": "Plain Title" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["data"]["title"], "Top Picks");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(app(AppState::in_memory())).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
