//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};
use uuid::Uuid;

use quill_core::domain::{NewPost, PostPatch};
use quill_shared::dto::{
    CreatePostRequest, PostListResponse, PostResponse, ReplacePostRequest, UpdatePostRequest,
};

use crate::config::UpdateMode;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Required keys for creating a post, checked in declared order.
const CREATE_REQUIRED_FIELDS: &[&str] = &["title", "content", "author"];

/// Required keys for a replace-mode update, checked in declared order.
const REPLACE_REQUIRED_FIELDS: &[&str] = &["title", "content", "author", "publishDate"];

/// Reject on the first required key absent from the body.
///
/// Only key presence is checked; an empty or null value passes. Fields
/// after the first missing one are not examined.
fn require_fields(
    body: &Map<String, Value>,
    fields: &'static [&'static str],
) -> Result<(), AppError> {
    for &field in fields {
        if !body.contains_key(field) {
            return Err(AppError::MissingField(field));
        }
    }
    Ok(())
}

/// GET /blog-posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list(state.list_limit).await?;

    let response = PostListResponse {
        blogposts: posts.into_iter().map(PostResponse::from).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /blog-posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /blog-posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    require_fields(&body, CREATE_REQUIRED_FIELDS)?;

    let request: CreatePostRequest = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let post = state
        .posts
        .create(NewPost {
            title: request.title,
            content: request.content,
            author: request.author,
            created_at: request.publish_date,
        })
        .await?;

    tracing::info!(id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /blog-posts/{id}
///
/// The body contract depends on the configured [`UpdateMode`]: `Patch`
/// applies any subset of the updatable fields, `Replace` requires all of
/// them plus a body id equal to the path id.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();

    let patch = match state.update_mode {
        UpdateMode::Patch => {
            let request: UpdatePostRequest = serde_json::from_value(Value::Object(body))
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            PostPatch {
                title: request.title,
                content: request.content,
                author: request.author,
                created_at: request.created_at,
            }
        }
        UpdateMode::Replace => {
            require_fields(&body, REPLACE_REQUIRED_FIELDS)?;

            let request: ReplacePostRequest = serde_json::from_value(Value::Object(body))
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            // The body must address the same post as the path, compared
            // as strings.
            let body_id = request.id.unwrap_or_default();
            if body_id != id.to_string() {
                return Err(AppError::IdMismatch {
                    path: id.to_string(),
                    body: body_id,
                });
            }

            PostPatch {
                title: Some(request.title),
                content: Some(request.content),
                author: Some(request.author),
                created_at: Some(request.publish_date),
            }
        }
    };

    tracing::info!(%id, "Updating blog post");

    state
        .posts
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
///
/// Replies 204 whether or not anything matched; only a store failure is
/// an error.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state.posts.delete(id).await?;

    tracing::info!(%id, deleted, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use quill_core::domain::NewPost;
    use quill_core::ports::PostStore;
    use quill_infra::store::MemoryPostStore;
    use quill_shared::dto::{PostListResponse, PostResponse};

    use crate::config::UpdateMode;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn patch_state() -> (Arc<MemoryPostStore>, AppState) {
        state_with_mode(UpdateMode::Patch)
    }

    fn state_with_mode(mode: UpdateMode) -> (Arc<MemoryPostStore>, AppState) {
        let store = Arc::new(MemoryPostStore::new());
        let state = AppState::with_store(store.clone(), 10, mode);
        (store, state)
    }

    async fn seed_post(store: &MemoryPostStore) -> quill_core::domain::Post {
        store
            .create(NewPost {
                title: "CRUD applications".to_owned(),
                content: "blog text".to_owned(),
                author: "Sean".to_owned(),
                created_at: None,
            })
            .await
            .unwrap()
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn create_then_get_roundtrip() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({ "title": "A", "content": "B", "author": "C" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: PostResponse = test::read_body_json(resp).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "A");
        assert_eq!(created.content, "B");
        assert_eq!(created.author, "C");
        assert!(!created.created_at.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: PostResponse = test::read_body_json(resp).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.content, "B");
        assert_eq!(fetched.author, "C");
    }

    #[actix_rt::test]
    async fn create_missing_author_names_the_field() {
        let (store, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({ "title": "A", "content": "B" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Missing `author` in request body");

        // Nothing was persisted.
        assert!(store.list(10).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn create_reports_first_missing_field_in_declared_order() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        // Both title and content are absent - title is declared first.
        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({ "author": "C" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Missing `title` in request body");
    }

    #[actix_rt::test]
    async fn create_accepts_empty_field_values() {
        // Key presence is what counts, not value content.
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({ "title": "", "content": "", "author": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_rt::test]
    async fn create_honors_supplied_publish_date() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({
                "title": "A",
                "content": "B",
                "author": "C",
                "publishDate": "2020-01-02T03:04:05Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: PostResponse = test::read_body_json(resp).await;
        assert!(created.created_at.starts_with("2020-01-02T03:04:05"));
    }

    #[actix_rt::test]
    async fn list_wraps_posts_in_envelope_and_caps_results() {
        let (store, state) = patch_state();
        for _ in 0..12 {
            seed_post(&store).await;
        }
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/blog-posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let listed: PostListResponse = test::read_body_json(resp).await;
        assert_eq!(listed.blogposts.len(), 10);
    }

    #[actix_rt::test]
    async fn get_unknown_id_is_not_found() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Missing posts surface as 404, never as a server error.
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn patch_update_applies_only_supplied_fields() {
        let (store, state) = patch_state();
        let post = seed_post(&store).await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", post.id))
            .set_json(json!({ "title": "Story 2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let updated = store.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "Story 2");
        assert_eq!(updated.content, "blog text");
        assert_eq!(updated.author, "Sean");
    }

    #[actix_rt::test]
    async fn patch_update_of_unknown_id_is_not_found() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .set_json(json!({ "title": "Story 2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn replace_update_requires_every_field() {
        let (store, state) = state_with_mode(UpdateMode::Replace);
        let post = seed_post(&store).await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", post.id))
            .set_json(json!({
                "id": post.id.to_string(),
                "title": "Story 2",
                "content": "new text",
                "author": "Meghan"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Missing `publishDate` in request body");
    }

    #[actix_rt::test]
    async fn replace_update_rejects_id_mismatch() {
        let (store, state) = state_with_mode(UpdateMode::Replace);
        let post = seed_post(&store).await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", post.id))
            .set_json(json!({
                "id": uuid::Uuid::new_v4().to_string(),
                "title": "Story 2",
                "content": "new text",
                "author": "Meghan",
                "publishDate": "2020-01-02T03:04:05Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Store state is unchanged.
        let unchanged = store.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "CRUD applications");
    }

    #[actix_rt::test]
    async fn replace_update_applies_every_field() {
        let (store, state) = state_with_mode(UpdateMode::Replace);
        let post = seed_post(&store).await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", post.id))
            .set_json(json!({
                "id": post.id.to_string(),
                "title": "Story 2",
                "content": "new text",
                "author": "Meghan",
                "publishDate": "2020-01-02T03:04:05Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let updated = store.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "Story 2");
        assert_eq!(updated.content, "new text");
        assert_eq!(updated.author, "Meghan");
        assert_eq!(
            updated.created_at.to_rfc3339(),
            "2020-01-02T03:04:05+00:00"
        );
    }

    #[actix_rt::test]
    async fn delete_then_get_is_not_found() {
        let (store, state) = patch_state();
        let post = seed_post(&store).await;
        let app = test_app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/blog-posts/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn delete_of_unknown_id_still_replies_no_content() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_rt::test]
    async fn health_check_replies_ok() {
        let (_, state) = patch_state();
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
