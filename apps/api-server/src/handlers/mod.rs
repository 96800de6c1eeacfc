//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Largest accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .route("/health", web::get().to(health::health_check))
        .service(web::resource("/posts").to(posts::collection))
        .service(web::resource("/posts/").to(posts::missing_id))
        .service(web::resource("/posts/{id}").to(posts::item))
        .default_service(web::to(posts::unmatched));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use quill_infra::InMemoryPostStore;

    use super::{MAX_BODY_BYTES, configure_routes};
    use crate::state::AppState;

    const BODY: &str = r#"{"title":"A","description":"d","author":"a","publicationDate":"2025-01-01"}"#;

    fn state() -> AppState {
        AppState::with_store(Arc::new(InMemoryPostStore::new()))
    }

    #[actix_web::test]
    async fn test_post_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_payload(BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Post created"}));

        let req = test::TestRequest::get().uri("/posts").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let posts = list.as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["publicationDate"], "2025-01-01");
        let id = posts[0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&format!("/posts/{id}")).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, posts[0]);

        let req = test::TestRequest::delete().uri(&format!("/posts/{id}")).to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted, json!({"message": "Post deleted"}));

        let req = test::TestRequest::get().uri(&format!("/posts/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Post not found"}));
    }

    #[actix_web::test]
    async fn test_create_without_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Missing body"}));
    }

    #[actix_web::test]
    async fn test_unsupported_method() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "GET, POST");
    }

    #[actix_web::test]
    async fn test_oversized_body_is_json_413() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_payload(vec![b'x'; MAX_BODY_BYTES + 1])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Payload too large"}));

        let req = test::TestRequest::get().uri("/posts").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list, json!([]));
    }

    #[actix_web::test]
    async fn test_empty_id_segment_is_missing_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Missing id"}));

        let req = test::TestRequest::delete().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_path_is_json_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Not found"}));

        let req = test::TestRequest::get().uri("/posts/a/b").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
