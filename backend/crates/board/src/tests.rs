//! Router-level tests for the Board crate
//!
//! The board router is composed with the auth router exactly as the api
//! binary does it, so writes go through a real sign-up and sign-in.

#[cfg(test)]
mod router_tests {
    use std::time::Duration;

    use auth::{AuthAppState, AuthConfig, InMemoryUserRepository, auth_router};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{InMemoryBoardRepository, board_router};

    fn app() -> Router {
        let auth_state = AuthAppState::new(InMemoryUserRepository::new(), AuthConfig::development());
        let board = board_router(InMemoryBoardRepository::new(), auth_state.middleware_state());
        auth_router(auth_state).merge(board)
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        app.clone()
            .oneshot(request(method, uri, cookie, body))
            .await
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Sign up + sign in; returns the Cookie header value
    async fn login(app: &Router, nickname: &str) -> String {
        let signup = json!({
            "nickname": nickname,
            "password": "secret",
            "confirmPassword": "secret",
        });
        let response = send(app, "POST", "/users", None, Some(signup)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let signin = json!({ "nickname": nickname, "password": "secret" });
        let response = send(app, "POST", "/auth", None, Some(signin)).await;
        assert_eq!(response.status(), StatusCode::OK);

        response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    /// Create a post and return its id
    async fn create_post(app: &Router, cookie: &str, title: &str) -> String {
        let body = json!({ "title": title, "content": "content" });
        let response = send(app, "POST", "/posts", Some(cookie), Some(body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let list = body_json(send(app, "GET", "/posts", None, None).await).await;
        list["posts"]
            .as_array()
            .unwrap()
            .iter()
            .find(|post| post["title"] == title)
            .unwrap()["postId"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn comment_ids(app: &Router, post_id: &str) -> Vec<String> {
        let uri = format!("/posts/{post_id}/comments");
        let list = body_json(send(app, "GET", &uri, None, None).await).await;
        list["comments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["commentId"].as_str().unwrap().to_string())
            .collect()
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_post_lifecycle() {
        let app = app();
        let cookie = login(&app, "abc1").await;
        let post_id = create_post(&app, &cookie, "hello").await;
        let uri = format!("/posts/{post_id}");

        let response = send(&app, "GET", &uri, None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let post = body_json(response).await;
        assert_eq!(post["post"]["nickname"], "abc1");
        assert_eq!(post["post"]["content"], "content");

        let update = json!({ "title": "edited", "content": "new content" });
        let response = send(&app, "PUT", &uri, Some(&cookie), Some(update)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let post = body_json(send(&app, "GET", &uri, None, None).await).await;
        assert_eq!(post["post"]["title"], "edited");

        let response = send(&app, "DELETE", &uri, Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", &uri, None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_posts_listed_newest_first() {
        let app = app();
        let cookie = login(&app, "abc1").await;

        create_post(&app, &cookie, "first").await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        create_post(&app, &cookie, "second").await;

        let list = body_json(send(&app, "GET", "/posts", None, None).await).await;
        let titles: Vec<_> = list["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert!(list["posts"][0].get("content").is_none());
    }

    #[tokio::test]
    async fn test_writes_require_login() {
        let app = app();
        let body = json!({ "title": "t", "content": "c" });

        let response = send(&app, "POST", "/posts", None, Some(body)).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["errorMessage"], "Login is required.");
    }

    #[tokio::test]
    async fn test_invalid_post_payload_is_precondition_failed() {
        let app = app();
        let cookie = login(&app, "abc1").await;

        let blank = json!({ "title": "  ", "content": "c" });
        let response = send(&app, "POST", "/posts", Some(&cookie), Some(blank)).await;
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

        let wrong_type = json!({ "title": 1, "content": "c" });
        let response = send(&app, "POST", "/posts", Some(&cookie), Some(wrong_type)).await;
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

        let request = Request::builder()
            .method("POST")
            .uri("/posts")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{oops"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(
            body_json(response).await["errorMessage"],
            "The data format is invalid."
        );
    }

    #[tokio::test]
    async fn test_only_author_can_change_post() {
        let app = app();
        let owner = login(&app, "owner1").await;
        let other = login(&app, "other1").await;
        let post_id = create_post(&app, &owner, "mine").await;
        let uri = format!("/posts/{post_id}");

        let update = json!({ "title": "stolen", "content": "c" });
        let response = send(&app, "PUT", &uri, Some(&other), Some(update)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, "DELETE", &uri, Some(&other), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let post = body_json(send(&app, "GET", &uri, None, None).await).await;
        assert_eq!(post["post"]["title"], "mine");
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_post_id_is_not_found() {
        let app = app();
        let cookie = login(&app, "abc1").await;

        let response = send(&app, "GET", "/posts/not-a-uuid", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let missing = format!("/posts/{}", uuid::Uuid::new_v4());
        let response = send(&app, "GET", &missing, None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let update = json!({ "title": "t", "content": "c" });
        let response = send(&app, "PUT", &missing, Some(&cookie), Some(update)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let app = app();
        let cookie = login(&app, "abc1").await;
        let post_id = create_post(&app, &cookie, "post").await;
        let comments_uri = format!("/posts/{post_id}/comments");

        let response = send(
            &app,
            "POST",
            &comments_uri,
            Some(&cookie),
            Some(json!({ "comment": "first" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        tokio::time::sleep(Duration::from_millis(5)).await;
        send(
            &app,
            "POST",
            &comments_uri,
            Some(&cookie),
            Some(json!({ "comment": "second" })),
        )
        .await;

        let list = body_json(send(&app, "GET", &comments_uri, None, None).await).await;
        assert_eq!(list["comments"][0]["comment"], "second");
        assert_eq!(list["comments"][1]["comment"], "first");
        assert_eq!(list["comments"][0]["nickname"], "abc1");

        let ids = comment_ids(&app, &post_id).await;
        let comment_uri = format!("{comments_uri}/{}", ids[0]);

        let response = send(
            &app,
            "PUT",
            &comment_uri,
            Some(&cookie),
            Some(json!({ "comment": "edited" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "DELETE", &comment_uri, Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(comment_ids(&app, &post_id).await, vec![ids[1].clone()]);
    }

    #[tokio::test]
    async fn test_empty_comment_is_rejected() {
        let app = app();
        let cookie = login(&app, "abc1").await;
        let post_id = create_post(&app, &cookie, "post").await;
        let uri = format!("/posts/{post_id}/comments");

        let response = send(&app, "POST", &uri, Some(&cookie), Some(json!({}))).await;

        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(
            body_json(response).await["errorMessage"],
            "Please enter the comment content."
        );
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let app = app();
        let cookie = login(&app, "abc1").await;
        let uri = format!("/posts/{}/comments", uuid::Uuid::new_v4());

        let response = send(&app, "POST", &uri, Some(&cookie), Some(json!({ "comment": "hi" }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "GET", &uri, None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_comment_scoped_to_its_post_and_author() {
        let app = app();
        let owner = login(&app, "owner1").await;
        let other = login(&app, "other1").await;
        let post_a = create_post(&app, &owner, "a").await;
        let post_b = create_post(&app, &owner, "b").await;

        send(
            &app,
            "POST",
            &format!("/posts/{post_a}/comments"),
            Some(&owner),
            Some(json!({ "comment": "on a" })),
        )
        .await;
        let comment_id = comment_ids(&app, &post_a).await.remove(0);

        // Addressed through the wrong post
        let wrong_post = format!("/posts/{post_b}/comments/{comment_id}");
        let response = send(&app, "DELETE", &wrong_post, Some(&owner), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["errorMessage"],
            "The comment does not exist."
        );

        // Not the author
        let uri = format!("/posts/{post_a}/comments/{comment_id}");
        let response = send(
            &app,
            "PUT",
            &uri,
            Some(&other),
            Some(json!({ "comment": "hijack" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, "DELETE", &uri, Some(&other), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_deleting_post_removes_comments() {
        let app = app();
        let cookie = login(&app, "abc1").await;
        let post_id = create_post(&app, &cookie, "post").await;
        let comments_uri = format!("/posts/{post_id}/comments");

        send(
            &app,
            "POST",
            &comments_uri,
            Some(&cookie),
            Some(json!({ "comment": "hi" })),
        )
        .await;
        let comment_id = comment_ids(&app, &post_id).await.remove(0);

        let response = send(&app, "DELETE", &format!("/posts/{post_id}"), Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", &comments_uri, None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(
            &app,
            "DELETE",
            &format!("{comments_uri}/{comment_id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
