//! # integration-tests
//!
//! [`TestApp`] builds the full router over the in-memory backend with the real
//! argon2 hasher and JWT manager, and drives it with `tower::ServiceExt::oneshot`.
//! The helpers register, log in and create content the way a client would.

use std::sync::Arc;

use api_adapters::{router, AppState};
use auth_adapters::{Argon2PasswordHash, JwtTokenManager};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::TimeDelta;
use serde_json::{json, Value};
use services::Ports;
use storage_adapters::MemoryStore;
use tower::ServiceExt;

pub const PASSWORD: &str = "secret";

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// `body.data`, after asserting the success envelope.
    pub fn data(&self) -> &Value {
        assert_eq!(self.body["status"], "success", "unexpected body: {}", self.body);
        &self.body["data"]
    }

    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// Someone registered and logged in.
pub struct Client {
    pub id: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TestApp {
    router: Router,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_access_token_age(TimeDelta::hours(1))
    }

    pub fn with_access_token_age(age: TimeDelta) -> Self {
        let store = Arc::new(MemoryStore::default());
        let ports = Ports {
            threads: store.clone(),
            comments: store.clone(),
            replies: store.clone(),
            likes: store.clone(),
            users: store.clone(),
            authentications: store,
            password_hash: Arc::new(Argon2PasswordHash),
            token_manager: Arc::new(JwtTokenManager::new("access-secret", "refresh-secret", age)),
        };
        Self {
            router: router(AppState::new(ports)),
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("valid request");

        let response = self.router.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None, None).await
    }

    pub async fn register(&self, username: &str) -> TestResponse {
        self.request(
            "POST",
            "/users",
            None,
            Some(json!({ "username": username, "password": PASSWORD, "fullname": "Test User" })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/authentications",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Registers `username` and logs in.
    pub async fn client(&self, username: &str) -> Client {
        let registered = self.register(username).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);
        let id = string(&registered.data()["addedUser"]["id"]);

        let login = self.login(username, PASSWORD).await;
        assert_eq!(login.status, StatusCode::CREATED, "{}", login.body);
        Client {
            id,
            username: username.to_owned(),
            access_token: string(&login.data()["accessToken"]),
            refresh_token: string(&login.data()["refreshToken"]),
        }
    }

    pub async fn thread(&self, client: &Client) -> String {
        let response = self
            .request(
                "POST",
                "/threads",
                Some(&client.access_token),
                Some(json!({ "title": "a thread", "body": "thread body" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        string(&response.data()["addedThread"]["id"])
    }

    pub async fn comment(&self, client: &Client, thread_id: &str, content: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/threads/{thread_id}/comments"),
                Some(&client.access_token),
                Some(json!({ "content": content })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        string(&response.data()["addedComment"]["id"])
    }

    pub async fn reply(
        &self,
        client: &Client,
        thread_id: &str,
        comment_id: &str,
        content: &str,
    ) -> String {
        let response = self
            .request(
                "POST",
                &format!("/threads/{thread_id}/comments/{comment_id}/replies"),
                Some(&client.access_token),
                Some(json!({ "content": content })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        string(&response.data()["addedReply"]["id"])
    }

    /// `data.thread` of `GET /threads/{thread_id}`.
    pub async fn thread_detail(&self, thread_id: &str) -> Value {
        let response = self.get(&format!("/threads/{thread_id}")).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.data()["thread"].clone()
    }
}

fn string(value: &Value) -> String {
    value.as_str().expect("string field").to_owned()
}
