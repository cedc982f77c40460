use axum::http::StatusCode;
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn registration_returns_the_public_profile() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/users",
            None,
            Some(json!({ "username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let user = &response.data()["addedUser"];
    assert!(user["id"].as_str().unwrap().starts_with("user-"));
    assert_eq!(user["username"], "dicoding");
    assert_eq!(user["fullname"], "Dicoding Indonesia");
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn registration_rejects_bad_payloads() {
    let app = TestApp::new();

    let cases = [
        (
            json!({ "username": "dicoding", "password": "secret" }),
            "cannot create a new user because a required property is missing",
        ),
        (
            json!({ "username": 123, "password": "secret", "fullname": ["Dicoding"] }),
            "cannot create a new user because a property has the wrong data type",
        ),
        (
            json!({ "username": "a".repeat(51), "password": "secret", "fullname": "Dicoding" }),
            "cannot create a new user because the username exceeds 50 characters",
        ),
        (
            json!({ "username": "dico ding", "password": "secret", "fullname": "Dicoding" }),
            "cannot create a new user because the username contains restricted characters",
        ),
    ];

    for (payload, message) in cases {
        let response = app.request("POST", "/users", None, Some(payload)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message(), message);
    }
}

#[tokio::test]
async fn taken_username_is_400() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app.register("dicoding").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "username is already taken");
}
