use axum::http::StatusCode;
use domains::DELETED_COMMENT_CONTENT;
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn added_comment_echoes_owner() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;

    let response = app
        .request(
            "POST",
            &format!("/threads/{thread_id}/comments"),
            Some(&dicoding.access_token),
            Some(json!({ "content": "sebuah comment" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.data()["addedComment"];
    assert_eq!(added["content"], "sebuah comment");
    assert_eq!(added["owner"], dicoding.id.as_str());
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
}

#[tokio::test]
async fn comment_without_content_is_400() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;

    let response = app
        .request(
            "POST",
            &format!("/threads/{thread_id}/comments"),
            Some(&dicoding.access_token),
            Some(json!({})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "cannot add comment because a required property is missing"
    );
}

#[tokio::test]
async fn invalid_payload_is_reported_before_a_missing_thread() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;

    let response = app
        .request(
            "POST",
            "/threads/thread-xyz/comments",
            Some(&dicoding.access_token),
            Some(json!({ "content": 42 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn comment_on_missing_thread_is_404() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;

    let response = app
        .request(
            "POST",
            "/threads/thread-xyz/comments",
            Some(&dicoding.access_token),
            Some(json!({ "content": "hello" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "thread not found");
}

#[tokio::test]
async fn deleted_comment_stays_in_place_but_masked() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;
    let first = app.comment(&dicoding, &thread_id, "first").await;
    app.comment(&dicoding, &thread_id, "second").await;

    let response = app
        .request(
            "DELETE",
            &format!("/threads/{thread_id}/comments/{first}"),
            Some(&dicoding.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));

    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["id"], first.as_str());
    assert_eq!(thread["comments"][0]["content"], DELETED_COMMENT_CONTENT);
    assert_eq!(thread["comments"][1]["content"], "second");
}

#[tokio::test]
async fn only_the_owner_may_delete_a_comment() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let johndoe = app.client("johndoe").await;
    let thread_id = app.thread(&dicoding).await;
    let comment_id = app.comment(&dicoding, &thread_id, "mine").await;

    let response = app
        .request(
            "DELETE",
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            Some(&johndoe.access_token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "you are not the owner of this comment");
    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "mine");
}

#[tokio::test]
async fn deleting_with_a_missing_thread_or_comment_is_404() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;
    let comment_id = app.comment(&dicoding, &thread_id, "c").await;

    let response = app
        .request(
            "DELETE",
            &format!("/threads/thread-xyz/comments/{comment_id}"),
            Some(&dicoding.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "thread not found");

    let response = app
        .request(
            "DELETE",
            &format!("/threads/{thread_id}/comments/comment-xyz"),
            Some(&dicoding.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "comment not found");
}
