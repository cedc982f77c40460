use axum::http::StatusCode;
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn like_toggles_and_counts_per_user() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let johndoe = app.client("johndoe").await;
    let thread_id = app.thread(&dicoding).await;
    let comment_id = app.comment(&dicoding, &thread_id, "likeable").await;
    let uri = format!("/threads/{thread_id}/comments/{comment_id}/likes");

    let response = app.request("PUT", &uri, Some(&dicoding.access_token), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));
    app.request("PUT", &uri, Some(&johndoe.access_token), None).await;

    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 2);

    let response = app.request("PUT", &uri, Some(&dicoding.access_token), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 1);
}

#[tokio::test]
async fn likes_on_deleted_comments_still_count() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;
    let comment_id = app.comment(&dicoding, &thread_id, "soon gone").await;
    let uri = format!("/threads/{thread_id}/comments/{comment_id}/likes");
    app.request("PUT", &uri, Some(&dicoding.access_token), None).await;

    app.request(
        "DELETE",
        &format!("/threads/{thread_id}/comments/{comment_id}"),
        Some(&dicoding.access_token),
        None,
    )
    .await;

    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 1);
}

#[tokio::test]
async fn like_needs_thread_and_comment() {
    let app = TestApp::new();
    let dicoding = app.client("dicoding").await;
    let thread_id = app.thread(&dicoding).await;
    let comment_id = app.comment(&dicoding, &thread_id, "c").await;

    let response = app
        .request(
            "PUT",
            &format!("/threads/thread-xyz/comments/{comment_id}/likes"),
            Some(&dicoding.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "thread not found");

    let response = app
        .request(
            "PUT",
            &format!("/threads/{thread_id}/comments/comment-xyz/likes"),
            Some(&dicoding.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "comment not found");
}

#[tokio::test]
async fn like_without_token_is_401() {
    let app = TestApp::new();

    let response = app
        .request("PUT", "/threads/thread-1/comments/comment-1/likes", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
