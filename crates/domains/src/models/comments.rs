//! # Comment entities
//!
//! Comments are soft-deleted: the row stays so replies and likes keep their
//! anchor, and every detail projection masks the content instead.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Entity, ValidationError};
use crate::models::replies::ReplyDetail;
use crate::payload::{ensure_present, Payload};

/// Shown in place of a deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**comment deleted**";

fn masked(content: String, is_deleted: bool) -> String {
    if is_deleted {
        DELETED_COMMENT_CONTENT.to_owned()
    } else {
        content
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    content: String,
    thread_id: String,
    owner_id: String,
}

impl AddComment {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let comment = Self {
            content: content.into(),
            thread_id: thread_id.into(),
            owner_id: owner_id.into(),
        };
        ensure_present(
            Entity::AddComment,
            &[&comment.content, &comment.thread_id, &comment.owner_id],
        )?;
        Ok(comment)
    }

    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::AddComment, value);
        payload.require(&["content", "threadId", "ownerId"])?;
        Self::new(
            payload.string("content")?,
            payload.string("threadId")?,
            payload.string("ownerId")?,
        )
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComment {
    id: String,
    content: String,
    owner_id: String,
    date: String,
}

impl AddedComment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner_id: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let comment = Self {
            id: id.into(),
            content: content.into(),
            owner_id: owner_id.into(),
            date: date.into(),
        };
        ensure_present(
            Entity::AddedComment,
            &[&comment.id, &comment.content, &comment.owner_id, &comment.date],
        )?;
        Ok(comment)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Who wants which comment gone, and under which thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    thread_id: String,
    comment_id: String,
    owner_id: String,
}

impl DeleteComment {
    pub fn new(
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
            owner_id: owner_id.into(),
        };
        ensure_present(
            Entity::DeleteComment,
            &[&request.thread_id, &request.comment_id, &request.owner_id],
        )?;
        Ok(request)
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

/// A stored comment joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    id: String,
    username: String,
    date: String,
    content: String,
    is_deleted: bool,
}

impl CommentDetail {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
        is_deleted: bool,
    ) -> Result<Self, ValidationError> {
        let (id, username, date, content) = (id.into(), username.into(), date.into(), content.into());
        ensure_present(Entity::CommentDetail, &[&id, &username, &date, &content])?;
        Ok(Self {
            id,
            username,
            date,
            content: masked(content, is_deleted),
            is_deleted,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Masked when the comment is deleted.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// A comment as shown inside a thread: its replies and like count attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetailWithReplies {
    id: String,
    username: String,
    date: String,
    content: String,
    is_deleted: bool,
    replies: Vec<ReplyDetail>,
    like_count: usize,
}

impl CommentDetailWithReplies {
    pub fn new(comment: CommentDetail, replies: Vec<ReplyDetail>, like_count: usize) -> Self {
        let CommentDetail {
            id,
            username,
            date,
            content,
            is_deleted,
        } = comment;

        Self {
            id,
            username,
            date,
            content: masked(content, is_deleted),
            is_deleted,
            replies,
            like_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn replies(&self) -> &[ReplyDetail] {
        &self.replies
    }

    pub fn like_count(&self) -> usize {
        self.like_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use serde_json::json;

    #[test]
    fn add_comment_rejects_missing_property() {
        let err = AddComment::from_payload(&json!({ "threadId": "thread-123", "ownerId": "user-123" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn add_comment_treats_falsy_content_as_missing() {
        for content in [json!(0), json!(false)] {
            let err = AddComment::from_payload(&json!({
                "content": content,
                "threadId": "thread-123",
                "ownerId": "user-123",
            }))
            .unwrap_err();
            assert_eq!(err.to_string(), "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
        }
    }

    #[test]
    fn add_comment_rejects_wrong_type() {
        let err = AddComment::from_payload(&json!({
            "content": 123,
            "threadId": "thread-123",
            "ownerId": "user-123",
        }))
        .unwrap_err();
        assert_eq!(err.kind, ValidationKind::DataTypeMismatch);
    }

    #[test]
    fn add_comment_from_valid_payload() {
        let comment = AddComment::from_payload(&json!({
            "content": "a comment",
            "threadId": "thread-123",
            "ownerId": "user-123",
        }))
        .unwrap();

        assert_eq!(comment.content(), "a comment");
        assert_eq!(comment.thread_id(), "thread-123");
        assert_eq!(comment.owner_id(), "user-123");
    }

    #[test]
    fn delete_comment_requires_every_id() {
        let err = DeleteComment::new("thread-123", "", "user-123").unwrap_err();
        assert_eq!(err.to_string(), "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn comment_detail_keeps_content_when_not_deleted() {
        let detail = CommentDetail::new("comment-123", "dicoding", "2021-08-08T07:22:33.555Z", "hello", false)
            .unwrap();
        assert_eq!(detail.content(), "hello");
        assert!(!detail.is_deleted());
    }

    #[test]
    fn comment_detail_masks_deleted_content() {
        let detail = CommentDetail::new("comment-123", "dicoding", "2021-08-08T07:22:33.555Z", "hello", true)
            .unwrap();
        assert_eq!(detail.content(), DELETED_COMMENT_CONTENT);
        assert!(detail.is_deleted());
    }

    #[test]
    fn comment_with_replies_carries_replies_and_like_count() {
        let comment = CommentDetail::new("comment-123", "dicoding", "2021-08-08T07:22:33.555Z", "hello", true)
            .unwrap();
        let reply = ReplyDetail::new("reply-123", "johndoe", "2021-08-08T08:00:00.000Z", "hi", false)
            .unwrap();

        let detail = CommentDetailWithReplies::new(comment, vec![reply], 2);

        assert_eq!(detail.content(), DELETED_COMMENT_CONTENT);
        assert_eq!(detail.replies().len(), 1);
        assert_eq!(detail.like_count(), 2);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["likeCount"], 2);
        assert_eq!(json["isDeleted"], true);
        assert_eq!(json["replies"][0]["id"], "reply-123");
    }
}
