//! # Reply entities
//!
//! Replies hang off a comment and follow the same soft-delete rule.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Entity, ValidationError};
use crate::payload::{ensure_present, Payload};

/// Shown in place of a deleted reply's content.
pub const DELETED_REPLY_CONTENT: &str = "**reply deleted**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
    content: String,
    thread_id: String,
    comment_id: String,
    owner_id: String,
}

impl AddReply {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let reply = Self {
            content: content.into(),
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
            owner_id: owner_id.into(),
        };
        ensure_present(
            Entity::AddReply,
            &[&reply.content, &reply.thread_id, &reply.comment_id, &reply.owner_id],
        )?;
        Ok(reply)
    }

    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::AddReply, value);
        payload.require(&["content", "threadId", "commentId", "ownerId"])?;
        Self::new(
            payload.string("content")?,
            payload.string("threadId")?,
            payload.string("commentId")?,
            payload.string("ownerId")?,
        )
    }

    pub fn content(&self) -> &str {
        &self.content
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedReply {
    id: String,
    content: String,
    owner_id: String,
    date: String,
}

impl AddedReply {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner_id: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let reply = Self {
            id: id.into(),
            content: content.into(),
            owner_id: owner_id.into(),
            date: date.into(),
        };
        ensure_present(
            Entity::AddedReply,
            &[&reply.id, &reply.content, &reply.owner_id, &reply.date],
        )?;
        Ok(reply)
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    thread_id: String,
    comment_id: String,
    reply_id: String,
    owner_id: String,
}

impl DeleteReply {
    pub fn new(
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        reply_id: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
            reply_id: reply_id.into(),
            owner_id: owner_id.into(),
        };
        ensure_present(
            Entity::DeleteReply,
            &[
                &request.thread_id,
                &request.comment_id,
                &request.reply_id,
                &request.owner_id,
            ],
        )?;
        Ok(request)
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn reply_id(&self) -> &str {
        &self.reply_id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDetail {
    id: String,
    username: String,
    date: String,
    content: String,
    is_deleted: bool,
}

impl ReplyDetail {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
        is_deleted: bool,
    ) -> Result<Self, ValidationError> {
        let (id, username, date, content) = (id.into(), username.into(), date.into(), content.into());
        ensure_present(Entity::ReplyDetail, &[&id, &username, &date, &content])?;
        Ok(Self {
            id,
            username,
            date,
            content: if is_deleted {
                DELETED_REPLY_CONTENT.to_owned()
            } else {
                content
            },
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

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
