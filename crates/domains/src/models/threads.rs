//! # Thread entities
//!
//! A thread is the root of a discussion; it is created once and never edited.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Entity, ValidationError};
use crate::models::comments::CommentDetailWithReplies;
use crate::payload::{ensure_present, Payload};

/// A validated request to open a new thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    title: String,
    body: String,
    owner: String,
}

impl CreateThread {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let thread = Self {
            title: title.into(),
            body: body.into(),
            owner: owner.into(),
        };
        ensure_present(
            Entity::CreateThread,
            &[&thread.title, &thread.body, &thread.owner],
        )?;
        Ok(thread)
    }

    /// Builds the entity from a request body merged with the caller's id as `owner`.
    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::CreateThread, value);
        payload.require(&["title", "body", "owner"])?;
        Self::new(
            payload.string("title")?,
            payload.string("body")?,
            payload.string("owner")?,
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// What the store echoes back after persisting a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedThread {
    id: String,
    title: String,
    owner: String,
}

impl CreatedThread {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let thread = Self {
            id: id.into(),
            title: title.into(),
            owner: owner.into(),
        };
        ensure_present(Entity::CreatedThread, &[&thread.id, &thread.title, &thread.owner])?;
        Ok(thread)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    id: String,
    title: String,
    body: String,
    date: String,
    username: String,
}

impl ThreadDetail {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let thread = Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            date: date.into(),
            username: username.into(),
        };
        ensure_present(
            Entity::ThreadDetail,
            &[
                &thread.id,
                &thread.title,
                &thread.body,
                &thread.date,
                &thread.username,
            ],
        )?;
        Ok(thread)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// The full read model served by `GET /threads/{threadId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetailWithComments {
    #[serde(flatten)]
    thread: ThreadDetail,
    comments: Vec<CommentDetailWithReplies>,
}

impl ThreadDetailWithComments {
    /// `comments` must already be in display order.
    pub fn new(thread: ThreadDetail, comments: Vec<CommentDetailWithReplies>) -> Self {
        Self { thread, comments }
    }

    pub fn thread(&self) -> &ThreadDetail {
        &self.thread
    }

    pub fn comments(&self) -> &[CommentDetailWithReplies] {
        &self.comments
    }
}
