//! # Like entities
//!
//! A like is keyed by `(comment_id, user_id)`; the store keeps at most one row
//! per key and removes it outright on unlike.

use serde::Serialize;

use crate::error::{Entity, ValidationError};
use crate::payload::ensure_present;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LikeKey {
    comment_id: String,
    user_id: String,
}

impl LikeKey {
    pub fn new(
        comment_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let key = Self {
            comment_id: comment_id.into(),
            user_id: user_id.into(),
        };
        ensure_present(Entity::LikeKey, &[&key.comment_id, &key.user_id])?;
        Ok(key)
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Input of the like toggle: the key plus the thread it must live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleLike {
    thread_id: String,
    key: LikeKey,
}

impl ToggleLike {
    pub fn new(
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let thread_id = thread_id.into();
        let (comment_id, user_id) = (comment_id.into(), user_id.into());
        ensure_present(Entity::ToggleLike, &[&thread_id, &comment_id, &user_id])?;
        Ok(Self {
            thread_id,
            key: LikeKey::new(comment_id, user_id)?,
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn key(&self) -> &LikeKey {
        &self.key
    }
}

/// A like row, or the echo of one that was just removed.
///
/// A removal echo carries an empty `date`: there is no persisted row left to
/// take a timestamp from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDetail {
    comment_id: String,
    user_id: String,
    date: String,
}

impl LikeDetail {
    pub fn new(
        comment_id: impl Into<String>,
        user_id: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let like = Self {
            comment_id: comment_id.into(),
            user_id: user_id.into(),
            date: date.into(),
        };
        // `date` is allowed to be empty.
        ensure_present(Entity::LikeDetail, &[&like.comment_id, &like.user_id])?;
        Ok(like)
    }

    pub fn removed(key: &LikeKey) -> Self {
        Self {
            comment_id: key.comment_id.clone(),
            user_id: key.user_id.clone(),
            date: String::new(),
        }
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_removal(&self) -> bool {
        self.date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_key_requires_both_ids() {
        let err = LikeKey::new("comment-123", "").unwrap_err();
        assert_eq!(err.to_string(), "LIKE_KEY.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn toggle_like_requires_thread() {
        let err = ToggleLike::new("", "comment-123", "user-123").unwrap_err();
        assert_eq!(err.to_string(), "TOGGLE_LIKE.NOT_CONTAIN_NEEDED_PROPERTY");

        let toggle = ToggleLike::new("thread-123", "comment-123", "user-123").unwrap();
        assert_eq!(toggle.key().comment_id(), "comment-123");
        assert_eq!(toggle.key().user_id(), "user-123");
    }

    #[test]
    fn like_detail_accepts_empty_date_as_removal_echo() {
        let stored = LikeDetail::new("comment-123", "user-123", "2021-08-08T07:22:33.555Z").unwrap();
        assert!(!stored.is_removal());

        let key = LikeKey::new("comment-123", "user-123").unwrap();
        let echo = LikeDetail::removed(&key);
        assert_eq!(echo.date(), "");
        assert!(echo.is_removal());
        assert_eq!(echo, LikeDetail::new("comment-123", "user-123", "").unwrap());
    }
}
