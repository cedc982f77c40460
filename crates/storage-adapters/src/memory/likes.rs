use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use domains::{AppError, LikeDetail, LikeKey, LikeRepository, Resource, Result};

use super::{LikeRow, MemoryStore};

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn add_like(&self, key: &LikeKey) -> Result<LikeDetail> {
        if !self.comments.contains_key(key.comment_id()) {
            return Err(AppError::NotFound(Resource::Comment));
        }
        self.require_user(key.user_id())?;

        match self.likes.entry(key.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict("comment already liked".into())),
            Entry::Vacant(slot) => {
                let date = self.clock.utc_now_string();
                slot.insert(LikeRow { date: date.clone() });
                Ok(LikeDetail::new(key.comment_id(), key.user_id(), date)?)
            }
        }
    }

    async fn delete_like(&self, key: &LikeKey) -> Result<()> {
        self.likes
            .remove(key)
            .map(|_| ())
            .ok_or(AppError::NotFound(Resource::Like))
    }

    async fn check_like(&self, key: &LikeKey) -> Result<bool> {
        Ok(self.likes.contains_key(key))
    }

    async fn get_likes_by_comment_id(&self, comment_id: &str) -> Result<Vec<LikeDetail>> {
        let rows: Vec<(LikeKey, String)> = self
            .likes
            .iter()
            .filter(|like| like.key().comment_id() == comment_id)
            .map(|like| (like.key().clone(), like.value().date.clone()))
            .collect();

        rows.into_iter()
            .map(|(key, date)| {
                LikeDetail::new(key.comment_id(), key.user_id(), date).map_err(AppError::from)
            })
            .collect()
    }
}
