use async_trait::async_trait;
use domains::{
    AppError, CreateThread, CreatedThread, Resource, Result, ThreadDetail, ThreadRepository,
};

use super::{MemoryStore, ThreadRow};
use crate::support::prefixed_id;

#[async_trait]
impl ThreadRepository for MemoryStore {
    async fn add_thread(&self, thread: CreateThread) -> Result<CreatedThread> {
        self.require_user(thread.owner())?;

        let row = ThreadRow {
            id: prefixed_id("thread", self.ids.as_ref()),
            title: thread.title().to_owned(),
            body: thread.body().to_owned(),
            owner: thread.owner().to_owned(),
            date: self.clock.utc_now_string(),
        };
        let created = CreatedThread::new(row.id.as_str(), row.title.as_str(), row.owner.as_str())?;
        tracing::debug!(thread_id = %row.id, "thread stored");
        self.threads.insert(row.id.clone(), row);

        Ok(created)
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadDetail> {
        let row = self
            .threads
            .get(id)
            .map(|row| row.value().clone())
            .ok_or(AppError::NotFound(Resource::Thread))?;

        Ok(ThreadDetail::new(
            row.id,
            row.title,
            row.body,
            row.date,
            self.username_of(&row.owner)?,
        )?)
    }
}
