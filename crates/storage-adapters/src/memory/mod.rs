//! # In-memory backend
//!
//! One [`MemoryStore`] implements every repository port over `dashmap` tables.
//! It keeps the relational contract the PostgreSQL backend gets from its
//! schema: parent rows must exist, usernames and likes are unique, comments and
//! replies are only ever soft deleted, and listings come back ordered by
//! `(date, insertion order)`.

mod authentications;
mod comments;
mod likes;
mod replies;
mod threads;
mod users;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use domains::{AppError, DateProvider, IdGenerator, LikeKey, Resource, Result};

use crate::support::{SystemDateProvider, UuidIdGenerator};

#[derive(Debug, Clone)]
struct UserRow {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: String,
}

/// A comment or a reply; `parent_id` is the thread or the comment respectively.
#[derive(Debug, Clone)]
struct PostRow {
    id: String,
    content: String,
    parent_id: String,
    owner_id: String,
    is_deleted: bool,
    date: String,
    seq: u64,
}

#[derive(Debug, Clone)]
struct LikeRow {
    date: String,
}

pub struct MemoryStore {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn DateProvider>,
    seq: AtomicU64,
    users: DashMap<String, UserRow>,
    /// username -> user id
    usernames: DashMap<String, String>,
    tokens: DashSet<String>,
    threads: DashMap<String, ThreadRow>,
    comments: DashMap<String, PostRow>,
    replies: DashMap<String, PostRow>,
    likes: DashMap<LikeKey, LikeRow>,
}

impl MemoryStore {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn DateProvider>) -> Self {
        Self {
            ids,
            clock,
            seq: AtomicU64::new(0),
            users: DashMap::new(),
            usernames: DashMap::new(),
            tokens: DashSet::new(),
            threads: DashMap::new(),
            comments: DashMap::new(),
            replies: DashMap::new(),
            likes: DashMap::new(),
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    fn username_of(&self, user_id: &str) -> Result<String> {
        self.users
            .get(user_id)
            .map(|user| user.username.clone())
            .ok_or_else(|| AppError::Internal(format!("dangling owner reference {user_id}")))
    }

    fn require_user(&self, user_id: &str) -> Result<()> {
        if self.users.contains_key(user_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(Resource::User))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator), Arc::new(SystemDateProvider))
    }
}

/// Rows under `parent_id`, oldest first.
fn children_of(table: &DashMap<String, PostRow>, parent_id: &str) -> Vec<PostRow> {
    let mut rows: Vec<PostRow> = table
        .iter()
        .filter(|row| row.parent_id == parent_id)
        .map(|row| row.value().clone())
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.seq.cmp(&b.seq)));
    rows
}

fn verify_post_owner(
    table: &DashMap<String, PostRow>,
    resource: Resource,
    id: &str,
    owner_id: &str,
) -> Result<()> {
    let row = table.get(id).ok_or(AppError::NotFound(resource))?;
    if row.owner_id != owner_id {
        return Err(AppError::Forbidden(resource));
    }
    Ok(())
}

fn soft_delete(table: &DashMap<String, PostRow>, resource: Resource, id: &str) -> Result<()> {
    let mut row = table.get_mut(id).ok_or(AppError::NotFound(resource))?;
    row.is_deleted = true;
    Ok(())
}
