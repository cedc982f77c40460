use std::sync::Arc;

use domains::{
    CommentRepository, LikeDetail, LikeRepository, Result, ThreadRepository, ToggleLike,
};

/// Flips the caller's like on a comment.
///
/// Returns the stored row when a like was added and a removal echo
/// (see [`LikeDetail::removed`]) when an existing like was taken back.
pub struct LikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            like_repository,
        }
    }

    #[tracing::instrument(
        name = "like_comment",
        skip_all,
        fields(comment_id = %toggle.key().comment_id(), user_id = %toggle.key().user_id())
    )]
    pub async fn execute(&self, toggle: ToggleLike) -> Result<LikeDetail> {
        self.thread_repository
            .get_thread_by_id(toggle.thread_id())
            .await?;
        self.comment_repository
            .get_comment_by_id(toggle.key().comment_id())
            .await?;

        let key = toggle.key();
        if self.like_repository.check_like(key).await? {
            self.like_repository.delete_like(key).await?;
            tracing::debug!("like removed");
            return Ok(LikeDetail::removed(key));
        }

        let like = self.like_repository.add_like(key).await?;
        tracing::debug!("like added");
        Ok(like)
    }
}
