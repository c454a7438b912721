use chrono::Utc;
use desk_core::entities::{Comment, NewComment};
use desk_core::errors::CoreError;
use desk_core::ids::PREFIX_COMMENT;

use super::fresh_id;
use crate::error::StoreError;
use crate::storage::{Collection, KeyValueStorage};
use crate::store::DeskStore;

impl<S: KeyValueStorage> DeskStore<S> {
    /// Append a comment to an existing ticket and persist it.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if the ticket does not exist; storage errors
    /// otherwise.
    pub fn add_comment(&mut self, new: NewComment) -> Result<Comment, StoreError> {
        if self.get_ticket(&new.ticket_id).is_none() {
            return Err(CoreError::NotFound {
                entity_type: "ticket".into(),
                id: new.ticket_id,
            }
            .into());
        }

        let id = fresh_id(PREFIX_COMMENT, self.comments.iter().map(|c| c.id.as_str()))?;
        let comment = Comment {
            id,
            ticket_id: new.ticket_id,
            content: new.content,
            created_by: new.created_by,
            created_at: Utc::now(),
        };
        let mut comments = self.comments.clone();
        comments.push(comment.clone());
        self.commit(Collection::Comments, comments, |s| &mut s.comments)?;
        tracing::debug!(comment_id = %comment.id, ticket_id = %comment.ticket_id, "added comment");
        Ok(comment)
    }

    /// Comments on `ticket_id`, oldest first. Equal timestamps keep insertion
    /// order.
    #[must_use]
    pub fn get_ticket_comments(&self, ticket_id: &str) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|c| c.ticket_id == ticket_id)
            .collect();
        comments.sort_by_key(|c| c.created_at);
        comments
    }
}
