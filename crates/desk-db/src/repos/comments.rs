//! Comment repository.

use chrono::Utc;

use desk_core::entities::Comment;
use desk_core::ids::PREFIX_COMMENT;
use desk_core::responses::{CommentWithAuthor, PersonRef};

use crate::DeskDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};

impl DeskDb {
    /// Insert a comment by `author_id` on `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the ticket or author does not exist.
    pub async fn add_comment(
        &self,
        ticket_id: &str,
        author_id: &str,
        content: &str,
    ) -> Result<Comment, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_COMMENT).await?;

        self.conn()
            .execute(
                "INSERT INTO comments (id, content, ticket_id, author_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), content, ticket_id, author_id, format_datetime(now)],
            )
            .await?;

        tracing::debug!(comment_id = %id, ticket_id, "added comment");
        Ok(Comment {
            id,
            ticket_id: ticket_id.to_string(),
            content: content.to_string(),
            created_by: author_id.to_string(),
            created_at: now,
        })
    }

    /// Comments on `ticket_id`, oldest first, with author name and image.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_comments(
        &self,
        ticket_id: &str,
    ) -> Result<Vec<CommentWithAuthor>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT cm.id, cm.ticket_id, cm.content, cm.author_id, cm.created_at,
                        u.name, u.image
                 FROM comments cm
                 JOIN users u ON u.id = cm.author_id
                 WHERE cm.ticket_id = ?1
                 ORDER BY cm.created_at ASC, cm.rowid ASC",
                [ticket_id],
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(CommentWithAuthor {
                comment: Comment {
                    id: row.get(0)?,
                    ticket_id: row.get(1)?,
                    content: row.get(2)?,
                    created_by: row.get(3)?,
                    created_at: parse_datetime(&row.get::<String>(4)?)?,
                },
                author: PersonRef {
                    name: row.get(5)?,
                    email: None,
                    image: get_opt_string(&row, 6)?,
                },
            });
        }
        Ok(comments)
    }
}
