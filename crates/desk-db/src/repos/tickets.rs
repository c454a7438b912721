//! Ticket repository: insert, status updates, and people-joined reads.

use chrono::Utc;

use desk_core::entities::Ticket;
use desk_core::enums::{TicketPriority, TicketStatus};
use desk_core::ids::PREFIX_TICKET;
use desk_core::responses::{PersonRef, TicketDetail, TicketListItem, TicketStats};

use crate::DeskDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_count, get_opt_string, parse_datetime, parse_enum};

const SELECT_COLS: &str =
    "id, title, description, status, priority, creator_id, assignee_id, created_at, updated_at";

/// Ticket columns followed by creator (name, email, image) and assignee
/// (name, email). Columns 0..=8 match `SELECT_COLS`.
const SELECT_WITH_PEOPLE: &str = "SELECT t.id, t.title, t.description, t.status, t.priority,
            t.creator_id, t.assignee_id, t.created_at, t.updated_at,
            c.name, c.email, c.image, a.name, a.email
     FROM tickets t
     JOIN users c ON c.id = t.creator_id
     LEFT JOIN users a ON a.id = t.assignee_id";

fn row_to_ticket(row: &libsql::Row) -> Result<Ticket, DatabaseError> {
    Ok(Ticket {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        priority: parse_enum(&row.get::<String>(4)?)?,
        created_by: row.get(5)?,
        assigned_to: get_opt_string(row, 6)?,
        assigned_group_id: None,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
        is_guest: false,
        guest_name: None,
        guest_email: None,
        guest_room: None,
        problem_type: None,
    })
}

/// Which related-user columns a view exposes.
#[derive(Clone, Copy)]
struct PeopleColumns {
    creator_image: bool,
    assignee_email: bool,
}

fn row_to_people(
    row: &libsql::Row,
    columns: PeopleColumns,
) -> Result<(PersonRef, Option<PersonRef>), DatabaseError> {
    let creator = PersonRef {
        name: row.get(9)?,
        email: get_opt_string(row, 10)?,
        image: if columns.creator_image {
            get_opt_string(row, 11)?
        } else {
            None
        },
    };
    let assignee = match get_opt_string(row, 12)? {
        Some(name) => Some(PersonRef {
            name,
            email: if columns.assignee_email {
                get_opt_string(row, 13)?
            } else {
                None
            },
            image: None,
        }),
        None => None,
    };
    Ok((creator, assignee))
}

impl DeskDb {
    /// Insert an `OPEN` ticket created by `creator_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if `creator_id` is not a user.
    pub async fn create_ticket(
        &self,
        creator_id: &str,
        title: &str,
        description: &str,
        priority: TicketPriority,
    ) -> Result<Ticket, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_TICKET).await?;

        self.conn()
            .execute(
                "INSERT INTO tickets (id, title, description, status, priority, creator_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    TicketStatus::Open.as_str(),
                    priority.as_str(),
                    creator_id,
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        tracing::debug!(ticket_id = %id, creator_id, "created ticket");
        Ok(Ticket {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: TicketStatus::Open,
            priority,
            created_by: creator_id.to_string(),
            assigned_to: None,
            assigned_group_id: None,
            created_at: now,
            updated_at: now,
            is_guest: false,
            guest_name: None,
            guest_email: None,
            guest_room: None,
            problem_type: None,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no ticket has that id.
    pub async fn get_ticket(&self, id: &str) -> Result<Ticket, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tickets WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_ticket(&row)
    }

    /// Every ticket newest first, with creator (name, email) and assignee
    /// (name).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tickets_with_people(&self) -> Result<Vec<TicketListItem>, DatabaseError> {
        self.query_list_items(&format!(
            "{SELECT_WITH_PEOPLE} ORDER BY t.created_at DESC, t.rowid DESC"
        ))
        .await
    }

    /// The `limit` newest tickets, shaped like [`Self::list_tickets_with_people`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn recent_tickets(&self, limit: u32) -> Result<Vec<TicketListItem>, DatabaseError> {
        self.query_list_items(&format!(
            "{SELECT_WITH_PEOPLE} ORDER BY t.created_at DESC, t.rowid DESC LIMIT {limit}"
        ))
        .await
    }

    async fn query_list_items(&self, sql: &str) -> Result<Vec<TicketListItem>, DatabaseError> {
        let columns = PeopleColumns {
            creator_image: false,
            assignee_email: false,
        };
        let mut rows = self.conn().query(sql, ()).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            let (creator, assignee) = row_to_people(&row, columns)?;
            items.push(TicketListItem {
                ticket: row_to_ticket(&row)?,
                creator,
                assignee,
            });
        }
        Ok(items)
    }

    /// Ticket `id` with creator (name, email, image), assignee (name, email),
    /// and its comments oldest first. `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn get_ticket_detail(&self, id: &str) -> Result<Option<TicketDetail>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_WITH_PEOPLE} WHERE t.id = ?1"), [id])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let ticket = row_to_ticket(&row)?;
        let (creator, assignee) = row_to_people(
            &row,
            PeopleColumns {
                creator_image: true,
                assignee_email: true,
            },
        )?;
        let comments = self.list_comments(id).await?;
        Ok(Some(TicketDetail {
            ticket,
            creator,
            assignee,
            comments,
        }))
    }

    /// Set the status of ticket `id` and refresh `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no ticket has that id.
    pub async fn update_ticket_status(
        &self,
        id: &str,
        status: TicketStatus,
    ) -> Result<Ticket, DatabaseError> {
        let affected = self
            .conn()
            .execute(
                "UPDATE tickets SET status = ?1, updated_at = max(updated_at, ?2) WHERE id = ?3",
                libsql::params![status.as_str(), format_datetime(Utc::now()), id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "ticket",
                id: id.to_string(),
            });
        }
        tracing::debug!(ticket_id = id, status = %status, "updated ticket status");
        self.get_ticket(id).await
    }

    /// Ticket counts: all, `OPEN`, and `RESOLVED`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn ticket_stats(&self) -> Result<TicketStats, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*),
                        COALESCE(SUM(CASE WHEN status = 'OPEN' THEN 1 ELSE 0 END), 0),
                        COALESCE(SUM(CASE WHEN status = 'RESOLVED' THEN 1 ELSE 0 END), 0)
                 FROM tickets",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(TicketStats {
            total: get_count(&row, 0)?,
            open: get_count(&row, 1)?,
            resolved: get_count(&row, 2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_db;
    use pretty_assertions::assert_eq;

    async fn assign(db: &DeskDb, ticket_id: &str, user_id: &str) {
        db.conn()
            .execute(
                "UPDATE tickets SET assignee_id = ?1 WHERE id = ?2",
                [user_id, ticket_id],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_ticket_roundtrip() {
        let (db, _, john) = seeded_db().await;
        let ticket = db
            .create_ticket(&john.id, "Printer jam", "Tray 2", TicketPriority::Low)
            .await
            .unwrap();

        assert!(ticket.id.starts_with("tkt-"));
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.created_at, ticket.updated_at);

        let fetched = db.get_ticket(&ticket.id).await.unwrap();
        assert_eq!(fetched.title, "Printer jam");
        assert_eq!(fetched.created_by, john.id);
    }

    #[tokio::test]
    async fn unknown_creator_violates_foreign_key() {
        let (db, _, _) = seeded_db().await;
        let err = db
            .create_ticket("usr-ghost", "t", "d", TicketPriority::Medium)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::LibSql(_)));
    }

    #[tokio::test]
    async fn list_is_newest_first_with_people() {
        let (db, admin, john) = seeded_db().await;
        let first = db
            .create_ticket(&john.id, "First", "d", TicketPriority::Medium)
            .await
            .unwrap();
        let second = db
            .create_ticket(&john.id, "Second", "d", TicketPriority::High)
            .await
            .unwrap();
        assign(&db, &first.id, &admin.id).await;

        let items = db.list_tickets_with_people().await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.ticket.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

        assert_eq!(items[0].creator.name, "John Doe");
        assert_eq!(items[0].creator.email.as_deref(), Some("john@example.com"));
        assert_eq!(items[0].creator.image, None);
        assert!(items[0].assignee.is_none());

        let assignee = items[1].assignee.as_ref().unwrap();
        assert_eq!(assignee.name, "Support Admin");
        assert_eq!(assignee.email, None);
    }

    #[tokio::test]
    async fn detail_exposes_images_and_assignee_email() {
        let (db, admin, john) = seeded_db().await;
        let ticket = db
            .create_ticket(&john.id, "Detail", "d", TicketPriority::Medium)
            .await
            .unwrap();
        assign(&db, &ticket.id, &admin.id).await;

        let detail = db.get_ticket_detail(&ticket.id).await.unwrap().unwrap();
        assert_eq!(detail.creator.image, Some(john.avatar));
        assert_eq!(
            detail.assignee.unwrap().email.as_deref(),
            Some("admin@example.com")
        );
        assert!(detail.comments.is_empty());

        assert!(db.get_ticket_detail("tkt-missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_update_refreshes_updated_at() {
        let (db, _, john) = seeded_db().await;
        let ticket = db
            .create_ticket(&john.id, "Status", "d", TicketPriority::Medium)
            .await
            .unwrap();

        let updated = db
            .update_ticket_status(&ticket.id, TicketStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(updated.status, TicketStatus::Resolved);
        assert!(updated.updated_at >= ticket.updated_at);
        assert_eq!(updated.created_at, ticket.created_at);
        assert_eq!(updated.title, ticket.title);
    }

    #[tokio::test]
    async fn status_update_of_unknown_ticket_fails() {
        let (db, _, _) = seeded_db().await;
        let err = db
            .update_ticket_status("tkt-missing", TicketStatus::Closed)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn stats_and_recent() {
        let (db, _, john) = seeded_db().await;
        assert_eq!(db.ticket_stats().await.unwrap(), TicketStats::default());

        let mut ids = Vec::new();
        for title in ["a", "b", "c"] {
            let t = db
                .create_ticket(&john.id, title, "d", TicketPriority::Medium)
                .await
                .unwrap();
            ids.push(t.id);
        }
        db.update_ticket_status(&ids[0], TicketStatus::Resolved)
            .await
            .unwrap();

        assert_eq!(
            db.ticket_stats().await.unwrap(),
            TicketStats {
                total: 3,
                open: 2,
                resolved: 1
            }
        );

        let recent = db.recent_tickets(2).await.unwrap();
        let recent_ids: Vec<_> = recent.iter().map(|i| i.ticket.id.clone()).collect();
        assert_eq!(recent_ids, vec![ids[2].clone(), ids[1].clone()]);
    }
}
