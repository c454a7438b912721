//! User repository: account provisioning and lookup.

use chrono::Utc;

use desk_core::entities::{User, avatar_url};
use desk_core::enums::Role;
use desk_core::ids::PREFIX_USER;

use crate::DeskDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_enum};

const SELECT_COLS: &str = "id, name, email, role, image";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    let name: String = row.get(1)?;
    let avatar = get_opt_string(row, 4)?.unwrap_or_else(|| avatar_url(&name));
    Ok(User {
        id: row.get(0)?,
        name,
        email: row.get(2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        avatar,
    })
}

impl DeskDb {
    /// Insert an account. Emails are unique.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` on a duplicate email.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<User, DatabaseError> {
        let id = self.generate_id(PREFIX_USER).await?;
        let avatar = avatar_url(name);

        self.conn()
            .execute(
                "INSERT INTO users (id, name, email, role, image, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    name,
                    email,
                    role.as_str(),
                    avatar.as_str(),
                    format_datetime(Utc::now())
                ],
            )
            .await?;

        tracing::debug!(user_id = %id, role = %role, "created user");
        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has that id.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// All accounts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY created_at, rowid"),
                (),
            )
            .await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_db, test_db};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_and_get_user() {
        let db = test_db().await;
        let user = db
            .create_user("Master Admin", "master@example.com", Role::MasterAdmin)
            .await
            .unwrap();
        assert!(user.id.starts_with("usr-"));

        let fetched = db.get_user(&user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (db, _, _) = seeded_db().await;
        let err = db
            .create_user("Other", "john@example.com", Role::User)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::LibSql(_)));
    }

    #[tokio::test]
    async fn missing_user_is_no_result() {
        let db = test_db().await;
        assert!(matches!(
            db.get_user("usr-00000000").await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn list_users_in_creation_order() {
        let (db, admin, john) = seeded_db().await;
        let users = db.list_users().await.unwrap();
        assert_eq!(users, vec![admin, john]);
    }
}
