//! Fixed demo data written to storage the first time a collection is missing.
//!
//! The three demo users double as the mock accounts [`crate::AuthStore`] signs
//! in as, one per role.

use chrono::{DateTime, Duration, Utc};
use desk_core::entities::{Group, Ticket, User, avatar_url};
use desk_core::enums::{Role, TicketPriority, TicketStatus};

/// The demo account for `role`: `u1` master admin, `u2` support admin,
/// `u3` regular user.
#[must_use]
pub fn mock_user(role: Role) -> User {
    let (id, name, email, seed) = match role {
        Role::MasterAdmin => ("u1", "Master Admin", "master@example.com", "Master"),
        Role::Admin => ("u2", "Support Admin", "admin@example.com", "Admin"),
        Role::User => ("u3", "John Doe", "john@example.com", "John"),
    };
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: avatar_url(seed),
    }
}

#[must_use]
pub fn demo_users() -> Vec<User> {
    Role::ALL.into_iter().map(mock_user).collect()
}

/// Two tickets opened by `u3`: `t1` a day old and untouched, `t2` two days
/// old, in progress with `u2`, last updated moments ago.
#[must_use]
pub fn demo_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    let day_ago = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);
    vec![
        Ticket {
            id: "t1".into(),
            title: "Login page is crashing".into(),
            description: "When I try to login with Google, the page goes white.".into(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            created_by: "u3".into(),
            assigned_to: None,
            assigned_group_id: None,
            created_at: day_ago,
            updated_at: day_ago,
            is_guest: false,
            guest_name: None,
            guest_email: None,
            guest_room: None,
            problem_type: None,
        },
        Ticket {
            id: "t2".into(),
            title: "Feature Request: Dark Mode".into(),
            description: "Please add dark mode support.".into(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::Low,
            created_by: "u3".into(),
            assigned_to: Some("u2".into()),
            assigned_group_id: None,
            created_at: two_days_ago,
            updated_at: now - Duration::seconds(100),
            is_guest: false,
            guest_name: None,
            guest_email: None,
            guest_room: None,
            problem_type: None,
        },
    ]
}

#[must_use]
pub fn demo_groups(now: DateTime<Utc>) -> Vec<Group> {
    vec![Group {
        id: "g1".into(),
        name: "Support Team".into(),
        member_ids: vec!["u1".into(), "u2".into()],
        created_at: now,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_demo_user_per_role() {
        let users = demo_users();
        assert_eq!(users.len(), 3);
        for role in Role::ALL {
            assert_eq!(users.iter().filter(|u| u.role == role).count(), 1);
        }
        assert_eq!(
            mock_user(Role::MasterAdmin).avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Master"
        );
    }

    #[test]
    fn demo_ticket_timestamps_are_consistent() {
        let now = Utc::now();
        for ticket in demo_tickets(now) {
            assert!(ticket.updated_at >= ticket.created_at, "{}", ticket.id);
            assert!(ticket.updated_at <= now);
        }
    }

    #[test]
    fn support_team_holds_staff_only() {
        let users = demo_users();
        let group = &demo_groups(Utc::now())[0];
        for id in &group.member_ids {
            let user = users.iter().find(|u| &u.id == id).unwrap();
            assert!(user.role.is_staff());
        }
    }
}
