//! Role, status, priority, and problem-type enums.
//!
//! All enums serialize as `SCREAMING_SNAKE_CASE` (`"IN_PROGRESS"`,
//! `"MASTER_ADMIN"`) so persisted blobs and database columns share one
//! spelling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Determines which management actions a user may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    MasterAdmin,
    Admin,
    User,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::MasterAdmin, Self::Admin, Self::User];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MasterAdmin => "MASTER_ADMIN",
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Staff accounts can be routed tickets and added to groups.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::MasterAdmin | Self::Admin)
    }

    /// Only the master admin may invite users.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::MasterAdmin)
    }

    /// Only the master admin may create or edit groups.
    #[must_use]
    pub const fn can_manage_groups(self) -> bool {
        matches!(self, Self::MasterAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Status of a ticket.
///
/// Any status may be set from any other; triage is not a state machine.
///
/// ```text
/// OPEN → IN_PROGRESS → RESOLVED → CLOSED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketPriority
// ---------------------------------------------------------------------------

/// Priority of a ticket, lowest first.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProblemType
// ---------------------------------------------------------------------------

/// Category a guest picks when reporting a facilities problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    Wifi,
    Plumbing,
    Electrical,
    Furniture,
    Cleaning,
    Other,
}

impl ProblemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wifi => "WIFI",
            Self::Plumbing => "PLUMBING",
            Self::Electrical => "ELECTRICAL",
            Self::Furniture => "FURNITURE",
            Self::Cleaning => "CLEANING",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
                assert_eq!(val.as_str(), $expected_str);
            }
        };
    }

    test_serde_roundtrip!(role_master_admin, Role, Role::MasterAdmin, "MASTER_ADMIN");
    test_serde_roundtrip!(role_user, Role, Role::User, "USER");
    test_serde_roundtrip!(status_in_progress, TicketStatus, TicketStatus::InProgress, "IN_PROGRESS");
    test_serde_roundtrip!(status_closed, TicketStatus, TicketStatus::Closed, "CLOSED");
    test_serde_roundtrip!(priority_urgent, TicketPriority, TicketPriority::Urgent, "URGENT");
    test_serde_roundtrip!(problem_wifi, ProblemType, ProblemType::Wifi, "WIFI");

    #[test]
    fn lowercase_status_is_rejected() {
        assert!(serde_json::from_str::<TicketStatus>("\"open\"").is_err());
    }

    #[test]
    fn default_priority_is_medium() {
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn priorities_order_by_urgency() {
        assert!(TicketPriority::Low < TicketPriority::Medium);
        assert!(TicketPriority::High < TicketPriority::Urgent);
    }

    #[test]
    fn only_master_admin_manages_accounts_and_groups() {
        for role in Role::ALL {
            let expected = role == Role::MasterAdmin;
            assert_eq!(role.can_manage_users(), expected, "{role}");
            assert_eq!(role.can_manage_groups(), expected, "{role}");
        }
    }

    #[test]
    fn staff_excludes_plain_users() {
        assert!(Role::MasterAdmin.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::User.is_staff());
    }
}
