//! Group notifications raised when a ticket is routed to a group.
//!
//! Notices are logged, not delivered. Embedders that want to observe them
//! install their own [`Notifier`].

use std::fmt;
use std::sync::{Arc, Mutex};

/// A ticket was created with an `assigned_group_id` naming an existing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNotice {
    pub ticket_id: String,
    pub group_id: String,
    pub group_name: String,
    pub member_ids: Vec<String>,
}

impl fmt::Display for GroupNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notification: Ticket assigned to group {}. Members: {}",
            self.group_name,
            self.member_ids.join(", ")
        )
    }
}

pub trait Notifier {
    fn notify_group(&self, notice: &GroupNotice);
}

/// Default notifier: one `info` event per notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_group(&self, notice: &GroupNotice) {
        tracing::info!(
            ticket_id = %notice.ticket_id,
            group_id = %notice.group_id,
            "{notice}"
        );
    }
}

/// Keeps every notice in a shared list. Clones observe the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<GroupNotice>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices recorded so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<GroupNotice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_group(&self, notice: &GroupNotice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice() -> GroupNotice {
        GroupNotice {
            ticket_id: "tkt-1".into(),
            group_id: "g1".into(),
            group_name: "Support Team".into(),
            member_ids: vec!["u1".into(), "u2".into()],
        }
    }

    #[test]
    fn display_lists_group_and_members() {
        assert_eq!(
            notice().to_string(),
            "Notification: Ticket assigned to group Support Team. Members: u1, u2"
        );
    }

    #[test]
    fn recording_clones_share_notices() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();
        recorder.notify_group(&notice());
        assert_eq!(handle.notices(), vec![notice()]);
    }
}
