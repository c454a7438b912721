//! Cached-view invalidation.
//!
//! Successful mutations name the page paths whose rendered data is now stale.

use std::sync::Mutex;

/// Ticket list page.
pub const TICKETS_PATH: &str = "/tickets";

/// Detail page path for ticket `id`.
#[must_use]
pub fn ticket_path(id: &str) -> String {
    format!("{TICKETS_PATH}/{id}")
}

/// Receives invalidated page paths.
pub trait Revalidate {
    fn revalidate_path(&self, path: &str);
}

/// Records every invalidated path in order.
#[derive(Debug, Default)]
pub struct RevalidationLog {
    paths: Mutex<Vec<String>>,
}

impl RevalidationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl Revalidate for RevalidationLog {
    fn revalidate_path(&self, path: &str) {
        tracing::debug!(path, "revalidate");
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
    }
}
