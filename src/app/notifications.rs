use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::domain::notification::{FilterMode, Notification, Priority};
use crate::domain::user::Role;
use crate::infra::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NotificationCounts {
    pub all: usize,
    pub unread: usize,
    pub high: usize,
    pub critical: usize,
}

/// Role scoping first, then the mode. A notification that does not target
/// `role` is never visible, whatever the mode.
pub fn filter<'a>(
    notifications: &'a [Notification],
    role: Role,
    mode: FilterMode,
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|notification| notification.targets(role))
        .filter(|notification| mode.keeps(notification))
        .collect()
}

pub fn counts(notifications: &[Notification], role: Role) -> NotificationCounts {
    let mut counts = NotificationCounts::default();
    for notification in notifications.iter().filter(|n| n.targets(role)) {
        counts.all += 1;
        if !notification.read {
            counts.unread += 1;
        }
        match notification.priority {
            Priority::High => counts.high += 1,
            Priority::Critical => counts.critical += 1,
            Priority::Low | Priority::Medium => {}
        }
    }
    counts
}

/// Header badge text: hidden at zero, capped at "9+".
pub fn badge_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1..=9 => count.to_string(),
        _ => "9+".to_string(),
    }
}

/// Coarse age of a notification in whole days, rounded up.
pub fn relative_label(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = (now - timestamp).abs();
    let mut days = elapsed.whole_days();
    if elapsed - Duration::days(days) > Duration::ZERO {
        days += 1;
    }

    match days {
        0 | 1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        3..=7 => format!("{} days ago", days - 1),
        _ => timestamp.date().to_string(),
    }
}

#[derive(Clone)]
pub struct NotificationService {
    store: Store,
}

impl NotificationService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, role: Role, mode: FilterMode) -> Vec<Notification> {
        let tables = self.store.read();
        filter(&tables.notifications, role, mode)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn counts(&self, role: Role) -> NotificationCounts {
        counts(&self.store.read().notifications, role)
    }

    pub fn mark_read(&self, id: &str) -> bool {
        self.set_read(id, true)
    }

    pub fn mark_unread(&self, id: &str) -> bool {
        self.set_read(id, false)
    }

    pub fn delete(&self, id: &str) -> bool {
        let mut tables = self.store.write();
        let before = tables.notifications.len();
        tables.notifications.retain(|notification| notification.id != id);
        tables.notifications.len() != before
    }

    /// Marks every stored notification read, including ones the caller's
    /// role cannot see. Returns how many changed.
    pub fn mark_all_read(&self) -> usize {
        let mut tables = self.store.write();
        let mut changed = 0;
        for notification in tables.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    fn set_read(&self, id: &str, read: bool) -> bool {
        let mut tables = self.store.write();
        match tables.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = read;
                true
            }
            None => false,
        }
    }
}
