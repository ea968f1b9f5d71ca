// SPDX-License-Identifier: MPL-2.0
//! Header dropdown view model.
//!
//! Turns a feed snapshot into what the header bell renders: the unread
//! badge, the first few entries with icon, tone and age, and the
//! "+N more notifications" overflow line. Clicks come back as [`Message`].

use super::time_ago::format_time_ago;
use crate::domain::feed::DropdownLimit;
use crate::feed::{Category, Notification, NotificationId, Priority};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Badge values above this render as "99+".
const BADGE_CAP: usize = 99;

/// Messages the header sends back to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// An entry in the dropdown was clicked.
    NotificationClicked(NotificationId),
    /// "Mark all as read" was pressed.
    MarkAllRead,
}

/// Icon shown next to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Users,
    Car,
    AlertTriangle,
    Bell,
}

impl Icon {
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Queue => Icon::Users,
            Category::Traffic => Icon::Car,
            Category::Emergency => Icon::AlertTriangle,
            Category::General => Icon::Bell,
        }
    }
}

/// Color tone of an entry's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

impl Tone {
    #[must_use]
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::High => Tone::Red,
            Priority::Medium => Tone::Yellow,
            Priority::Low => Tone::Green,
        }
    }
}

/// One rendered dropdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownEntry {
    pub id: NotificationId,
    pub message: String,
    pub icon: Icon,
    pub tone: Tone,
    pub age: String,
    /// Unread entries get a dot and full opacity.
    pub unread: bool,
}

impl DropdownEntry {
    fn from_notification(notification: &Notification, now: DateTime<Utc>) -> Self {
        Self {
            id: notification.id(),
            message: notification.message().to_string(),
            icon: Icon::for_category(notification.category()),
            tone: Tone::for_priority(notification.priority()),
            age: format_time_ago(notification.created_at(), now),
            unread: !notification.is_read(),
        }
    }

    /// The message sent when this row is clicked.
    #[must_use]
    pub fn on_click(&self) -> Message {
        Message::NotificationClicked(self.id)
    }
}

/// Everything the header needs to draw the bell and its dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub entries: Vec<DropdownEntry>,
    pub unread_count: usize,
    /// Events beyond the display limit.
    pub overflow: usize,
}

impl DropdownView {
    /// Builds the view from notifications ordered newest first.
    pub fn build<'a>(
        notifications: impl IntoIterator<Item = &'a Notification>,
        now: DateTime<Utc>,
        limit: DropdownLimit,
    ) -> Self {
        let mut entries = Vec::new();
        let mut unread_count = 0;
        let mut total = 0;
        for notification in notifications {
            total += 1;
            if !notification.is_read() {
                unread_count += 1;
            }
            if entries.len() < limit.value() {
                entries.push(DropdownEntry::from_notification(notification, now));
            }
        }

        Self {
            overflow: total - entries.len(),
            entries,
            unread_count,
        }
    }

    /// True when the feed holds nothing ("No notifications").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text of the bell badge; `None` hides it.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count {
            0 => None,
            n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
            n => Some(n.to_string()),
        }
    }

    /// Subtitle under the dropdown header.
    #[must_use]
    pub fn unread_label(&self) -> Option<String> {
        (self.unread_count > 0).then(|| format!("{} unread", self.unread_count))
    }

    /// Footer line for events that did not fit.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more notifications", self.overflow))
    }
}
