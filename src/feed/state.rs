// SPDX-License-Identifier: MPL-2.0
//! The in-memory notification log of one session.
//!
//! `NotificationFeed` is plain synchronous state: it owns the events
//! (newest first), hands out ids, and answers queries. Locking and the
//! background generator live in [`super::session`].

use super::clock::Clock;
use super::notification::{Category, Notification, NotificationId, Priority};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::Arc;

/// Seed event shown to a freshly opened session.
struct Seed {
    message: &'static str,
    category: Category,
    priority: Priority,
    read: bool,
    minutes_ago: i64,
}

const SEEDS: [Seed; 3] = [
    Seed {
        message: "High crowd density at Somnath Temple",
        category: Category::Queue,
        priority: Priority::High,
        read: false,
        minutes_ago: 2,
    },
    Seed {
        message: "Parking slots available at Zone A",
        category: Category::Traffic,
        priority: Priority::Medium,
        read: false,
        minutes_ago: 5,
    },
    Seed {
        message: "Emergency alert resolved at Dwarka",
        category: Category::Emergency,
        priority: Priority::High,
        read: true,
        minutes_ago: 60,
    },
];

/// Ordered, read-tracking log of notifications.
#[derive(Debug)]
pub struct NotificationFeed {
    /// Events, newest first.
    entries: VecDeque<Notification>,
    /// Next id to hand out.
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    #[must_use]
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            clock,
        }
    }

    /// Creates a feed holding the three seed alerts (ids 1 to 3, the
    /// oldest one already read).
    #[must_use]
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let mut feed = Self::empty(clock);
        // Seeds are listed newest first; ids follow list order.
        for seed in &SEEDS {
            let id = feed.allocate_id();
            let mut notification = Notification::new(
                id,
                seed.category,
                seed.priority,
                seed.message,
                now - Duration::minutes(seed.minutes_ago),
            );
            if seed.read {
                notification.mark_read();
            }
            feed.entries.push_back(notification);
        }
        feed
    }

    fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds an unread notification at the head and returns a copy of it.
    pub fn add(
        &mut self,
        category: Category,
        priority: Priority,
        message: impl Into<String>,
    ) -> Notification {
        let id = self.allocate_id();
        let notification = Notification::new(id, category, priority, message, self.clock.now());
        self.entries.push_front(notification.clone());
        notification
    }

    /// Marks the notification with `id` as read.
    ///
    /// Unknown ids are ignored. Returns true if a notification matched.
    pub fn mark_as_read(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|n| n.id() == id) {
            Some(notification) => {
                notification.mark_read();
                true
            }
            None => false,
        }
    }

    /// Marks every notification as read. Returns how many were unread.
    pub fn mark_all_as_read(&mut self) -> usize {
        self.entries
            .iter_mut()
            .map(Notification::mark_read)
            .filter(|changed| *changed)
            .count()
    }

    /// Returns a copy of all notifications, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// Returns the notification with `id`, if held.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Iterates over the notifications, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Counts the unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read()).count()
    }

    /// Current time according to the feed's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
