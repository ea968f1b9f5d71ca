// SPDX-License-Identifier: MPL-2.0
//! The session notification feed.
//!
//! A per-session, in-memory log of alert events (queue surges, traffic
//! changes, emergencies, general notices) with read tracking. Events are
//! kept newest first; the unread count is always derived from the list.
//!
//! # Usage
//!
//! ```no_run
//! use pilgrim_feed::config::Config;
//! use pilgrim_feed::feed::{Category, FeedSession, Priority};
//!
//! # async fn run() -> pilgrim_feed::error::Result<()> {
//! let mut session = FeedSession::new(&Config::default());
//! let feed = session.initialize()?;
//!
//! feed.add(Category::Queue, Priority::High, "Crowd surge at Zone A")?;
//! assert_eq!(feed.unread_count()?, 3);
//!
//! session.teardown();
//! # Ok(())
//! # }
//! ```

mod clock;
mod generator;
mod notification;
mod session;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use generator::{default_candidates, Candidate, RandomSource, StdRandom, SyntheticSource};
pub use notification::{Category, Notification, NotificationId, Priority};
pub use session::{FeedHandle, FeedSession, FeedSessionBuilder};
pub use state::NotificationFeed;
