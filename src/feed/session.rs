// SPDX-License-Identifier: MPL-2.0
//! Session lifecycle and the shared feed handle.
//!
//! A [`FeedSession`] owns one feed for the lifetime of a user session:
//! it seeds the feed on `initialize`, runs the synthetic generator as a
//! tokio task, and stops everything on `teardown` (or drop). Display
//! surfaces receive a [`FeedHandle`] and never reach the feed any other
//! way.
//!
//! All feed state sits behind one mutex. Host calls and generator ticks
//! both go through it, and the tick path re-checks the lifecycle state
//! under that lock, so nothing is generated once `teardown` has returned.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use super::clock::{Clock, SystemClock};
use super::generator::{RandomSource, StdRandom, SyntheticSource};
use super::notification::{Category, Notification, NotificationId, Priority};
use super::state::NotificationFeed;
use crate::config::{Config, GeneratorConfig};
use crate::diagnostics::{AddSource, DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::feed::DropdownLimit;
use crate::error::{Error, LifecycleError, Result};
use crate::ui::notifications::{DropdownView, Message};

#[derive(Debug)]
enum SessionState {
    Uninitialized,
    Live(NotificationFeed),
    TornDown,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<SessionState>,
    diagnostics: Option<DiagnosticsHandle>,
    dropdown_limit: DropdownLimit,
}

impl Shared {
    fn lock(&self) -> Result<MutexGuard<'_, SessionState>> {
        self.state.lock().map_err(|_| Error::LockPoisoned)
    }

    /// Runs `f` against the live feed, or fails with the lifecycle error.
    fn with_feed<T>(&self, f: impl FnOnce(&mut NotificationFeed) -> T) -> Result<T> {
        let result = self.lock().and_then(|mut state| match &mut *state {
            SessionState::Live(feed) => Ok(f(feed)),
            SessionState::Uninitialized => Err(LifecycleError::NotInitialized.into()),
            SessionState::TornDown => Err(LifecycleError::TornDown.into()),
        });
        if let Err(err) = &result {
            self.log_error(err);
        }
        result
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log(kind);
        }
    }

    fn log_error(&self, err: &Error) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_error(err.to_string());
        }
    }

    fn log_added(&self, notification: &Notification, source: AddSource) {
        self.log(DiagnosticEventKind::NotificationAdded {
            id: notification.id(),
            category: notification.category(),
            priority: notification.priority(),
            source,
        });
    }

    /// Runs one generator pass. Returns false once the session is no
    /// longer live, which ends the generator loop.
    fn generator_tick(&self, source: &mut SyntheticSource) -> bool {
        let Ok(mut state) = self.lock() else {
            self.log_error(&Error::LockPoisoned);
            return false;
        };
        let SessionState::Live(feed) = &mut *state else {
            return false;
        };

        let added = source
            .tick()
            .map(|c| feed.add(c.category, c.priority, c.message.clone()));
        if let Some(notification) = &added {
            self.log_added(notification, AddSource::Generator);
        }
        self.log(DiagnosticEventKind::GeneratorTick {
            fired: added.is_some(),
        });
        true
    }
}

/// Single-shot sleep re-armed after every tick, so passes never overlap.
async fn run_generator(
    shared: Arc<Shared>,
    mut source: SyntheticSource,
    period: Duration,
    first_tick: Instant,
) {
    let mut deadline = first_tick;
    loop {
        time::sleep_until(deadline).await;
        if !shared.generator_tick(&mut source) {
            break;
        }
        deadline = Instant::now() + period;
    }
}

/// Cheap, cloneable access to a session's feed.
///
/// Every operation fails with [`LifecycleError`] before the session is
/// initialized and after it is torn down.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    shared: Arc<Shared>,
}

impl FeedHandle {
    /// Adds an unread notification at the head of the feed.
    pub fn add(
        &self,
        category: Category,
        priority: Priority,
        message: impl Into<String>,
    ) -> Result<Notification> {
        let notification = self
            .shared
            .with_feed(|feed| feed.add(category, priority, message))?;
        self.shared.log_added(&notification, AddSource::Host);
        Ok(notification)
    }

    /// Like [`add`](Self::add), for hosts that carry category and
    /// priority as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown category or
    /// priority; the feed is left untouched.
    pub fn add_parsed(
        &self,
        category: &str,
        priority: &str,
        message: impl Into<String>,
    ) -> Result<Notification> {
        let parsed = category
            .parse::<Category>()
            .and_then(|c| priority.parse::<Priority>().map(|p| (c, p)));
        match parsed {
            Ok((category, priority)) => self.add(category, priority, message),
            Err(err) => {
                self.shared.log_error(&err);
                Err(err)
            }
        }
    }

    /// Marks one notification as read. Unknown ids are ignored.
    pub fn mark_as_read(&self, id: NotificationId) -> Result<()> {
        let found = self.shared.with_feed(|feed| feed.mark_as_read(id))?;
        self.shared.log(DiagnosticEventKind::MarkedRead {
            id: id.to_string(),
            found,
        });
        Ok(())
    }

    /// Like [`mark_as_read`](Self::mark_as_read), for hosts that carry
    /// ids as text.
    ///
    /// A string that names no notification, including one that is not an
    /// id at all, is an unknown id: the feed is left untouched and no
    /// error is returned.
    pub fn mark_as_read_str(&self, id: &str) -> Result<()> {
        match id.parse::<NotificationId>() {
            Ok(id) => self.mark_as_read(id),
            Err(_) => {
                self.shared.with_feed(|_| ())?;
                self.shared.log(DiagnosticEventKind::MarkedRead {
                    id: id.to_string(),
                    found: false,
                });
                Ok(())
            }
        }
    }

    /// Marks every notification as read. Returns how many changed.
    pub fn mark_all_as_read(&self) -> Result<usize> {
        let changed = self.shared.with_feed(NotificationFeed::mark_all_as_read)?;
        self.shared
            .log(DiagnosticEventKind::MarkedAllRead { changed });
        Ok(changed)
    }

    /// Snapshot of all notifications, newest first.
    pub fn list(&self) -> Result<Vec<Notification>> {
        self.shared.with_feed(|feed| feed.list())
    }

    pub fn unread_count(&self) -> Result<usize> {
        self.shared.with_feed(|feed| feed.unread_count())
    }

    /// Builds the header dropdown from one consistent snapshot.
    pub fn dropdown(&self) -> Result<DropdownView> {
        let limit = self.shared.dropdown_limit;
        self.shared
            .with_feed(|feed| DropdownView::build(feed.iter(), feed.now(), limit))
    }

    /// Applies a message sent by the header dropdown.
    pub fn handle_message(&self, message: &Message) -> Result<()> {
        match message {
            Message::NotificationClicked(id) => self.mark_as_read(*id),
            Message::MarkAllRead => self.mark_all_as_read().map(|_| ()),
        }
    }

    /// True while the session is initialized and not torn down.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.shared
            .lock()
            .map(|state| matches!(*state, SessionState::Live(_)))
            .unwrap_or(false)
    }
}

/// Builder for a [`FeedSession`] with non-default collaborators.
#[derive(Debug)]
pub struct FeedSessionBuilder {
    generator: GeneratorConfig,
    dropdown_limit: DropdownLimit,
    clock: Arc<dyn Clock>,
    random: Option<Box<dyn RandomSource>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl FeedSessionBuilder {
    /// Uses `clock` for notification timestamps.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Uses `random` for the generator instead of an entropy-seeded RNG.
    #[must_use]
    pub fn random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Logs session activity to `diagnostics`.
    #[must_use]
    pub fn diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn build(self) -> FeedSession {
        FeedSession {
            shared: Arc::new(Shared {
                state: Mutex::new(SessionState::Uninitialized),
                diagnostics: self.diagnostics,
                dropdown_limit: self.dropdown_limit,
            }),
            generator: self.generator,
            clock: self.clock,
            random: self.random,
            task: None,
        }
    }
}

/// Owner of one session's feed and its generator task.
#[derive(Debug)]
pub struct FeedSession {
    shared: Arc<Shared>,
    generator: GeneratorConfig,
    clock: Arc<dyn Clock>,
    random: Option<Box<dyn RandomSource>>,
    task: Option<JoinHandle<()>>,
}

impl FeedSession {
    /// Creates an uninitialized session with the wall clock and an
    /// entropy-seeded generator.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::builder(config).build()
    }

    #[must_use]
    pub fn builder(config: &Config) -> FeedSessionBuilder {
        FeedSessionBuilder {
            generator: config.generator.clone(),
            dropdown_limit: config.display.dropdown_limit(),
            clock: Arc::new(SystemClock),
            random: None,
            diagnostics: None,
        }
    }

    /// A handle to this session's feed. Valid to take before
    /// `initialize`; operations fail until then.
    #[must_use]
    pub fn handle(&self) -> FeedHandle {
        FeedHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Seeds the feed and, if enabled, starts the generator.
    ///
    /// # Errors
    ///
    /// - [`LifecycleError::AlreadyInitialized`] on a live session
    /// - [`LifecycleError::TornDown`] after teardown
    /// - [`Error::Runtime`] if the generator is enabled outside a tokio
    ///   runtime; the session stays uninitialized
    pub fn initialize(&mut self) -> Result<FeedHandle> {
        let runtime = if self.generator.enabled {
            let handle = tokio::runtime::Handle::try_current()
                .map_err(|e| Error::Runtime(e.to_string()))
                .inspect_err(|err| self.shared.log_error(err))?;
            Some(handle)
        } else {
            None
        };

        let seeded = {
            let mut state = self.shared.lock()?;
            match *state {
                SessionState::Uninitialized => {}
                SessionState::Live(_) => return Err(LifecycleError::AlreadyInitialized.into()),
                SessionState::TornDown => return Err(LifecycleError::TornDown.into()),
            }
            let feed = NotificationFeed::seeded(Arc::clone(&self.clock));
            let seeded = feed.len();
            *state = SessionState::Live(feed);
            seeded
        };

        if let Some(runtime) = runtime {
            let period = self.generator.tick_period().as_duration();
            let random = self
                .random
                .take()
                .unwrap_or_else(|| Box::new(StdRandom::from_entropy()));
            let source = SyntheticSource::new(
                self.generator.probability(),
                self.generator.candidates.clone(),
                random,
            );
            let first_tick = Instant::now() + period;
            self.task = Some(runtime.spawn(run_generator(
                Arc::clone(&self.shared),
                source,
                period,
                first_tick,
            )));
        }

        self.shared.log(DiagnosticEventKind::SessionInitialized {
            seeded,
            generator_enabled: self.task.is_some(),
        });
        Ok(self.handle())
    }

    /// Stops the generator and retires the feed. Idempotent.
    ///
    /// Handles fail with [`LifecycleError::TornDown`] afterwards.
    pub fn teardown(&mut self) {
        let was_live = {
            let mut state = self
                .shared
                .state
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let previous = std::mem::replace(&mut *state, SessionState::TornDown);
            matches!(previous, SessionState::Live(_))
        };

        if let Some(task) = self.task.take() {
            task.abort();
        }
        if was_live {
            self.shared.log(DiagnosticEventKind::SessionTornDown);
        }
    }

    /// True while the generator task is running.
    #[must_use]
    pub fn generator_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
