// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use pilgrim_feed::config::Config;
use pilgrim_feed::error::{Error, LifecycleError};
use pilgrim_feed::feed::{Category, FeedHandle, FeedSession, NotificationId, Priority};

fn quiet_session() -> (FeedSession, FeedHandle) {
    let mut config = Config::default();
    config.generator.enabled = false;
    let mut session = FeedSession::new(&config);
    let feed = session.initialize().expect("Failed to initialize feed");
    (session, feed)
}

#[test]
fn test_host_walkthrough() {
    let (_session, feed) = quiet_session();

    // Seeded: ids 1 and 2 unread, 3 read.
    let ids: Vec<u64> = feed.list().unwrap().iter().map(|n| n.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(feed.unread_count().unwrap(), 2);

    feed.add_parsed("queue", "high", "Crowd surge at Zone A")
        .expect("Failed to add notification");
    let list = feed.list().unwrap();
    assert_eq!(list[0].message(), "Crowd surge at Zone A");
    assert!(!list[0].is_read());
    assert_eq!(feed.unread_count().unwrap(), 3);

    feed.mark_as_read(NotificationId::new(1)).unwrap();
    let list = feed.list().unwrap();
    assert_eq!(list.len(), 4);
    let first_seed = list.iter().find(|n| n.id().value() == 1).unwrap();
    assert!(first_seed.is_read());
    assert_eq!(feed.unread_count().unwrap(), 2);

    let before = feed.list().unwrap();
    feed.mark_as_read_str("does-not-exist")
        .expect("Unknown id should be ignored");
    feed.mark_as_read(NotificationId::new(404)).unwrap();
    assert_eq!(feed.list().unwrap(), before);
    assert_eq!(feed.unread_count().unwrap(), 2);

    feed.mark_all_as_read().unwrap();
    assert_eq!(feed.unread_count().unwrap(), 0);
    let once = feed.list().unwrap();
    assert_eq!(feed.mark_all_as_read().unwrap(), 0);
    assert_eq!(feed.unread_count().unwrap(), 0);
    assert_eq!(feed.list().unwrap(), once);
}

#[test]
fn test_handles_share_one_feed() {
    let (_session, feed) = quiet_session();
    let header = feed.clone();

    feed.add(Category::Traffic, Priority::Low, "Traffic cleared on Highway 51")
        .unwrap();
    assert_eq!(header.unread_count().unwrap(), 3);

    header.mark_all_as_read().unwrap();
    assert_eq!(feed.unread_count().unwrap(), 0);
}

#[test]
fn test_snapshot_is_stable_after_later_mutation() {
    let (_session, feed) = quiet_session();
    let snapshot = feed.list().unwrap();

    feed.add(Category::Emergency, Priority::High, "Medical team requested")
        .unwrap();
    feed.mark_all_as_read().unwrap();

    assert_eq!(snapshot.len(), 3);
    assert!(!snapshot[0].is_read());
}

#[test]
fn test_concurrent_hosts_keep_count_consistent() {
    let (_session, feed) = quiet_session();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let feed = feed.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    let added = feed
                        .add(Category::Queue, Priority::Medium, format!("w{worker}-{i}"))
                        .unwrap();
                    if i % 2 == 0 {
                        feed.mark_as_read(added.id()).unwrap();
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let list = feed.list().unwrap();
    assert_eq!(list.len(), 103);
    let unread = list.iter().filter(|n| !n.is_read()).count();
    assert_eq!(feed.unread_count().unwrap(), unread);
    assert_eq!(unread, 2 + 4 * 12);
}

#[tokio::test(start_paused = true)]
async fn test_ten_ticks_at_full_probability_add_ten_events() {
    let mut config = Config::default();
    config.generator.probability = 1.0;
    let period = config.generator.tick_period().as_duration();

    let mut session = FeedSession::new(&config);
    let feed = session.initialize().unwrap();
    let seeded = feed.list().unwrap();

    tokio::time::sleep(period * 10 + period / 2).await;

    let list = feed.list().unwrap();
    assert_eq!(list.len(), seeded.len() + 10);
    assert!(list[..10].iter().all(|n| !n.is_read()));
    assert_eq!(&list[10..], &seeded[..]);

    let candidates = &config.generator.candidates;
    assert!(list[..10]
        .iter()
        .all(|n| candidates.iter().any(|c| c.message == n.message())));
}

#[tokio::test(start_paused = true)]
async fn test_zero_probability_never_adds() {
    let mut config = Config::default();
    config.generator.probability = 0.0;
    let period = config.generator.tick_period().as_duration();

    let mut session = FeedSession::new(&config);
    let feed = session.initialize().unwrap();

    tokio::time::sleep(period * 20).await;
    assert_eq!(feed.list().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_no_generated_event_after_teardown() {
    let mut config = Config::default();
    config.generator.probability = 1.0;
    config.generator.tick_period_secs = 5;

    let mut session = FeedSession::new(&config);
    let feed = session.initialize().unwrap();
    tokio::time::sleep(Duration::from_secs(12)).await;
    assert_eq!(feed.list().unwrap().len(), 5);

    session.teardown();
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(
        feed.list(),
        Err(Error::Lifecycle(LifecycleError::TornDown))
    );
    assert!(!session.generator_running());
}
