// SPDX-License-Identifier: MPL-2.0
use pilgrim_feed::config::{self, Config};
use pilgrim_feed::feed::{Candidate, Category, FeedSession, Priority, StdRandom};
use tempfile::tempdir;

#[test]
fn test_settings_file_drives_dropdown() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.generator.enabled = false;
    initial.display.dropdown_limit = 2;
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, initial);

    let mut session = FeedSession::new(&loaded);
    let feed = session.initialize().unwrap();
    let view = feed.dropdown().unwrap();
    assert_eq!(view.entries.len(), 2);
    assert_eq!(
        view.overflow_label().as_deref(),
        Some("+1 more notifications")
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_handwritten_candidates_are_used() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[generator]
tick_period_secs = 5
probability = 1.0

[[generator.candidates]]
message = "Gates open at Pavagadh"
category = "general"
priority = "low"
"#,
    )
    .unwrap();

    let loaded = config::load_from_path(&path).unwrap();
    assert_eq!(loaded.generator.tick_period().value(), 5);
    assert_eq!(
        loaded.generator.candidates,
        vec![Candidate::new(
            "Gates open at Pavagadh",
            Category::General,
            Priority::Low
        )]
    );
    assert_eq!(loaded.display, Config::default().display);
}

#[tokio::test(start_paused = true)]
async fn test_seeded_random_generator_from_config() {
    let mut config = Config::default();
    config.generator.tick_period_secs = 1;
    config.generator.probability = 1.0;
    config.generator.candidates = vec![Candidate::new(
        "Queue moving at Ambaji",
        Category::Queue,
        Priority::Low,
    )];

    let mut session = FeedSession::builder(&config)
        .random(Box::new(StdRandom::seeded(7)))
        .build();
    let feed = session.initialize().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(3500)).await;

    let list = feed.list().unwrap();
    assert_eq!(list.len(), 6);
    assert!(list[..3]
        .iter()
        .all(|n| n.message() == "Queue moving at Ambaji" && n.category() == Category::Queue));
}
