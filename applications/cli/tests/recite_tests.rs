//! End-to-end tests for the recite and bookmarks commands

mod common;

use common::{ikhlas, recitation_url, translation_url, FixtureSource};
use tempfile::TempDir;
use tilawah_cli::commands::bookmarks::{self, VerseAddress};
use tilawah_cli::commands::recite::{recite, ReciteOptions};
use tilawah_cli::commands::reciters;
use tilawah_cli::config::PlaybackSettings;
use tilawah_cli::simulated::Heard;
use tilawah_cli::CliError;
use tilawah_core::{AudioSettings, Reciter, VerseNumber, VerseRef};
use tilawah_playback::{Channel, PlaybackError, PlaybackFault, PlaybackState};
use tilawah_storage::{FileStore, MemoryStore, PositionTracker};

fn tracker(dir: &TempDir) -> PositionTracker<FileStore> {
    PositionTracker::load(FileStore::open(dir.path()).unwrap())
}

fn options() -> ReciteOptions {
    ReciteOptions {
        chapter: ikhlas(),
        from: None,
        translation: None,
        plain: false,
    }
}

fn verse(n: u16) -> VerseRef {
    VerseRef {
        number: VerseNumber::new(6221 + u32::from(n)),
        chapter: ikhlas(),
        number_in_chapter: n,
    }
}

fn primary(n: u16) -> Heard {
    Heard {
        verse: verse(n),
        channel: Channel::Primary,
        url: recitation_url(Reciter::DEFAULT_ID, n),
    }
}

fn translated(n: u16) -> Heard {
    Heard {
        verse: verse(n),
        channel: Channel::Translation,
        url: translation_url(n),
    }
}

#[tokio::test]
async fn recites_whole_chapter_and_remembers_position() {
    let dir = TempDir::new().unwrap();

    let recitation = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        options(),
    )
    .await
    .unwrap();

    assert_eq!(
        recitation.heard,
        vec![primary(1), primary(2), primary(3), primary(4)]
    );
    assert!(recitation.finished);
    assert!(recitation.faults.is_empty());
    assert_eq!(recitation.state, PlaybackState::Paused);
    assert_eq!(recitation.resting_on, Some(verse(4)));

    let reloaded = tracker(&dir);
    assert_eq!(
        reloaded.last_read(ikhlas()).map(|p| p.number_in_chapter),
        Some(4)
    );
}

#[tokio::test]
async fn translation_follows_each_verse_that_has_one() {
    let dir = TempDir::new().unwrap();
    let with_urdu = ReciteOptions {
        translation: Some("ur".to_string()),
        ..options()
    };

    let recitation = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        with_urdu,
    )
    .await
    .unwrap();

    assert_eq!(
        recitation.heard,
        vec![
            primary(1),
            translated(1),
            primary(2),
            translated(2),
            primary(3),
            primary(4),
            translated(4),
        ]
    );
    assert!(recitation.finished);
    assert_eq!(tracker(&dir).audio_settings(), &AudioSettings::default());
}

#[tokio::test]
async fn flags_leave_stored_settings_alone() {
    let dir = TempDir::new().unwrap();
    let stored = AudioSettings {
        with_translation: true,
        ..AudioSettings::default()
    };
    {
        let mut tracker = tracker(&dir);
        tracker.set_audio_settings(stored.clone());
    }

    let plain = ReciteOptions {
        plain: true,
        ..options()
    };
    let recitation = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        plain,
    )
    .await
    .unwrap();

    assert_eq!(
        recitation.heard,
        vec![primary(1), primary(2), primary(3), primary(4)]
    );
    assert_eq!(tracker(&dir).audio_settings(), &stored);

    // Without flags the stored settings apply again
    let again = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        ReciteOptions {
            from: Some(4),
            ..options()
        },
    )
    .await
    .unwrap();
    assert_eq!(again.heard, vec![primary(4), translated(4)]);
}

#[tokio::test]
async fn stored_reciter_is_used() {
    let dir = TempDir::new().unwrap();
    {
        let mut tracker = tracker(&dir);
        reciters::set_reciter(&mut tracker, "ar.minshawi").unwrap();
    }

    let only_last = ReciteOptions {
        from: Some(4),
        ..options()
    };
    let recitation = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        only_last,
    )
    .await
    .unwrap();

    assert_eq!(recitation.heard.len(), 1);
    assert_eq!(recitation.heard[0].url, recitation_url("ar.minshawi", 4));
}

#[tokio::test]
async fn next_run_resumes_at_last_read_verse() {
    let dir = TempDir::new().unwrap();
    let source = FixtureSource::default();
    let playback = PlaybackSettings::default();

    let first = ReciteOptions {
        from: Some(2),
        ..options()
    };
    let recitation = recite(&source, tracker(&dir), &playback, first).await.unwrap();
    assert_eq!(recitation.heard.first(), Some(&primary(2)));

    let again = recite(&source, tracker(&dir), &playback, options()).await.unwrap();
    assert_eq!(again.heard, vec![primary(4)]);
}

#[tokio::test]
async fn unknown_start_verse_is_rejected() {
    let dir = TempDir::new().unwrap();
    let from_nine = ReciteOptions {
        from: Some(9),
        ..options()
    };

    let result = recite(
        &FixtureSource::default(),
        tracker(&dir),
        &PlaybackSettings::default(),
        from_nine,
    )
    .await;

    match result {
        Err(CliError::Playback(PlaybackError::VerseOutOfRange {
            number_in_chapter, ..
        })) => assert_eq!(number_in_chapter, 9),
        other => panic!("Expected VerseOutOfRange, got: {:?}", other),
    }
}

#[tokio::test]
async fn silent_verse_stops_recitation() {
    let dir = TempDir::new().unwrap();

    let recitation = recite(
        &FixtureSource::with_silent_verse(2),
        tracker(&dir),
        &PlaybackSettings::default(),
        options(),
    )
    .await
    .unwrap();

    assert_eq!(recitation.heard, vec![primary(1)]);
    assert!(!recitation.finished);
    assert_eq!(recitation.state, PlaybackState::Paused);
    assert_eq!(recitation.resting_on, Some(verse(2)));
    assert!(matches!(
        recitation.faults.as_slice(),
        [PlaybackFault::ResourceLoad { channel: Channel::Primary, .. }]
    ));
}

#[tokio::test]
async fn configured_reciter_is_used() {
    let dir = TempDir::new().unwrap();
    let playback = PlaybackSettings {
        reciter: Some("ar.husary".to_string()),
        ..PlaybackSettings::default()
    };
    let only_last = ReciteOptions {
        from: Some(4),
        ..options()
    };

    let recitation = recite(&FixtureSource::default(), tracker(&dir), &playback, only_last)
        .await
        .unwrap();

    assert_eq!(recitation.heard.len(), 1);
    assert_eq!(recitation.heard[0].url, recitation_url("ar.husary", 4));
}

#[tokio::test]
async fn bookmarks_add_and_remove() {
    let source = FixtureSource::default();
    let mut tracker = PositionTracker::load(MemoryStore::new());
    let address: VerseAddress = "112:2".parse().unwrap();

    let added = bookmarks::add(
        &source,
        &mut tracker,
        Reciter::DEFAULT_ID,
        address,
        Some("memorise".to_string()),
    )
    .await
    .unwrap();
    assert!(added);

    let again = bookmarks::add(&source, &mut tracker, Reciter::DEFAULT_ID, address, None)
        .await
        .unwrap();
    assert!(!again);

    let lines = bookmarks::render(tracker.bookmarks());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("112:2"));
    assert!(lines[0].contains("verse 2"));
    assert!(lines[0].ends_with("[memorise]"));

    assert!(bookmarks::remove(&mut tracker, address));
    assert!(!bookmarks::remove(&mut tracker, address));
    assert!(tracker.bookmarks().is_empty());
}

#[tokio::test]
async fn bookmarking_missing_verse_fails() {
    let source = FixtureSource::default();
    let mut tracker = PositionTracker::load(MemoryStore::new());
    let address: VerseAddress = "112:5".parse().unwrap();

    let result = bookmarks::add(&source, &mut tracker, Reciter::DEFAULT_ID, address, None).await;

    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}
