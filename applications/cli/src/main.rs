/// Tilawah - recitation, bookmarks and prayer times from the terminal
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilawah_cli::{
    commands::{
        self,
        bookmarks::{self as bookmark_cmd, VerseAddress},
        calendar::{resolve_adjustment, HijriReport},
        prayer::{self as prayer_cmd, FixedLocation},
        recite::{recite, ReciteOptions},
        reciters as reciter_cmd,
    },
    AppConfig,
};
use tilawah_client::{GeocodeClient, PrayerClient, QuranClient};
use tilawah_core::{resolve_coordinates, ChapterNumber, ContentSource, Coordinates};
use tilawah_playback::Channel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilawah")]
#[command(about = "Verse-by-verse recitation, bookmarks and prayer times", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TILAWAH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all chapters
    Chapters,
    /// List audio editions
    Reciters,
    /// Show or change the chosen reciters
    Reciter {
        #[command(subcommand)]
        action: ReciterAction,
    },
    /// Play a chapter verse by verse and print what was heard
    Recite {
        /// Chapter number (1-114)
        chapter: u16,
        /// Start at this verse instead of the last-read one
        #[arg(long)]
        from: Option<u16>,
        /// Follow each verse with its translation in this language
        #[arg(long, conflicts_with = "plain")]
        translation: Option<String>,
        /// Recitation only
        #[arg(long)]
        plain: bool,
    },
    /// Show the last-read verse of a chapter
    Resume {
        /// Chapter number (1-114)
        chapter: u16,
    },
    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Show the Hijri date
    Hijri {
        /// Gregorian date (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Day adjustment, overriding configuration and region
        #[arg(long, allow_hyphen_values = true)]
        adjust: Option<i32>,
    },
    /// Show today's prayer times
    PrayerTimes {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// List bookmarks in the order they were made
    List,
    /// Bookmark a verse (chapter:verse)
    Add {
        verse: VerseAddress,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a bookmark (chapter:verse)
    Remove { verse: VerseAddress },
}

#[derive(Subcommand)]
enum ReciterAction {
    /// Show the recitation and translation reciters in use
    Show,
    /// Choose the reciter for recitation audio
    Set { id: String },
    /// Choose the translation reciter for a language
    Translation {
        language: String,
        /// Audio edition identifier
        #[arg(required_unless_present = "default")]
        id: Option<String>,
        /// Go back to the language's default recording
        #[arg(long, conflicts_with = "id")]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilawah=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Chapters => {
            let client = QuranClient::new(config.quran_client())?;
            let chapters = client.get_chapters().await?;
            print_lines(commands::render_chapters(&chapters));
        }
        Commands::Reciters => {
            let client = QuranClient::new(config.quran_client())?;
            let reciters = client.get_reciters().await?;
            print_lines(commands::render_reciters(&reciters));
        }
        Commands::Reciter { action } => {
            let mut tracker = commands::open_tracker(&config)?;
            match action {
                ReciterAction::Show => {}
                ReciterAction::Set { id } => reciter_cmd::set_reciter(&mut tracker, &id)?,
                ReciterAction::Translation { language, id, .. } => {
                    reciter_cmd::set_translation_reciter(&mut tracker, &language, id.as_deref())?;
                }
            }
            print_lines(reciter_cmd::render_preferences(
                tracker.preferences(),
                &config.playback,
            ));
        }
        Commands::Recite {
            chapter,
            from,
            translation,
            plain,
        } => {
            let tracker = commands::open_tracker(&config)?;
            let client = QuranClient::new(config.quran_client())?
                .with_translation_reciters(tracker.preferences().translation_reciters.clone());
            let options = ReciteOptions {
                chapter: ChapterNumber::new(chapter)?,
                from,
                translation,
                plain,
            };
            let recitation = recite(&client, tracker, &config.playback, options).await?;

            for clip in &recitation.heard {
                let label = match clip.channel {
                    Channel::Primary => "recitation",
                    Channel::Translation => "translation",
                };
                println!("{:>7}  {:<11} {}", clip.verse.to_string(), label, clip.url);
            }
            for fault in &recitation.faults {
                eprintln!("error: {fault}");
            }
            if recitation.finished {
                println!("Chapter {chapter} finished");
            } else if let Some(verse) = recitation.resting_on {
                println!("Stopped at {verse} ({})", recitation.state);
            }
        }
        Commands::Resume { chapter } => {
            let tracker = commands::open_tracker(&config)?;
            let position = tracker.last_read(ChapterNumber::new(chapter)?);
            println!("{}", commands::render_position(chapter, position));
        }
        Commands::Bookmarks { action } => {
            let mut tracker = commands::open_tracker(&config)?;
            match action {
                BookmarkAction::List => {
                    if tracker.bookmarks().is_empty() {
                        println!("No bookmarks");
                    }
                    print_lines(bookmark_cmd::render(tracker.bookmarks()));
                }
                BookmarkAction::Add { verse, note } => {
                    let client = QuranClient::new(config.quran_client())?;
                    let reciter = commands::reciter_id(&config.playback, &tracker);
                    if bookmark_cmd::add(&client, &mut tracker, &reciter, verse, note).await? {
                        println!("Bookmarked {verse}");
                    } else {
                        println!("{verse} is already bookmarked");
                    }
                }
                BookmarkAction::Remove { verse } => {
                    if bookmark_cmd::remove(&mut tracker, verse) {
                        println!("Removed bookmark on {verse}");
                    } else {
                        println!("{verse} was not bookmarked");
                    }
                }
            }
        }
        Commands::Hijri { date, adjust } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let coords = resolve_coordinates(&FixedLocation(config.coordinates()));
            let geocoder = GeocodeClient::new(config.geocode_client())?;
            let (adjustment, source) =
                resolve_adjustment(adjust, &config.location, &geocoder, coords).await;
            let report = HijriReport::new(date, adjustment, source)?;
            print_lines(report.render());
        }
        Commands::PrayerTimes { lat, lon } => {
            let fix = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
                _ => config.coordinates(),
            };
            let coords = resolve_coordinates(&FixedLocation(fix));
            let client = PrayerClient::new(config.prayer_client())?;
            let today = Local::now().date_naive();
            let times = client.timings(coords, today).await?;

            println!(
                "{} at {:.4}, {:.4}",
                today.format("%A %-d %B %Y"),
                coords.latitude,
                coords.longitude
            );
            print_lines(prayer_cmd::render(&times));
        }
    }

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
