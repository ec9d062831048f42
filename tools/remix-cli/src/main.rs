//! Remix Studio CLI — manage catalog assets, load videos, edit a session,
//! and submit it for processing.
//!
//! Usage:
//!   remix check                    Probe the processing service
//!   remix overlays <SUBCOMMAND>    Manage overlay assets
//!   remix audio <SUBCOMMAND>       Manage audio tracks
//!   remix download <URL>           Load a video by URL into the session
//!   remix upload-video <PATH>      Load a local video into the session
//!   remix session <SUBCOMMAND>     Edit the session file
//!   remix preview                  Print the composited preview frame
//!   remix submit                   Submit the session for processing

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use remix_service_client::ServiceClient;

mod commands;

#[derive(Parser)]
#[command(
    name = "remix",
    about = "Overlay composition and remix submission for short-form video",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Processing service base URL (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session file to operate on
    #[arg(short, long, global = true, default_value = "session.json")]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the processing service
    Check,

    /// Manage overlay assets in the remote catalog
    Overlays {
        #[command(subcommand)]
        command: OverlayCommands,
    },

    /// Manage audio tracks in the remote catalog
    Audio {
        #[command(subcommand)]
        command: AudioCommands,
    },

    /// Download a video by URL and load it into the session
    Download {
        /// Public video URL (TikTok, Instagram, YouTube, ...)
        url: String,
    },

    /// Upload a local video file and load it into the session
    UploadVideo {
        /// Path to the video file
        path: PathBuf,
    },

    /// Unload the current video and drop its server-side temp files
    Clear,

    /// Edit the session file
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Print the composited preview frame as JSON
    Preview,

    /// Submit the session for processing and record the output
    Submit,
}

#[derive(Subcommand)]
enum OverlayCommands {
    /// List overlay assets
    List,

    /// Upload a new overlay asset
    Upload {
        /// Path to the overlay file (.mov, .mp4, .webm, .gif, .png)
        path: PathBuf,
    },

    /// Delete an overlay asset and drop session references to it
    Delete {
        /// Catalog id of the overlay
        id: String,
    },

    /// Derive a background-free copy of an overlay
    RemoveBackground {
        /// Catalog id of the source overlay
        id: String,
    },
}

#[derive(Subcommand)]
enum AudioCommands {
    /// List audio tracks
    List,

    /// Upload a new audio track
    Upload {
        /// Path to the audio file (.mp3, .wav, .m4a, .aac)
        path: PathBuf,
    },

    /// Delete an audio track
    Delete {
        /// Catalog id of the track
        id: String,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Create a fresh session file with default settings
    Init,

    /// Show the session state
    Show,

    /// Stage an overlay as the pre-commit selection
    Stage {
        /// Catalog id of the overlay
        id: String,
    },

    /// Commit the staged overlay into the instance sequence
    Commit,

    /// Remove a committed overlay by index
    Remove {
        /// Zero-based index into the instance sequence
        index: usize,
    },

    /// Update edit settings
    Set(commands::session::SetArgs),

    /// Reset color filters and playback speed to neutral
    ResetFilters,

    /// Switch the preview between the source and the remix output
    View {
        /// Which side to preview: original or remixed
        #[arg(value_parser = ["original", "remixed"])]
        side: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    remix_common::logging::init_logging(&remix_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    let mut config = remix_common::config::AppConfig::load();
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }
    let client = ServiceClient::from_config(&config.service);

    match cli.command {
        Commands::Check => commands::check::run(&client),
        Commands::Overlays { command } => match command {
            OverlayCommands::List => commands::overlays::list(&client),
            OverlayCommands::Upload { path } => commands::overlays::upload(&client, path),
            OverlayCommands::Delete { id } => {
                commands::overlays::delete(&client, &id, &cli.session)
            }
            OverlayCommands::RemoveBackground { id } => {
                commands::overlays::remove_background(&client, &id)
            }
        },
        Commands::Audio { command } => match command {
            AudioCommands::List => commands::audio::list(&client),
            AudioCommands::Upload { path } => commands::audio::upload(&client, path),
            AudioCommands::Delete { id } => commands::audio::delete(&client, &id),
        },
        Commands::Download { url } => commands::video::download(&client, &url, &cli.session),
        Commands::UploadVideo { path } => commands::video::upload(&client, path, &cli.session),
        Commands::Clear => commands::video::clear(&client, &cli.session),
        Commands::Session { command } => commands::session::run(command, &cli.session),
        Commands::Preview => commands::preview::run(&cli.session),
        Commands::Submit => commands::submit::run(&client, &cli.session),
    }
}
