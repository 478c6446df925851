//! # Barista Studio Library
//!
//! Interactive front-end for the coffee composition engine.
//! This is the main entry point that wires state together and runs the
//! input loop.
//!
//! ## Module Organization
//! ```text
//! barista_studio_lib/
//! ├── lib.rs          ◄─── You are here (logging & run loop)
//! ├── studio.rs       ◄─── Command dispatch
//! ├── input.rs        ◄─── Line parsing
//! ├── render.rs       ◄─── Text views
//! ├── audio.rs        ◄─── Cue → tone synthesis
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Current composition + animation flags
//! │   ├── settings.rs ◄─── Persisted sound settings
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Base and add-on listings
//! │   ├── order.rs    ◄─── Base selection and toggles
//! │   └── settings.rs ◄─── Sound settings commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Studio State                                         │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  SessionState    │ │  SettingsState   │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Composition   │ │  • Sound on/off  │ │  • Currency symbol   │   │
//! │  │  • Highlights    │ │  • Volume        │ │  • Settings path     │   │
//! │  │  • Timers        │ │  • JSON file     │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Each command only takes the state it needs.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod audio;
pub mod commands;
pub mod error;
pub mod input;
pub mod render;
pub mod state;
pub mod studio;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::ConfigState;
use studio::Studio;

/// Runs the studio until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (stderr, RUST_LOG aware)
/// 2. Read configuration from BARISTA_* variables
/// 3. Load sound settings (defaults on any problem)
/// 4. Print the menu and the starting order
/// 5. Read commands line by line from stdin
/// ```
pub async fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(settings_path = ?config.settings_path, "Starting Barista Studio");
    let studio = Studio::from_config(config);

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    let greeting = studio.handle(input::Command::Menu).text + "\n" + &studio.show();
    stdout.write_all(greeting.as_bytes()).await?;
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            continue;
        }

        let reply = match input::parse(&line) {
            Ok(command) => studio.handle(command),
            Err(err) => studio::Reply {
                text: render::error(&err),
                quit: false,
            },
        };
        if reply.quit {
            break;
        }

        stdout.write_all(reply.text.as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    info!("Barista Studio closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the rendered order.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=barista=trace` - Show trace for barista crates only
/// - Default: INFO, DEBUG for barista crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,barista=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
