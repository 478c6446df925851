//! # State Module
//!
//! Manages application state for the studio.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs, and the timer tasks
//! only ever see the session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ SessionState │  │  SettingsState   │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │  │  SoundSettings   │  │  currency_symbol │          │
//! │  │    Session   │  │  + JSON store    │  │  settings_path   │          │
//! │  │  >>          │  │                  │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Arc<Mutex<T>>, shared with animation timers           │
//! │  • SettingsState: Mutex around a Copy value                            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod settings;

pub use config::{ConfigState, SETTINGS_FILE_NAME};
pub use session::{Highlight, Session, SessionState, ADDED_HIGHLIGHT, CODE_REVEAL_DELAY, REMOVED_HIGHLIGHT};
pub use settings::{SettingsError, SettingsPatch, SettingsState, SettingsStore, SoundSettings};
