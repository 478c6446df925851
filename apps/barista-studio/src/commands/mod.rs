//! # Commands Module
//!
//! Every action the presentation layer can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── menu.rs      ◄─── Base and add-on listings
//! ├── order.rs     ◄─── Base selection, add-on toggles
//! └── settings.rs  ◄─── Sound settings and test tones
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end event ("toggle milk")                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  order::toggle_additive(&SessionState, &ConfigState, "milk")            │
//! │         │                                                               │
//! │         │  Additive::from_name ─► SessionState::toggle_additive          │
//! │         ▼                                                               │
//! │  Result<OrderResponse, ApiError>                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Front-end renders the response and plays response.cues               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the session and display config
//! fn get_order(session: &SessionState, config: &ConfigState)
//!
//! // Only needs settings
//! fn get_sound_settings(settings: &SettingsState)
//! ```

pub mod menu;
pub mod order;
pub mod settings;
