//! # Barista Studio Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista Studio                                   │
//! │                                                                         │
//! │  stdin ──► input ──► studio ──► commands ──► barista-core              │
//! │                          │                                              │
//! │  stdout ◄── render ◄─────┘        stderr ◄── tracing, simulated audio  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() {
    if let Err(err) = barista_studio_lib::run().await {
        eprintln!("barista-studio: {}", err);
        std::process::exit(1);
    }
}
