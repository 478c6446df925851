//! # Terminal Rendering
//!
//! Plain-text views of command responses. Everything here is a pure
//! function of the response, so the output is easy to assert on.
//!
//! ## Order Card Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🥃 Latte  [###..]  (amber-300)                                         │
//! │  add-ons: 🥛 Milk, 🥤 Whipped Cream                                     │
//! │  removed: 🧂 Sugar                   ◄── only right after a removal     │
//! │  Latte + Milk + Whipped Cream                                           │
//! │  Total: $4.20                                                           │
//! │                                                                         │
//! │  new WhippedCreamDecorator(          ◄── notation                       │
//! │    new MilkDecorator(                                                   │
//! │      new Latte()                                                        │
//! │    )                                                                    │
//! │  )                                                                      │
//! │                                                                         │
//! │  🥤 Whipped Cream Decorator          ◄── structure, one level per line  │
//! │    🥛 Milk Decorator                                                    │
//! │      🥤 Latte                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A just-added badge carries a `*`. `Highlight::code_visible` is not
//! rendered: it drives the notation fade in a graphical front-end, and the
//! terminal prints each response once.

use std::fmt::Write;

use barista_core::{Glyph, MAX_FILL_LEVEL};

use crate::commands::menu::{AdditiveEntry, BeverageEntry};
use crate::commands::order::{NoticeLevel, OrderResponse};
use crate::error::ApiError;
use crate::state::SoundSettings;

/// Terminal symbol for a glyph token.
pub fn glyph_symbol(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Coffee => "☕",
        Glyph::CupSoda => "🥤",
        Glyph::GlassWater => "🥃",
        Glyph::Milk => "🥛",
        Glyph::Sugar => "🧂",
        Glyph::Candy => "🍬",
        Glyph::Sparkles => "✨",
    }
}

/// `[###..]` for fill level 3.
pub fn fill_bar(level: u8) -> String {
    let level = level.min(MAX_FILL_LEVEL) as usize;
    format!(
        "[{}{}]",
        "#".repeat(level),
        ".".repeat(MAX_FILL_LEVEL as usize - level)
    )
}

/// Renders the order card, notation, structure and any notice.
pub fn order(order: &OrderResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}  {}  ({})",
        glyph_symbol(order.cup_glyph),
        order.base,
        fill_bar(order.fill_level),
        order.liquid_shade
    );

    if !order.additives.is_empty() {
        let badges: Vec<String> = order
            .additives
            .iter()
            .map(|badge| {
                let marker = if order.highlight.just_added == Some(badge.additive) {
                    "*"
                } else {
                    ""
                };
                format!("{} {}{}", glyph_symbol(badge.glyph), badge.additive, marker)
            })
            .collect();
        let _ = writeln!(out, "add-ons: {}", badges.join(", "));
    }

    if let Some(removed) = order.highlight.just_removed {
        let _ = writeln!(out, "removed: {} {}", glyph_symbol(removed.glyph()), removed);
    }

    let _ = writeln!(out, "{}", order.description);
    let _ = writeln!(out, "Total: {}", order.cost);
    out.push('\n');
    out.push_str(&order.notation);
    out.push_str("\n\n");

    for node in &order.tree {
        let _ = writeln!(
            out,
            "{}{} {}",
            "  ".repeat(node.depth as usize),
            glyph_symbol(node.glyph),
            node.label
        );
    }

    if let Some(notice) = &order.notice {
        let prefix = match notice.level {
            NoticeLevel::Warning => "note",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "{}: {}", prefix, notice.message);
    }

    out
}

/// Renders the base picker and add-on panel.
pub fn menu(beverages: &[BeverageEntry], additives: &[AdditiveEntry]) -> String {
    let mut out = String::from("Bases:\n");
    for entry in beverages {
        let mark = if entry.selected { "(*)" } else { "( )" };
        let _ = writeln!(
            out,
            "  {} {} {:<14}{}",
            mark,
            glyph_symbol(entry.cup_glyph),
            entry.beverage.name(),
            entry.price
        );
    }

    out.push_str("Add-ons:\n");
    for entry in additives {
        let mark = match (entry.selected, entry.disabled) {
            (_, true) => "[-]",
            (true, false) => "[x]",
            (false, false) => "[ ]",
        };
        let _ = writeln!(
            out,
            "  {} {} {:<14}{}",
            mark,
            glyph_symbol(entry.glyph),
            entry.additive.name(),
            entry.price_delta
        );
    }
    out
}

/// One-line sound settings summary.
pub fn sound_settings(settings: &SoundSettings) -> String {
    let state = if settings.enabled { "on" } else { "off" };
    format!(
        "Sound: {}, volume {}%\n",
        state,
        (settings.volume * 100.0).round() as u32
    )
}

pub fn error(err: &ApiError) -> String {
    format!("error: {}\n", err.message)
}

pub fn help() -> String {
    [
        "Commands:",
        "  menu                 list bases and add-ons",
        "  show                 show the current order",
        "  base <name>          switch the base beverage",
        "  toggle <name>        add or remove an add-on",
        "  sound on|off         enable or mute sounds",
        "  volume <0..1>        set the sound volume",
        "  test <cue>           play click, add, remove, error, select or pour",
        "  help                 this list",
        "  quit                 exit",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{menu as menu_cmd, order as order_cmd};
    use crate::state::{ConfigState, SessionState};

    fn config() -> ConfigState {
        ConfigState {
            currency_symbol: "$".to_string(),
            settings_path: None,
        }
    }

    #[test]
    fn test_fill_bar() {
        assert_eq!(fill_bar(1), "[#....]");
        assert_eq!(fill_bar(5), "[#####]");
        assert_eq!(fill_bar(9), "[#####]");
    }

    #[test]
    fn test_order_card() {
        let session = SessionState::new();
        let config = config();
        order_cmd::select_base(&session, &config, "Latte").unwrap();
        let response = order_cmd::toggle_additive(&session, &config, "Milk").unwrap();

        let text = order(&response);
        assert!(text.starts_with("🥃 Latte  [##...]"));
        assert!(text.contains("add-ons: 🥛 Milk*\n"));
        assert!(text.contains("Latte + Milk\nTotal: $3.50\n"));
        assert!(text.contains("new MilkDecorator(\n  new Latte()\n)"));
        assert!(text.contains("🥛 Milk Decorator\n  🥤 Latte\n"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn test_removal_is_marked() {
        let session = SessionState::new();
        let config = config();
        order_cmd::toggle_additive(&session, &config, "Sugar").unwrap();
        let response = order_cmd::toggle_additive(&session, &config, "Sugar").unwrap();

        let text = order(&response);
        assert!(text.contains("removed: 🧂 Sugar\n"));
        assert!(!text.contains("add-ons:"));

        let text = order(&order_cmd::toggle_additive(&session, &config, "Milk").unwrap());
        assert!(!text.contains("removed:"));
    }

    #[test]
    fn test_rejection_notice_is_shown() {
        let session = SessionState::new();
        let response = order_cmd::toggle_additive(&session, &config(), "Whipped Cream").unwrap();

        let text = order(&response);
        assert!(text.ends_with("error: Whipped Cream cannot be added to Black Coffee\n"));
    }

    #[test]
    fn test_menu_marks() {
        let session = SessionState::new();
        let config = config();
        session.toggle_additive(barista_core::Additive::Sugar);

        let text = menu(
            &menu_cmd::list_beverages(&session, &config),
            &menu_cmd::list_additives(&session, &config),
        );
        assert!(text.contains("(*) ☕ Black Coffee  $2.00"));
        assert!(text.contains("[x] 🧂 Sugar         +$0.30"));
        assert!(text.contains("[-] 🥤 Whipped Cream +$0.70"));
    }

    #[test]
    fn test_sound_settings_line() {
        let line = sound_settings(&SoundSettings {
            enabled: false,
            volume: 0.25,
        });
        assert_eq!(line, "Sound: off, volume 25%\n");
    }
}
