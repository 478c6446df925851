//! # Sound Cues
//!
//! Discrete tags the engine attaches to operation outcomes. What a tag
//! sounds like is decided by the audio collaborator in the host crate.
//!
//! ```text
//! select_base ─────────────► Select
//! toggle_additive  added ──► Add     (+ Pour if the cup got fuller)
//!                  removed ► Remove
//!                  rejected► Error
//! UI button press ─────────► Click   (host only)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Click,
    Add,
    Remove,
    Error,
    Select,
    Pour,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Click,
        SoundCue::Add,
        SoundCue::Remove,
        SoundCue::Error,
        SoundCue::Select,
        SoundCue::Pour,
    ];

    /// Lowercase tag, identical to the serialized form.
    pub const fn tag(&self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Add => "add",
            SoundCue::Remove => "remove",
            SoundCue::Error => "error",
            SoundCue::Select => "select",
            SoundCue::Pour => "pour",
        }
    }

    /// Parses a tag, ignoring case.
    pub fn from_tag(tag: &str) -> Option<SoundCue> {
        let tag = tag.trim();
        SoundCue::ALL.into_iter().find(|c| c.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for cue in SoundCue::ALL {
            assert_eq!(SoundCue::from_tag(cue.tag()), Some(cue));
            assert_eq!(serde_json::to_string(&cue).unwrap(), format!("\"{}\"", cue.tag()));
        }
        assert_eq!(SoundCue::from_tag("POUR"), Some(SoundCue::Pour));
        assert_eq!(SoundCue::from_tag("beep"), None);
    }
}
