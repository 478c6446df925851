//! # Sound Settings Commands
//!
//! The speaker toggle, the volume slider and the "test sound" buttons.

use barista_core::SoundCue;
use tracing::debug;

use crate::audio::{AudioPlayer, AudioSink, Tone};
use crate::error::ApiError;
use crate::state::{SettingsPatch, SettingsState, SoundSettings};

/// Gets the current sound settings.
pub fn get_sound_settings(settings: &SettingsState) -> SoundSettings {
    debug!("get_sound_settings command");
    settings.get()
}

/// Merges a partial update and persists it.
///
/// ## Errors
/// `VALIDATION_ERROR` when the volume is outside `0..=1`.
pub fn update_sound_settings(
    settings: &SettingsState,
    patch: SettingsPatch,
) -> Result<SoundSettings, ApiError> {
    debug!(?patch, "update_sound_settings command");
    Ok(settings.update(patch)?)
}

/// Plays a cue by tag so the user can hear the current volume.
///
/// Returns the tone played, or `None` while sounds are disabled.
pub fn test_sound<S: AudioSink>(
    settings: &SettingsState,
    player: &AudioPlayer<S>,
    tag: &str,
) -> Result<Option<Tone>, ApiError> {
    debug!(tag = %tag, "test_sound command");
    let cue = SoundCue::from_tag(tag).ok_or_else(|| ApiError::not_found("Sound", tag))?;
    Ok(player.play(cue, &settings.get()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::RecordingSink;
    use crate::error::ErrorCode;
    use crate::state::SettingsStore;

    #[test]
    fn test_update_and_get() {
        let settings = SettingsState::load(SettingsStore::in_memory());
        let updated = update_sound_settings(
            &settings,
            SettingsPatch {
                enabled: None,
                volume: Some(0.8),
            },
        )
        .unwrap();

        assert!(updated.enabled);
        assert_eq!(get_sound_settings(&settings).volume, 0.8);
    }

    #[test]
    fn test_out_of_range_volume() {
        let settings = SettingsState::load(SettingsStore::in_memory());
        let err = update_sound_settings(
            &settings,
            SettingsPatch {
                enabled: None,
                volume: Some(1.5),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_sound_respects_mute() {
        let settings = SettingsState::load(SettingsStore::in_memory());
        let player = AudioPlayer::new(RecordingSink::default());

        assert!(test_sound(&settings, &player, "click").unwrap().is_some());

        update_sound_settings(
            &settings,
            SettingsPatch {
                enabled: Some(false),
                volume: None,
            },
        )
        .unwrap();
        assert!(test_sound(&settings, &player, "add").unwrap().is_none());
        assert_eq!(player.sink().cues(), vec![SoundCue::Click]);

        let err = test_sound(&settings, &player, "beep").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
