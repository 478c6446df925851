//! # Sound Settings State
//!
//! The only state that survives between sessions: whether sounds play and
//! how loud.
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sound Settings Lifecycle                             │
//! │                                                                         │
//! │  Startup ──► SettingsStore::load()                                     │
//! │               ├── file missing      ──► defaults {enabled, 0.5}        │
//! │               ├── unreadable / bad  ──► defaults + warn!               │
//! │               └── ok                ──► stored values                  │
//! │                                                                         │
//! │  Toggle / slider ──► SettingsState::update(patch)                      │
//! │               ├── validate volume (0..=1)                              │
//! │               ├── apply in memory                                      │
//! │               └── SettingsStore::save()  (failure: warn!, keep going)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use barista_core::validation::validate_volume;
use barista_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reading or writing the settings file.
///
/// Never shown to the user; callers fall back to defaults or log.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("settings file is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings file holds invalid values: {0}")]
    Invalid(#[from] ValidationError),
}

/// Persisted sound preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub enabled: bool,
    /// Playback volume, `0.0 ..= 1.0`.
    pub volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        SoundSettings {
            enabled: true,
            volume: 0.5,
        }
    }
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsPatch {
    pub enabled: Option<bool>,
    pub volume: Option<f32>,
}

impl SoundSettings {
    /// Returns these settings with `patch` merged in, after validation.
    pub fn apply(&self, patch: SettingsPatch) -> Result<SoundSettings, ValidationError> {
        if let Some(volume) = patch.volume {
            validate_volume(volume)?;
        }
        Ok(SoundSettings {
            enabled: patch.enabled.unwrap_or(self.enabled),
            volume: patch.volume.unwrap_or(self.volume),
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// JSON file backing for [`SoundSettings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        SettingsStore { path }
    }

    /// A store that never touches the file system.
    pub fn in_memory() -> Self {
        SettingsStore { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads stored settings, or `Ok(None)` if nothing was stored yet.
    pub fn try_load(&self) -> Result<Option<SoundSettings>, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let settings: SoundSettings = serde_json::from_str(&raw)?;
        validate_volume(settings.volume)?;
        Ok(Some(settings))
    }

    /// Reads stored settings, treating anything unusable as absent.
    pub fn load(&self) -> SoundSettings {
        match self.try_load() {
            Ok(Some(settings)) => {
                debug!(?settings, "Loaded sound settings");
                settings
            }
            Ok(None) => SoundSettings::default(),
            Err(e) => {
                warn!(error = %e, path = ?self.path, "Ignoring stored sound settings");
                SoundSettings::default()
            }
        }
    }

    /// Writes settings, creating the parent directory if needed.
    pub fn save(&self, settings: &SoundSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(settings)?)?;
        Ok(())
    }
}

// =============================================================================
// Managed State
// =============================================================================

/// Current sound settings plus their store.
///
/// Passed explicitly to whatever needs it; there is no global.
#[derive(Debug)]
pub struct SettingsState {
    store: SettingsStore,
    current: Mutex<SoundSettings>,
}

impl SettingsState {
    /// Loads settings from `store` (defaults on any failure).
    pub fn load(store: SettingsStore) -> Self {
        let current = store.load();
        SettingsState {
            store,
            current: Mutex::new(current),
        }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> SoundSettings {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a patch and persists the result.
    ///
    /// Invalid values are rejected; a failed write is logged and the new
    /// settings still take effect for this session.
    pub fn update(&self, patch: SettingsPatch) -> Result<SoundSettings, ValidationError> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let updated = current.apply(patch)?;
        *current = updated;

        if let Err(e) = self.store.save(&updated) {
            warn!(error = %e, "Failed to persist sound settings");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = SoundSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.volume, 0.5);
    }

    #[test]
    fn test_apply_patch() {
        let settings = SoundSettings::default();
        let patched = settings
            .apply(SettingsPatch {
                enabled: Some(false),
                volume: None,
            })
            .unwrap();
        assert!(!patched.enabled);
        assert_eq!(patched.volume, 0.5);

        assert!(settings
            .apply(SettingsPatch {
                enabled: None,
                volume: Some(2.0),
            })
            .is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::new(Some(dir.path().join("sound-settings.json")));
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load(), SoundSettings::default());
    }

    #[test]
    fn test_malformed_file_is_default() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sound-settings.json");

        fs::write(&path, "{not json").unwrap();
        let store = SettingsStore::new(Some(path.clone()));
        assert!(matches!(store.try_load(), Err(SettingsError::Parse(_))));
        assert_eq!(store.load(), SoundSettings::default());

        fs::write(&path, r#"{"enabled":false,"volume":7}"#).unwrap();
        assert!(matches!(store.try_load(), Err(SettingsError::Invalid(_))));
        assert_eq!(store.load(), SoundSettings::default());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("sound-settings.json");

        let state = SettingsState::load(SettingsStore::new(Some(path.clone())));
        state
            .update(SettingsPatch {
                enabled: Some(false),
                volume: Some(0.25),
            })
            .unwrap();

        let reloaded = SettingsStore::new(Some(path)).load();
        assert_eq!(
            reloaded,
            SoundSettings {
                enabled: false,
                volume: 0.25,
            }
        );
    }

    #[test]
    fn test_invalid_update_keeps_current() {
        let state = SettingsState::load(SettingsStore::in_memory());
        assert!(state
            .update(SettingsPatch {
                enabled: Some(false),
                volume: Some(-1.0),
            })
            .is_err());
        assert_eq!(state.get(), SoundSettings::default());
    }
}
