//! # Studio
//!
//! Bundles the state types and dispatches parsed commands to the command
//! functions, playing whatever cues a response carries.
//!
//! ```text
//! stdin line ──► input::parse ──► Studio::handle ──► commands::* ──► render::*
//!                                       │
//!                                       └──► AudioPlayer::play_all(response.cues)
//! ```

use tracing::debug;

use crate::audio::{AudioPlayer, AudioSink, LogSink};
use crate::commands::{menu, order, settings};
use crate::error::ApiError;
use crate::input::Command;
use crate::render;
use crate::state::{ConfigState, SessionState, SettingsPatch, SettingsState, SettingsStore};

/// What the front-end should print, and whether to stop reading input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: String) -> Self {
        Reply { text, quit: false }
    }
}

pub struct Studio<S: AudioSink = LogSink> {
    config: ConfigState,
    session: SessionState,
    settings: SettingsState,
    player: AudioPlayer<S>,
}

impl Studio<LogSink> {
    /// Builds a studio from configuration, loading persisted sound settings.
    pub fn from_config(config: ConfigState) -> Self {
        let store = SettingsStore::new(config.settings_path.clone());
        Studio::new(config, SettingsState::load(store), AudioPlayer::new(LogSink))
    }
}

impl<S: AudioSink> Studio<S> {
    pub fn new(config: ConfigState, settings: SettingsState, player: AudioPlayer<S>) -> Self {
        Studio {
            config,
            session: SessionState::new(),
            settings,
            player,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn player(&self) -> &AudioPlayer<S> {
        &self.player
    }

    /// Current order, rendered.
    pub fn show(&self) -> String {
        render::order(&order::get_order(&self.session, &self.config))
    }

    /// Runs one command. Command errors become printable text.
    pub fn handle(&self, command: Command) -> Reply {
        debug!(?command, "Handling command");
        match self.dispatch(command) {
            Ok(reply) => reply,
            Err(err) => Reply::text(render::error(&err)),
        }
    }

    fn dispatch(&self, command: Command) -> Result<Reply, ApiError> {
        let text = match command {
            Command::Quit => {
                return Ok(Reply {
                    text: String::new(),
                    quit: true,
                })
            }
            Command::Help => render::help(),
            Command::Show => self.show(),
            Command::Menu => render::menu(
                &menu::list_beverages(&self.session, &self.config),
                &menu::list_additives(&self.session, &self.config),
            ),
            Command::Base(name) => {
                let response = order::select_base(&self.session, &self.config, &name)?;
                self.player.play_all(&response.cues, &self.settings.get());
                render::order(&response)
            }
            Command::Toggle(name) => {
                let response = order::toggle_additive(&self.session, &self.config, &name)?;
                self.player.play_all(&response.cues, &self.settings.get());
                render::order(&response)
            }
            Command::Sound(enabled) => {
                let updated = settings::update_sound_settings(
                    &self.settings,
                    SettingsPatch {
                        enabled: Some(enabled),
                        volume: None,
                    },
                )?;
                render::sound_settings(&updated)
            }
            Command::Volume(volume) => {
                let updated = settings::update_sound_settings(
                    &self.settings,
                    SettingsPatch {
                        enabled: None,
                        volume: Some(volume),
                    },
                )?;
                render::sound_settings(&updated)
            }
            Command::Test(tag) => {
                settings::test_sound(&self.settings, &self.player, &tag)?;
                render::sound_settings(&settings::get_sound_settings(&self.settings))
            }
        };
        Ok(Reply::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::RecordingSink;
    use crate::input::parse;
    use barista_core::{Additive, SoundCue};

    fn studio() -> Studio<RecordingSink> {
        let config = ConfigState {
            currency_symbol: "$".to_string(),
            settings_path: None,
        };
        Studio::new(
            config,
            SettingsState::load(SettingsStore::in_memory()),
            AudioPlayer::new(RecordingSink::default()),
        )
    }

    fn run(studio: &Studio<RecordingSink>, line: &str) -> Reply {
        studio.handle(parse(line).unwrap())
    }

    #[test]
    fn test_toggle_plays_cues() {
        let studio = studio();
        let reply = run(&studio, "toggle milk");

        assert!(!reply.quit);
        assert!(reply.text.contains("Total: $2.50"));
        assert_eq!(studio.player().sink().cues(), vec![SoundCue::Add, SoundCue::Pour]);
    }

    #[test]
    fn test_muted_studio_is_silent() {
        let studio = studio();
        run(&studio, "sound off");
        run(&studio, "base latte");
        run(&studio, "toggle whipped cream");

        assert!(studio.player().sink().cues().is_empty());
        studio.session().with_session(|s| {
            assert_eq!(s.composition().additives(), &[Additive::WhippedCream]);
        });
    }

    #[test]
    fn test_errors_become_text() {
        let studio = studio();
        assert_eq!(run(&studio, "toggle honey").text, "error: Additive not found: honey\n");
        assert!(run(&studio, "volume 3").text.starts_with("error: "));
        assert_eq!(run(&studio, "test click").text, "Sound: on, volume 50%\n");
        assert_eq!(studio.player().sink().cues(), vec![SoundCue::Click]);
    }

    #[test]
    fn test_quit() {
        let studio = studio();
        assert!(run(&studio, "quit").quit);
    }
}
