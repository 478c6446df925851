//! # Session State
//!
//! Owns the current [`Composition`] and the transient highlight flags the
//! renderer uses for animation.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because animation timers run
//! as separate tokio tasks and need to clear flags after a delay.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Command               Session change          Timers scheduled         │
//! │  ───────               ──────────────          ────────────────         │
//! │                                                                         │
//! │  select_base() ──────► composition replaced ─► code_visible  (100 ms)  │
//! │                                                                         │
//! │  toggle (added) ─────► composition replaced ─► just_added    (800 ms)  │
//! │                        just_added = Some       code_visible  (100 ms)  │
//! │                                                                         │
//! │  toggle (removed) ───► composition replaced ─► just_removed  (500 ms)  │
//! │                        just_removed = Some     code_visible  (100 ms)  │
//! │                                                                         │
//! │  toggle (rejected) ──► nothing                 none                     │
//! │                                                                         │
//! │  Timers only touch highlight flags, never the composition. A timer     │
//! │  whose generation is stale does nothing.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use barista_core::{Additive, BaseChange, Beverage, Composition, ToggleOutcome};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, trace};
use uuid::Uuid;

/// How long a freshly added add-on pulses.
pub const ADDED_HIGHLIGHT: Duration = Duration::from_millis(800);

/// How long a removed add-on shakes.
pub const REMOVED_HIGHLIGHT: Duration = Duration::from_millis(500);

/// Delay before the regenerated notation fades back in.
pub const CODE_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Transient display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub just_added: Option<Additive>,
    pub just_removed: Option<Additive>,
    pub code_visible: bool,
    #[serde(skip)]
    generation: u64,
}

impl Default for Highlight {
    fn default() -> Self {
        Highlight {
            just_added: None,
            just_removed: None,
            code_visible: true,
            generation: 0,
        }
    }
}

impl Highlight {
    /// Starts a new animation round and returns its generation.
    fn restart(&mut self, just_added: Option<Additive>, just_removed: Option<Additive>) -> u64 {
        self.generation += 1;
        self.just_added = just_added;
        self.just_removed = just_removed;
        self.code_visible = false;
        self.generation
    }
}

/// One customer's order in progress.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    composition: Composition,
    highlight: Highlight,
}

impl Session {
    pub fn new(base: Beverage) -> Self {
        Session {
            id: Uuid::new_v4(),
            composition: Composition::new(base),
            highlight: Highlight::default(),
        }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Composition::default().base())
    }
}

/// Shared session handle.
///
/// The composition is only replaced through [`SessionState::select_base`]
/// and [`SessionState::toggle_additive`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.lock())
    }

    /// Switches the base and starts the reveal animation.
    pub fn select_base(&self, base: Beverage) -> BaseChange {
        let mut session = self.lock();
        let change = session.composition.select_base(base);

        session.composition = change.composition.clone();
        let generation = session.highlight.restart(None, None);
        debug!(
            session_id = %session.id,
            base = %base,
            dropped = ?change.dropped,
            "Base selected"
        );
        drop(session);

        self.schedule(CODE_REVEAL_DELAY, generation, |h| h.code_visible = true);
        change
    }

    /// Toggles an additive; rejected toggles leave the session untouched.
    pub fn toggle_additive(&self, additive: Additive) -> ToggleOutcome {
        let mut session = self.lock();
        let outcome = session.composition.toggle_additive(additive);

        let (generation, highlight_for) = match &outcome {
            ToggleOutcome::Rejected { rejection, .. } => {
                debug!(session_id = %session.id, %rejection, "Toggle rejected");
                return outcome;
            }
            ToggleOutcome::Added { .. } => (session.highlight.restart(Some(additive), None), ADDED_HIGHLIGHT),
            ToggleOutcome::Removed { .. } => (session.highlight.restart(None, Some(additive)), REMOVED_HIGHLIGHT),
        };

        session.composition = outcome.composition().clone();
        debug!(
            session_id = %session.id,
            additive = %additive,
            additives = ?session.composition.additives(),
            "Additive toggled"
        );
        drop(session);

        self.schedule(CODE_REVEAL_DELAY, generation, |h| h.code_visible = true);
        self.schedule(highlight_for, generation, |h| {
            h.just_added = None;
            h.just_removed = None;
        });
        outcome
    }

    /// Fire-and-forget flag reset. Outside a tokio runtime the flags simply
    /// stay until the next change.
    fn schedule(&self, delay: Duration, generation: u64, clear: fn(&mut Highlight)) {
        let Ok(handle) = Handle::try_current() else {
            trace!("No runtime; highlight timer skipped");
            return;
        };

        let session = Arc::clone(&self.session);
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
            if session.highlight.generation == generation {
                clear(&mut session.highlight);
            }
        });
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
