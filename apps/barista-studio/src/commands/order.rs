//! # Order Commands
//!
//! Base selection and add-on toggles.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────────┐  toggle_additive   ┌──────────────────────────┐      │
//! │  │ Black Coffee │ ─────────────────► │ Black Coffee + Milk      │      │
//! │  │   (start)    │ ◄───────────────── │                          │      │
//! │  └──────────────┘  toggle (remove)   └──────────────────────────┘      │
//! │         │                                       │                       │
//! │    select_base                             select_base                  │
//! │         ▼                                       ▼                       │
//! │  ┌──────────────┐                    ┌──────────────────────────┐      │
//! │  │    Latte     │                    │ Latte + Milk             │      │
//! │  └──────────────┘                    └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barista_core::{Additive, Beverage, Glyph, SoundCue, ToggleOutcome, TreeNode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, Highlight, Session, SessionState};

/// Severity of a notice shown next to the order card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A one-off message about the last action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// One add-on badge on the order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditiveBadge {
    pub additive: Additive,
    pub glyph: Glyph,
}

/// Everything the order card and structure panel need.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub base: Beverage,
    pub base_glyph: Glyph,
    pub cup_glyph: Glyph,
    pub liquid_shade: String,
    pub additives: Vec<AdditiveBadge>,
    pub description: String,
    pub cost: String,
    pub cost_cents: i64,
    pub notation: String,
    pub tree: Vec<TreeNode>,
    pub fill_level: u8,
    pub highlight: Highlight,
    /// Sound cues triggered by this action, in play order.
    pub cues: Vec<SoundCue>,
    pub notice: Option<Notice>,
}

impl OrderResponse {
    fn from_session(session: &Session, config: &ConfigState) -> Self {
        let composition = session.composition();
        let base = composition.base();
        let result = composition.derive_result();

        OrderResponse {
            base,
            base_glyph: base.glyph(),
            cup_glyph: base.cup_glyph(),
            liquid_shade: base.liquid_shade().to_string(),
            additives: composition
                .additives()
                .iter()
                .map(|a| AdditiveBadge {
                    additive: *a,
                    glyph: a.glyph(),
                })
                .collect(),
            description: result.description,
            cost: config.format_currency(result.cost),
            cost_cents: result.cost.cents(),
            notation: result.trace.notation,
            tree: result.trace.tree,
            fill_level: composition.fill_level(),
            highlight: session.highlight(),
            cues: Vec::new(),
            notice: None,
        }
    }

    fn with_cues(mut self, cues: Vec<SoundCue>) -> Self {
        self.cues = cues;
        self
    }

    fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}

/// Gets the current order.
pub fn get_order(session: &SessionState, config: &ConfigState) -> OrderResponse {
    debug!("get_order command");
    session.with_session(|s| OrderResponse::from_session(s, config))
}

/// Switches the base beverage.
///
/// ## Behavior
/// - Add-ons the new base cannot carry are dropped (with everything after
///   them) and reported in a warning notice
/// - Cue: `select`
pub fn select_base(
    session: &SessionState,
    config: &ConfigState,
    name: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(name = %name, "select_base command");
    let base = Beverage::from_name(name)?;

    let change = session.select_base(base);
    let notice = change.dropped_any().then(|| {
        let names: Vec<&str> = change.dropped.iter().map(|a| a.name()).collect();
        warn!(base = %base, dropped = ?names, "Add-ons removed by base change");
        Notice {
            level: NoticeLevel::Warning,
            message: format!("Removed for {}: {}", base, names.join(", ")),
        }
    });

    Ok(get_order(session, config)
        .with_cues(change.cues())
        .with_notice(notice))
}

/// Adds or removes an add-on.
///
/// ## Behavior
/// - Absent: appended as the outermost wrapper (cue `add`, maybe `pour`)
/// - Present: it and every add-on after it are removed (cue `remove`)
/// - Incompatible with the base: nothing changes, error notice and cue
pub fn toggle_additive(
    session: &SessionState,
    config: &ConfigState,
    name: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(name = %name, "toggle_additive command");
    let additive = Additive::from_name(name)?;

    let outcome = session.toggle_additive(additive);
    let notice = match &outcome {
        ToggleOutcome::Rejected { rejection, .. } => {
            warn!(%rejection, "Incompatible add-on refused");
            Some(Notice {
                level: NoticeLevel::Error,
                message: rejection.to_string(),
            })
        }
        ToggleOutcome::Removed { removed, .. } if removed.len() > 1 => {
            let names: Vec<&str> = removed[1..].iter().map(|a| a.name()).collect();
            Some(Notice {
                level: NoticeLevel::Warning,
                message: format!("Also removed: {}", names.join(", ")),
            })
        }
        _ => None,
    };

    Ok(get_order(session, config)
        .with_cues(outcome.cues())
        .with_notice(notice))
}
