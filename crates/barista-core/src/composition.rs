//! # Composition Engine
//!
//! A [`Composition`] is the per-session order: one base beverage and an
//! ordered list of additives. It is an immutable value; every operation
//! returns a new one.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Composition Operations                               │
//! │                                                                         │
//! │  UI event              Operation              Outcome                   │
//! │  ────────              ─────────              ───────                   │
//! │                                                                         │
//! │  Pick base ──────────► select_base() ───────► BaseChange               │
//! │                                               (composition, dropped)    │
//! │                                                                         │
//! │  Click add-on ───────► toggle_additive() ───► Added                    │
//! │                                               Removed (truncated tail)  │
//! │                                               Rejected (unchanged)      │
//! │                                                                         │
//! │  Any change ─────────► derive_result() ─────► ComposedResult           │
//! │                        (pure fold)            description, cost, trace  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No additive in the sequence is incompatible with the base
//! - No additive appears twice
//! - Sequence order is application order
//!
//! ## Truncation on remove
//! Removing the additive at position `i` drops it *and every additive
//! applied after it*; the result has length `i`. Unwrapping an inner
//! decorator takes every wrapper stacked on top of it along with it.
//! ```text
//! [Milk, Sugar, Caramel]  toggle Sugar  →  [Milk]
//! ```

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::catalog::{Additive, Beverage};
use crate::cue::SoundCue;
use crate::error::CoreResult;
use crate::money::Money;
use crate::trace::StructuralTrace;
use crate::MAX_FILL_LEVEL;

// =============================================================================
// Composition
// =============================================================================

/// A base beverage plus additives in application order.
///
/// Fields are private: this module is the only writer, which is what keeps
/// the compatibility and uniqueness invariants true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    base: Beverage,
    additives: Vec<Additive>,
}

impl Composition {
    /// A bare base with no additives.
    pub fn new(base: Beverage) -> Self {
        Composition {
            base,
            additives: Vec::new(),
        }
    }

    #[inline]
    pub fn base(&self) -> Beverage {
        self.base
    }

    /// Additives in application order (first element is innermost).
    #[inline]
    pub fn additives(&self) -> &[Additive] {
        &self.additives
    }

    pub fn contains(&self, additive: Additive) -> bool {
        self.additives.contains(&additive)
    }

    /// Cup fill level: 1 for the bare base, one more per additive, capped.
    pub fn fill_level(&self) -> u8 {
        let level = self.additives.len().saturating_add(1);
        level.min(usize::from(MAX_FILL_LEVEL)) as u8
    }

    /// Switches the base beverage.
    ///
    /// Additives survive in order up to the first one that cannot wrap the
    /// new base; that one and everything applied after it are dropped, the
    /// same truncation a manual removal would perform.
    ///
    /// ```rust
    /// use barista_core::{Additive, Beverage, Composition};
    ///
    /// let order = Composition::new(Beverage::Latte)
    ///     .toggle_additive(Additive::Milk).into_composition()
    ///     .toggle_additive(Additive::WhippedCream).into_composition()
    ///     .toggle_additive(Additive::Sugar).into_composition();
    ///
    /// let change = order.select_base(Beverage::BlackCoffee);
    /// assert_eq!(change.composition.additives(), &[Additive::Milk]);
    /// assert_eq!(change.dropped, vec![Additive::WhippedCream, Additive::Sugar]);
    /// ```
    pub fn select_base(&self, base: Beverage) -> BaseChange {
        let keep = self
            .additives
            .iter()
            .position(|a| !a.is_compatible_with(base))
            .unwrap_or(self.additives.len());

        let composition = Composition {
            base,
            additives: self.additives[..keep].to_vec(),
        };

        BaseChange {
            composition,
            dropped: self.additives[keep..].to_vec(),
        }
    }

    /// [`Composition::select_base`] keyed by catalog name.
    pub fn select_base_by_name(&self, name: &str) -> CoreResult<BaseChange> {
        Ok(self.select_base(Beverage::from_name(name)?))
    }

    /// Adds an absent additive, or removes a present one together with
    /// everything applied after it.
    ///
    /// An additive that cannot wrap the current base is refused and the
    /// composition is returned unchanged inside [`ToggleOutcome::Rejected`].
    pub fn toggle_additive(&self, additive: Additive) -> ToggleOutcome {
        if !additive.is_compatible_with(self.base) {
            return ToggleOutcome::Rejected {
                composition: self.clone(),
                rejection: IncompatibleAdditive {
                    additive,
                    base: self.base,
                },
            };
        }

        match self.additives.iter().position(|a| *a == additive) {
            Some(index) => ToggleOutcome::Removed {
                composition: Composition {
                    base: self.base,
                    additives: self.additives[..index].to_vec(),
                },
                removed: self.additives[index..].to_vec(),
            },
            None => {
                let mut additives = self.additives.clone();
                additives.push(additive);
                ToggleOutcome::Added {
                    composition: Composition {
                        base: self.base,
                        additives,
                    },
                    additive,
                    previous_fill_level: self.fill_level(),
                }
            }
        }
    }

    /// [`Composition::toggle_additive`] keyed by registry name.
    pub fn toggle_additive_by_name(&self, name: &str) -> CoreResult<ToggleOutcome> {
        Ok(self.toggle_additive(Additive::from_name(name)?))
    }

    /// Base description with each additive's suffix appended in order.
    pub fn description(&self) -> String {
        self.additives
            .iter()
            .fold(self.base.name().to_string(), |mut description, additive| {
                description.push_str(&additive.description_suffix());
                description
            })
    }

    /// Base price plus every price delta, summed in application order.
    pub fn cost(&self) -> Money {
        self.additives
            .iter()
            .fold(self.base.base_price(), |cost, additive| cost + additive.price_delta())
    }

    /// Nested notation and tree listing for this composition.
    pub fn trace_structure(&self) -> StructuralTrace {
        StructuralTrace::build(self.base, &self.additives)
    }

    /// Everything the order card and structure panel display.
    ///
    /// Pure: identical compositions always yield identical results.
    pub fn derive_result(&self) -> ComposedResult {
        ComposedResult {
            description: self.description(),
            cost: self.cost(),
            trace: self.trace_structure(),
        }
    }
}

/// Sessions open on a plain black coffee.
impl Default for Composition {
    fn default() -> Self {
        Composition::new(Beverage::BlackCoffee)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of switching the base beverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseChange {
    pub composition: Composition,
    /// Additives removed because the new base cannot carry them, in order.
    pub dropped: Vec<Additive>,
}

impl BaseChange {
    /// Whether the caller should warn that add-ons were removed.
    pub fn dropped_any(&self) -> bool {
        !self.dropped.is_empty()
    }

    /// Always just `select`: a base change keeps a prefix of the
    /// additives, so the cup never gets fuller.
    pub fn cues(&self) -> Vec<SoundCue> {
        vec![SoundCue::Select]
    }
}

/// An additive that was refused because it cannot wrap the current base.
///
/// This is a reported condition, not an error: the composition is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct IncompatibleAdditive {
    pub additive: Additive,
    pub base: Beverage,
}

impl fmt::Display for IncompatibleAdditive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be added to {}", self.additive, self.base)
    }
}

/// Result of toggling an additive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The additive was appended as the new outermost wrapper.
    Added {
        composition: Composition,
        additive: Additive,
        previous_fill_level: u8,
    },
    /// The additive and every wrapper applied after it were removed.
    /// `removed[0]` is the toggled additive.
    Removed {
        composition: Composition,
        removed: Vec<Additive>,
    },
    /// The additive cannot wrap the current base; nothing changed.
    Rejected {
        composition: Composition,
        rejection: IncompatibleAdditive,
    },
}

impl ToggleOutcome {
    pub fn composition(&self) -> &Composition {
        match self {
            ToggleOutcome::Added { composition, .. }
            | ToggleOutcome::Removed { composition, .. }
            | ToggleOutcome::Rejected { composition, .. } => composition,
        }
    }

    pub fn into_composition(self) -> Composition {
        match self {
            ToggleOutcome::Added { composition, .. }
            | ToggleOutcome::Removed { composition, .. }
            | ToggleOutcome::Rejected { composition, .. } => composition,
        }
    }

    pub fn rejection(&self) -> Option<&IncompatibleAdditive> {
        match self {
            ToggleOutcome::Rejected { rejection, .. } => Some(rejection),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection().is_some()
    }

    /// `add` / `remove` / `error`, plus `pour` when an add filled the cup.
    pub fn cues(&self) -> Vec<SoundCue> {
        match self {
            ToggleOutcome::Added {
                composition,
                previous_fill_level,
                ..
            } => {
                let mut cues = vec![SoundCue::Add];
                if composition.fill_level() > *previous_fill_level {
                    cues.push(SoundCue::Pour);
                }
                cues
            }
            ToggleOutcome::Removed { .. } => vec![SoundCue::Remove],
            ToggleOutcome::Rejected { .. } => vec![SoundCue::Error],
        }
    }
}

// =============================================================================
// Composed Result
// =============================================================================

/// Derived view of a composition, recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComposedResult {
    pub description: String,
    pub cost: Money,
    pub trace: StructuralTrace,
}

// =============================================================================
// Unit Tests
// =============================================================================
