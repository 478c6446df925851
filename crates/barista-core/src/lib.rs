//! # barista-core: Pure Composition Engine for Barista
//!
//! This crate is the **heart** of Barista. It owns every rule that decides
//! what a customized coffee *is*: which base was chosen, which add-ons wrap
//! it, what it costs, how it is described and how its wrapper structure
//! looks when printed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Barista Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (barista-studio)                  │   │
//! │  │   Menu ──► Base picker ──► Add-on toggles ──► Order card/tree  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ select_base / toggle_additive          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ barista-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │  catalog  │  │ composition │  │   trace   │  │  money   │  │   │
//! │  │   │ Beverage  │  │ Composition │  │ notation  │  │  Money   │  │   │
//! │  │   │ Additive  │  │ Outcomes    │  │ tree      │  │          │  │   │
//! │  │   └───────────┘  └─────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO AUDIO • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Base beverages and the additive registry
//! - [`composition`] - The composition engine (select, toggle, derive)
//! - [`trace`] - Nested-wrapper notation and tree listing
//! - [`cue`] - Sound cue tags emitted per operation outcome
//! - [`money`] - Integer-cent money type
//! - [`error`] - Domain error types
//! - [`validation`] - Range and format checks for host-supplied values
//!
//! ## Decoration as a fold
//! A composed coffee is not a chain of wrapper objects. It is a value
//! `(base, [additive...])`, and every observable property is a left fold
//! over the additive sequence in application order.
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::{Additive, Beverage, Composition};
//!
//! let order = Composition::new(Beverage::Latte)
//!     .toggle_additive(Additive::Milk)
//!     .into_composition()
//!     .toggle_additive(Additive::Sugar)
//!     .into_composition();
//!
//! let result = order.derive_result();
//! assert_eq!(result.description, "Latte + Milk + Sugar");
//! assert_eq!(result.cost.fixed(), "3.80");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod composition;
pub mod cue;
pub mod error;
pub mod money;
pub mod trace;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Additive, Beverage, Glyph};
pub use composition::{BaseChange, ComposedResult, Composition, IncompatibleAdditive, ToggleOutcome};
pub use cue::SoundCue;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use trace::{NodeKind, StructuralTrace, TreeNode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest fill level the cup can show.
///
/// The cup starts at 1 for the bare base and gains a level per add-on,
/// capped here.
pub const MAX_FILL_LEVEL: u8 = 5;

/// Indentation unit used by the nested notation, one per nesting depth.
pub const NOTATION_INDENT: &str = "  ";
