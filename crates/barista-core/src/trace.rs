//! # Structural Trace
//!
//! Two renderings of the same wrapper structure, consumed by the
//! "Decorator Structure" panel.
//!
//! ## Nested notation
//! The base is innermost; each additive wraps everything applied before it,
//! so the most recently toggled additive is the outermost call:
//! ```text
//! Latte + [Milk, Sugar]
//!
//! new SugarDecorator(
//!   new MilkDecorator(
//!     new Latte()
//!   )
//! )
//! ```
//!
//! ## Tree listing
//! Outermost first, base last, depth growing by one per row:
//! ```text
//! depth 0  Sugar Decorator
//! depth 1    Milk Decorator
//! depth 2      Latte
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Additive, Beverage, Glyph};
use crate::NOTATION_INDENT;

/// Which registry a tree node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Decorator,
    Base,
}

/// One row of the tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub kind: NodeKind,
    pub label: String,
    pub glyph: Glyph,
    /// Visual nesting depth, 0 for the outermost row.
    pub depth: u32,
}

/// Both renderings of a composition's wrapper structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StructuralTrace {
    pub notation: String,
    pub tree: Vec<TreeNode>,
}

impl StructuralTrace {
    /// Builds the trace for `base` wrapped by `additives` in application order.
    pub fn build(base: Beverage, additives: &[Additive]) -> Self {
        StructuralTrace {
            notation: nested_notation(base, additives),
            tree: tree_listing(base, additives),
        }
    }
}

fn nested_notation(base: Beverage, additives: &[Additive]) -> String {
    additives
        .iter()
        .fold(format!("new {}()", base.ident()), |inner, additive| {
            let body = inner
                .lines()
                .map(|line| format!("{NOTATION_INDENT}{line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("new {}(\n{}\n)", additive.decorator_ident(), body)
        })
}

fn tree_listing(base: Beverage, additives: &[Additive]) -> Vec<TreeNode> {
    let mut tree: Vec<TreeNode> = additives
        .iter()
        .rev()
        .zip(0u32..)
        .map(|(additive, depth)| TreeNode {
            kind: NodeKind::Decorator,
            label: format!("{} Decorator", additive.name()),
            glyph: additive.glyph(),
            depth,
        })
        .collect();

    tree.push(TreeNode {
        kind: NodeKind::Base,
        label: base.name().to_string(),
        glyph: base.glyph(),
        depth: tree.len() as u32,
    });
    tree
}

// =============================================================================
// Unit Tests
// =============================================================================
