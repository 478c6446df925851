//! # Catalog
//!
//! The fixed registries of base beverages and additives.
//!
//! ## Registry Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Registries                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        Beverage              │   │        Additive              │   │
//! │  │  ──────────────────────────  │   │  ──────────────────────────  │   │
//! │  │  Black Coffee   $2.00        │   │  Milk           +$0.50       │   │
//! │  │  Espresso       $2.50        │   │  Sugar          +$0.30       │   │
//! │  │  Latte          $3.00        │   │  Whipped Cream  +$0.70  ⚠    │   │
//! │  │  Cappuccino     $3.25        │   │  Cinnamon       +$0.20       │   │
//! │  │  Americano      $2.25        │   │  Caramel        +$0.60       │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  ⚠ Whipped Cream cannot top a Black Coffee                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are closed enums, so lookups inside Rust are total. The
//! string-keyed [`Beverage::from_name`] and [`Additive::from_name`] exist
//! for names arriving from a user or a frontend.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_name;

// =============================================================================
// Glyph
// =============================================================================

/// Opaque display token. The renderer decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Coffee,
    CupSoda,
    GlassWater,
    Milk,
    Sugar,
    Candy,
    Sparkles,
}

impl Glyph {
    /// Stable token string, identical to the serialized form.
    pub const fn token(&self) -> &'static str {
        match self {
            Glyph::Coffee => "coffee",
            Glyph::CupSoda => "cup-soda",
            Glyph::GlassWater => "glass-water",
            Glyph::Milk => "milk",
            Glyph::Sugar => "sugar",
            Glyph::Candy => "candy",
            Glyph::Sparkles => "sparkles",
        }
    }
}

// =============================================================================
// Beverage
// =============================================================================

/// A base beverage: the innermost, required selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Beverage {
    #[serde(rename = "Black Coffee")]
    BlackCoffee,
    Espresso,
    Latte,
    Cappuccino,
    Americano,
}

impl Beverage {
    /// Every base beverage, in menu order.
    pub const ALL: [Beverage; 5] = [
        Beverage::BlackCoffee,
        Beverage::Espresso,
        Beverage::Latte,
        Beverage::Cappuccino,
        Beverage::Americano,
    ];

    /// Display name, also the registry key.
    pub const fn name(&self) -> &'static str {
        match self {
            Beverage::BlackCoffee => "Black Coffee",
            Beverage::Espresso => "Espresso",
            Beverage::Latte => "Latte",
            Beverage::Cappuccino => "Cappuccino",
            Beverage::Americano => "Americano",
        }
    }

    /// Price of the bare beverage.
    pub const fn base_price(&self) -> Money {
        match self {
            Beverage::BlackCoffee => Money::from_cents(200),
            Beverage::Espresso => Money::from_cents(250),
            Beverage::Latte => Money::from_cents(300),
            Beverage::Cappuccino => Money::from_cents(325),
            Beverage::Americano => Money::from_cents(225),
        }
    }

    /// Badge glyph.
    pub const fn glyph(&self) -> Glyph {
        match self {
            Beverage::Latte | Beverage::Cappuccino => Glyph::CupSoda,
            Beverage::BlackCoffee | Beverage::Espresso | Beverage::Americano => Glyph::Coffee,
        }
    }

    /// Glyph drawn inside the cup illustration.
    ///
    /// Differs from [`Beverage::glyph`] for Latte, which is served in a glass.
    pub const fn cup_glyph(&self) -> Glyph {
        match self {
            Beverage::Latte => Glyph::GlassWater,
            Beverage::Cappuccino => Glyph::CupSoda,
            Beverage::BlackCoffee | Beverage::Espresso | Beverage::Americano => Glyph::Coffee,
        }
    }

    /// Liquid colour token for the cup fill.
    pub const fn liquid_shade(&self) -> &'static str {
        match self {
            Beverage::BlackCoffee => "amber-900",
            Beverage::Espresso => "amber-950",
            Beverage::Latte => "amber-300",
            Beverage::Cappuccino => "amber-200",
            Beverage::Americano => "amber-800",
        }
    }

    /// Identifier form used in the nested notation (`BlackCoffee`).
    pub fn ident(&self) -> String {
        identifier(self.name())
    }

    /// Looks up a beverage by display name or identifier, ignoring case.
    ///
    /// ```rust
    /// use barista_core::Beverage;
    ///
    /// assert_eq!(Beverage::from_name("Black Coffee").unwrap(), Beverage::BlackCoffee);
    /// assert_eq!(Beverage::from_name("blackcoffee").unwrap(), Beverage::BlackCoffee);
    /// assert!(Beverage::from_name("Mocha").is_err());
    /// ```
    pub fn from_name(name: &str) -> CoreResult<Beverage> {
        let name = validate_name("beverage", name)?;
        Beverage::ALL
            .into_iter()
            .find(|b| matches_key(name, b.name()))
            .ok_or_else(|| CoreError::BeverageNotFound(name.to_string()))
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Additive
// =============================================================================

/// An optional modifier that wraps the base or previously applied additives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Additive {
    Milk,
    Sugar,
    #[serde(rename = "Whipped Cream")]
    WhippedCream,
    Cinnamon,
    Caramel,
}

impl Additive {
    /// Every additive, in menu order.
    pub const ALL: [Additive; 5] = [
        Additive::Milk,
        Additive::Sugar,
        Additive::WhippedCream,
        Additive::Cinnamon,
        Additive::Caramel,
    ];

    /// Display name, also the registry key.
    pub const fn name(&self) -> &'static str {
        match self {
            Additive::Milk => "Milk",
            Additive::Sugar => "Sugar",
            Additive::WhippedCream => "Whipped Cream",
            Additive::Cinnamon => "Cinnamon",
            Additive::Caramel => "Caramel",
        }
    }

    /// Amount this additive adds to the running cost.
    pub const fn price_delta(&self) -> Money {
        match self {
            Additive::Milk => Money::from_cents(50),
            Additive::Sugar => Money::from_cents(30),
            Additive::WhippedCream => Money::from_cents(70),
            Additive::Cinnamon => Money::from_cents(20),
            Additive::Caramel => Money::from_cents(60),
        }
    }

    pub const fn glyph(&self) -> Glyph {
        match self {
            Additive::Milk => Glyph::Milk,
            Additive::Sugar => Glyph::Sugar,
            Additive::WhippedCream => Glyph::CupSoda,
            Additive::Cinnamon => Glyph::Sparkles,
            Additive::Caramel => Glyph::Candy,
        }
    }

    /// Bases this additive may not be applied to.
    pub const fn incompatible_with(&self) -> &'static [Beverage] {
        match self {
            Additive::WhippedCream => &[Beverage::BlackCoffee],
            Additive::Milk | Additive::Sugar | Additive::Cinnamon | Additive::Caramel => &[],
        }
    }

    /// Whether this additive may wrap a composition built on `base`.
    pub fn is_compatible_with(&self, base: Beverage) -> bool {
        !self.incompatible_with().contains(&base)
    }

    /// Presentation predicate: the toggle is greyed out for this base.
    pub fn is_disabled(&self, base: Beverage) -> bool {
        !self.is_compatible_with(base)
    }

    /// Text appended to the running description (`" + Milk"`).
    pub fn description_suffix(&self) -> String {
        format!(" + {}", self.name())
    }

    /// Wrapper identifier used in the nested notation (`WhippedCreamDecorator`).
    pub fn decorator_ident(&self) -> String {
        format!("{}Decorator", identifier(self.name()))
    }

    /// Looks up an additive by display name or identifier, ignoring case.
    pub fn from_name(name: &str) -> CoreResult<Additive> {
        let name = validate_name("additive", name)?;
        Additive::ALL
            .into_iter()
            .find(|a| matches_key(name, a.name()))
            .ok_or_else(|| CoreError::AdditiveNotFound(name.to_string()))
    }
}

impl fmt::Display for Additive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Display name with whitespace removed.
fn identifier(name: &str) -> String {
    name.split_whitespace().collect()
}

fn matches_key(input: &str, name: &str) -> bool {
    input.eq_ignore_ascii_case(name) || input.eq_ignore_ascii_case(&identifier(name))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beverage_prices() {
        let prices: Vec<String> = Beverage::ALL.iter().map(|b| b.base_price().fixed()).collect();
        assert_eq!(prices, ["2.00", "2.50", "3.00", "3.25", "2.25"]);
    }

    #[test]
    fn test_additive_prices() {
        let prices: Vec<String> = Additive::ALL.iter().map(|a| a.price_delta().fixed()).collect();
        assert_eq!(prices, ["0.50", "0.30", "0.70", "0.20", "0.60"]);
    }

    #[test]
    fn test_names_round_trip_through_lookup() {
        for beverage in Beverage::ALL {
            assert_eq!(Beverage::from_name(beverage.name()).unwrap(), beverage);
        }
        for additive in Additive::ALL {
            assert_eq!(Additive::from_name(additive.name()).unwrap(), additive);
        }
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        assert!(matches!(
            Beverage::from_name("Mocha"),
            Err(CoreError::BeverageNotFound(name)) if name == "Mocha"
        ));
        assert!(matches!(
            Additive::from_name("Honey"),
            Err(CoreError::AdditiveNotFound(name)) if name == "Honey"
        ));
        assert!(matches!(
            Additive::from_name(""),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_lookup_accepts_identifier_form() {
        assert_eq!(Additive::from_name("whippedcream").unwrap(), Additive::WhippedCream);
        assert_eq!(Additive::from_name("WHIPPED CREAM").unwrap(), Additive::WhippedCream);
    }

    #[test]
    fn test_single_incompatibility_rule() {
        for additive in Additive::ALL {
            for base in Beverage::ALL {
                let expected = additive == Additive::WhippedCream && base == Beverage::BlackCoffee;
                assert_eq!(additive.is_disabled(base), expected, "{additive} on {base}");
            }
        }
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(Beverage::BlackCoffee.ident(), "BlackCoffee");
        assert_eq!(Additive::WhippedCream.decorator_ident(), "WhippedCreamDecorator");
        assert_eq!(Additive::Milk.description_suffix(), " + Milk");
    }

    #[test]
    fn test_serialized_names_match_registry_keys() {
        let json = serde_json::to_string(&Beverage::BlackCoffee).unwrap();
        assert_eq!(json, "\"Black Coffee\"");
        let json = serde_json::to_string(&Additive::WhippedCream).unwrap();
        assert_eq!(json, "\"Whipped Cream\"");
        let json = serde_json::to_string(&Glyph::CupSoda).unwrap();
        assert_eq!(json, "\"cup-soda\"");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Beverage::Latte.glyph(), Glyph::CupSoda);
        assert_eq!(Beverage::Latte.cup_glyph(), Glyph::GlassWater);
        assert_eq!(Additive::Cinnamon.glyph().token(), "sparkles");
        assert_eq!(Beverage::Espresso.liquid_shade(), "amber-950");
    }
}
