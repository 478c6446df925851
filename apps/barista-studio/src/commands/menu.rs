//! # Menu Commands
//!
//! Listings for the base picker and the add-on panel.

use barista_core::{Additive, Beverage, Glyph};
use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, SessionState};

/// One button in the base picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageEntry {
    pub beverage: Beverage,
    pub price: String,
    pub cup_glyph: Glyph,
    pub selected: bool,
}

/// One toggle in the add-on panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditiveEntry {
    pub additive: Additive,
    pub price_delta: String,
    pub glyph: Glyph,
    pub selected: bool,
    /// Cannot be applied to the current base; rendered greyed out.
    pub disabled: bool,
}

/// Lists every base beverage, marking the current one.
pub fn list_beverages(session: &SessionState, config: &ConfigState) -> Vec<BeverageEntry> {
    debug!("list_beverages command");
    let current = session.with_session(|s| s.composition().base());

    Beverage::ALL
        .into_iter()
        .map(|beverage| BeverageEntry {
            beverage,
            price: config.format_currency(beverage.base_price()),
            cup_glyph: beverage.cup_glyph(),
            selected: beverage == current,
        })
        .collect()
}

/// Lists every add-on with its selected and disabled state.
pub fn list_additives(session: &SessionState, config: &ConfigState) -> Vec<AdditiveEntry> {
    debug!("list_additives command");
    session.with_session(|s| {
        let composition = s.composition();
        Additive::ALL
            .into_iter()
            .map(|additive| AdditiveEntry {
                additive,
                price_delta: config.format_delta(additive.price_delta()),
                glyph: additive.glyph(),
                selected: composition.contains(additive),
                disabled: additive.is_disabled(composition.base()),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConfigState {
        ConfigState {
            currency_symbol: "$".to_string(),
            settings_path: None,
        }
    }

    #[test]
    fn test_beverage_listing() {
        let session = SessionState::new();
        let entries = list_beverages(&session, &config());

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[3].beverage, Beverage::Cappuccino);
        assert_eq!(entries[3].price, "$3.25");
        assert!(entries[0].selected);
        assert_eq!(entries.iter().filter(|e| e.selected).count(), 1);
    }

    #[test]
    fn test_whipped_cream_disabled_on_black_coffee() {
        let session = SessionState::new();
        let entries = list_additives(&session, &config());

        let whipped = entries
            .iter()
            .find(|e| e.additive == Additive::WhippedCream)
            .unwrap();
        assert!(whipped.disabled);
        assert_eq!(whipped.price_delta, "+$0.70");
        assert_eq!(entries.iter().filter(|e| e.disabled).count(), 1);

        session.select_base(Beverage::Espresso);
        let entries = list_additives(&session, &config());
        assert!(entries.iter().all(|e| !e.disabled));
    }

    #[test]
    fn test_selected_additives_marked() {
        let session = SessionState::new();
        session.toggle_additive(Additive::Caramel);

        let entries = list_additives(&session, &config());
        let selected: Vec<Additive> = entries.iter().filter(|e| e.selected).map(|e| e.additive).collect();
        assert_eq!(selected, vec![Additive::Caramel]);
    }
}
