use barista_core::{Additive, Beverage, Composition, SoundCue, ToggleOutcome};
use proptest::prelude::*;

fn any_beverage() -> impl Strategy<Value = Beverage> {
    prop::sample::select(Beverage::ALL.to_vec())
}

fn any_additive() -> impl Strategy<Value = Additive> {
    prop::sample::select(Additive::ALL.to_vec())
}

/// Reference model: the additive list a user would see after these clicks.
fn model_toggles(base: Beverage, clicks: &[Additive]) -> Vec<Additive> {
    let mut present: Vec<Additive> = Vec::new();
    for click in clicks {
        if !click.is_compatible_with(base) {
            continue;
        }
        match present.iter().position(|a| a == click) {
            Some(index) => present.truncate(index),
            None => present.push(*click),
        }
    }
    present
}

proptest! {
    #[test]
    fn prop_order_is_insertion_order_of_present(
        base in any_beverage(),
        clicks in prop::collection::vec(any_additive(), 0..40)
    ) {
        let order = clicks.iter().fold(Composition::new(base), |order, click| {
            order.toggle_additive(*click).into_composition()
        });

        let expected = model_toggles(base, &clicks);
        prop_assert_eq!(order.additives(), expected.as_slice());

        // Never a duplicate, never an incompatible additive.
        for (i, additive) in order.additives().iter().enumerate() {
            prop_assert!(additive.is_compatible_with(base));
            prop_assert!(!order.additives()[i + 1..].contains(additive));
        }
    }

    #[test]
    fn prop_removal_truncates_to_index(
        base in any_beverage(),
        clicks in prop::collection::vec(any_additive(), 1..20),
        pick in any::<prop::sample::Index>()
    ) {
        let order = clicks.iter().fold(Composition::new(base), |order, click| {
            order.toggle_additive(*click).into_composition()
        });
        prop_assume!(!order.additives().is_empty());

        let index = pick.index(order.additives().len());
        let target = order.additives()[index];

        match order.toggle_additive(target) {
            ToggleOutcome::Removed { composition, removed } => {
                prop_assert_eq!(composition.additives().len(), index);
                prop_assert_eq!(composition.additives(), &order.additives()[..index]);
                prop_assert_eq!(removed.as_slice(), &order.additives()[index..]);
            }
            other => prop_assert!(false, "expected removal, got {:?}", other),
        }
    }

    #[test]
    fn prop_select_base_preserves_compatible_prefix(
        start in any_beverage(),
        next in any_beverage(),
        clicks in prop::collection::vec(any_additive(), 0..20)
    ) {
        let order = clicks.iter().fold(Composition::new(start), |order, click| {
            order.toggle_additive(*click).into_composition()
        });
        let change = order.select_base(next);

        let kept = change.composition.additives();
        prop_assert!(order.additives().starts_with(kept));
        prop_assert!(kept.iter().all(|a| a.is_compatible_with(next)));
        prop_assert_eq!(kept.len() + change.dropped.len(), order.additives().len());
        if let Some(first_dropped) = change.dropped.first() {
            prop_assert!(!first_dropped.is_compatible_with(next));
        }
        prop_assert!(change.composition.fill_level() <= order.fill_level());
        prop_assert_eq!(change.cues(), vec![SoundCue::Select]);
    }

    #[test]
    fn prop_cost_is_base_plus_deltas(
        base in any_beverage(),
        clicks in prop::collection::vec(any_additive(), 0..20)
    ) {
        let order = clicks.iter().fold(Composition::new(base), |order, click| {
            order.toggle_additive(*click).into_composition()
        });
        let expected: i64 = base.base_price().cents()
            + order.additives().iter().map(|a| a.price_delta().cents()).sum::<i64>();

        let result = order.derive_result();
        prop_assert_eq!(result.cost.cents(), expected);
        prop_assert_eq!(result.clone(), order.derive_result());
        prop_assert_eq!(result.trace.tree.len(), order.additives().len() + 1);
    }
}

#[test]
fn whipped_cream_on_black_coffee_is_a_no_op() {
    let order = Composition::new(Beverage::BlackCoffee)
        .toggle_additive(Additive::Sugar)
        .into_composition();

    let outcome = order.toggle_additive(Additive::WhippedCream);
    assert!(outcome.is_rejected());
    assert_eq!(outcome.into_composition(), order);
}

#[test]
fn switching_to_black_coffee_removes_whipped_cream() {
    let order = [Additive::Cinnamon, Additive::Milk, Additive::WhippedCream]
        .into_iter()
        .fold(Composition::new(Beverage::Cappuccino), |order, additive| {
            order.toggle_additive(additive).into_composition()
        });

    let change = order.select_base(Beverage::BlackCoffee);
    assert_eq!(change.composition.additives(), &[Additive::Cinnamon, Additive::Milk]);
    assert_eq!(change.dropped, vec![Additive::WhippedCream]);
    assert_eq!(change.composition.derive_result().description, "Black Coffee + Cinnamon + Milk");
}
