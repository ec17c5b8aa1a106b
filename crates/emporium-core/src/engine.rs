//! The inventory engine: one `tick` ages every item by one simulated day.

use tracing::{debug, trace};

use crate::item::Item;
use crate::registry::RuleRegistry;

/// A shop inventory plus the rule registry that ages it.
///
/// The engine owns its items for the duration of a run and mutates them in
/// place; report collaborators read post-tick state back through
/// [`Inventory::items`]. Ticks are synchronous and single-threaded — a
/// collection is aged from exactly one place at a time.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    registry: RuleRegistry,
}

impl Inventory {
    /// Create an inventory with the standard rule registry.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_registry(items, RuleRegistry::new())
    }

    /// Create an inventory with a custom registry.
    #[must_use]
    pub const fn with_registry(items: Vec<Item>, registry: RuleRegistry) -> Self {
        Self { items, registry }
    }

    /// Advance every item by one simulated day, in input order.
    ///
    /// Each item's rule is resolved by name and applied exactly once; rules
    /// never observe another item's state. An empty inventory is a no-op.
    pub fn tick(&mut self) {
        for item in &mut self.items {
            let rule = self.registry.resolve(&item.name);
            rule.apply(item);
            trace!(
                name = %item.name,
                rule = ?rule,
                sell_in = item.sell_in,
                quality = item.quality,
                "Updated item"
            );
        }
        debug!(items = self.items.len(), "Advanced inventory by one day");
    }

    /// Run `days` consecutive ticks.
    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.tick();
        }
    }

    /// Current item state, in the order the items were supplied.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the engine and hand the items back.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};
    use crate::rule::UpdateRule;
    use pretty_assertions::assert_eq;

    fn tick_one(item: Item) -> Item {
        let mut inventory = Inventory::new(vec![item]);
        inventory.tick();
        inventory.into_items().remove(0)
    }

    #[test]
    fn test_ordinary_item_before_deadline() {
        let item = tick_one(Item::new("Elixir of the Mongoose", 5, 10));
        assert_eq!((item.sell_in, item.quality), (4, 9));
    }

    #[test]
    fn test_ordinary_item_past_deadline_decays_twice() {
        let item = tick_one(Item::new("foo", 0, 10));
        assert_eq!((item.sell_in, item.quality), (-1, 8));
    }

    #[test]
    fn test_appreciating_item_past_deadline() {
        let item = tick_one(Item::new(AGED_BRIE, 0, 10));
        assert_eq!((item.sell_in, item.quality), (-1, 12));
    }

    #[test]
    fn test_event_ticket_inside_soon_window() {
        let item = tick_one(Item::new(BACKSTAGE_PASSES, 11, 10));
        assert_eq!((item.sell_in, item.quality), (10, 12));
    }

    #[test]
    fn test_event_ticket_after_event_is_worthless() {
        let item = tick_one(Item::new(BACKSTAGE_PASSES, -1, 50));
        assert_eq!((item.sell_in, item.quality), (-2, 0));
    }

    #[test]
    fn test_fast_decaying_item_clamps_at_floor() {
        let item = tick_one(Item::new(CONJURED, 5, 1));
        assert_eq!((item.sell_in, item.quality), (4, 0));
    }

    #[test]
    fn test_legendary_item_never_changes() {
        let mut inventory = Inventory::new(vec![Item::new(SULFURAS, 0, 80)]);
        inventory.advance(10);

        assert_eq!(inventory.items(), [Item::new(SULFURAS, 0, 80)]);
    }

    #[test]
    fn test_unrecognized_name_decays_like_ordinary() {
        let named = tick_one(Item::new("Mana Cake", 3, 6));
        let ordinary = tick_one(Item::new("foo", 3, 6));

        assert_eq!(
            (named.sell_in, named.quality),
            (ordinary.sell_in, ordinary.quality)
        );
    }

    #[test]
    fn test_empty_inventory_is_noop() {
        let mut inventory = Inventory::new(Vec::new());
        inventory.tick();

        assert!(inventory.items().is_empty());
    }

    #[test]
    fn test_tick_preserves_input_order() {
        let mut inventory = Inventory::new(vec![
            Item::new("first", 5, 10),
            Item::new(AGED_BRIE, 5, 10),
            Item::new("last", 5, 10),
        ]);
        inventory.tick();

        let names: Vec<&str> = inventory.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", AGED_BRIE, "last"]);
    }

    #[test]
    fn test_advance_matches_repeated_ticks() {
        let items = vec![
            Item::new("foo", 2, 10),
            Item::new(AGED_BRIE, 1, 40),
            Item::new(BACKSTAGE_PASSES, 7, 20),
        ];

        let mut by_advance = Inventory::new(items.clone());
        by_advance.advance(3);

        let mut by_ticks = Inventory::new(items);
        by_ticks.tick();
        by_ticks.tick();
        by_ticks.tick();

        assert_eq!(by_advance.items(), by_ticks.items());
    }

    #[test]
    fn test_custom_registry_rule_applies() {
        let registry = RuleRegistry::new().with_rule("Cursed Amulet", UpdateRule::FastDecaying);
        let mut inventory =
            Inventory::with_registry(vec![Item::new("Cursed Amulet", 5, 10)], registry);
        inventory.tick();

        assert_eq!(inventory.items(), [Item::new("Cursed Amulet", 4, 8)]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_item() -> impl Strategy<Value = Item> {
            let name = prop_oneof![
                Just(AGED_BRIE.to_string()),
                Just(BACKSTAGE_PASSES.to_string()),
                Just(SULFURAS.to_string()),
                Just(CONJURED.to_string()),
                "[A-Za-z ]{0,24}",
            ];
            (name, -100i32..=100, 0i32..=50)
                .prop_map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
        }

        proptest! {
            /// Non-legendary quality stays in [0, 50], legendary items are
            /// frozen, and sell_in falls by exactly one per tick.
            #[test]
            fn tick_invariants_hold(
                items in prop::collection::vec(arb_item(), 0..12),
                days in 0u32..40,
            ) {
                let registry = RuleRegistry::new();
                let mut inventory = Inventory::new(items.clone());
                inventory.advance(days);

                let elapsed = i32::try_from(days).unwrap();
                for (before, after) in items.iter().zip(inventory.items()) {
                    if registry.resolve(&before.name) == UpdateRule::Legendary {
                        prop_assert_eq!(before, after);
                    } else {
                        prop_assert!((0..=50).contains(&after.quality));
                        prop_assert_eq!(after.sell_in, before.sell_in - elapsed);
                    }
                }
            }
        }
    }
}
