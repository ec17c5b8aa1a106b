//! Name-to-rule lookup with a default fallback.

use std::collections::HashMap;

use crate::rule::UpdateRule;

/// Item name of the appreciating cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Item name of the event tickets.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Item name of the legendary artifact.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Item name of the fast-decaying conjured goods.
pub const CONJURED: &str = "Conjured";

/// Maps exact item names to their update rule.
///
/// Built once and read-only afterwards. Lookup is total: any name missing
/// from the table — unknown stock, the empty string, future item types —
/// resolves to [`UpdateRule::Ordinary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: HashMap<String, UpdateRule>,
}

impl RuleRegistry {
    /// Registry with the standard shop categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::from([
                (AGED_BRIE.to_string(), UpdateRule::Appreciating),
                (BACKSTAGE_PASSES.to_string(), UpdateRule::EventTicket),
                (SULFURAS.to_string(), UpdateRule::Legendary),
                (CONJURED.to_string(), UpdateRule::FastDecaying),
            ]),
        }
    }

    /// Add or override the rule for an exact item name.
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, rule: UpdateRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Look up the rule for an item name (exact, case-sensitive match).
    #[must_use]
    pub fn resolve(&self, name: &str) -> UpdateRule {
        self.rules.get(name).copied().unwrap_or(UpdateRule::Ordinary)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
