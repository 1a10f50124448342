use serde::{Deserialize, Serialize};

/// Name of the currency row.
pub const GOLD: &str = "Gold";

/// One inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item name.
    pub name: String,
    /// How many of it the character carries.
    pub quantity: i64,
}

impl InventoryItem {
    /// True for the currency row.
    pub fn is_gold(&self) -> bool {
        self.name == GOLD
    }

    /// Named items carry an "of <benefit>" clause and resell for more.
    pub fn is_named(&self) -> bool {
        self.name.find(" of ").is_some_and(|pos| pos > 0)
    }
}

/// Ordered inventory, unique by name, with Gold kept at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// An inventory holding nothing but zero Gold.
    pub fn new() -> Self {
        Self {
            items: vec![InventoryItem {
                name: GOLD.to_string(),
                quantity: 0,
            }],
        }
    }

    /// Make sure Gold exists and sits at index 0. Returns true if anything moved.
    pub fn ensure_gold(&mut self) -> bool {
        match self.items.iter().position(InventoryItem::is_gold) {
            Some(0) => false,
            Some(idx) => {
                let gold = self.items.remove(idx);
                self.items.insert(0, gold);
                true
            }
            None => {
                self.items.insert(
                    0,
                    InventoryItem {
                        name: GOLD.to_string(),
                        quantity: 0,
                    },
                );
                true
            }
        }
    }

    /// Add `quantity` of `name`, creating the row if needed. Returns the row index.
    pub fn add(&mut self, name: &str, quantity: i64) -> usize {
        if let Some(idx) = self.items.iter().position(|i| i.name == name) {
            self.items[idx].quantity += quantity;
            return idx;
        }
        self.items.push(InventoryItem {
            name: name.to_string(),
            quantity,
        });
        self.items.len() - 1
    }

    /// Current Gold.
    pub fn gold(&self) -> i64 {
        self.items
            .iter()
            .find(|i| i.is_gold())
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Total quantity of everything except Gold.
    pub fn encumbrance(&self) -> i64 {
        self.sellable().map(|i| i.quantity).sum()
    }

    /// Rows other than Gold, in order.
    pub fn sellable(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|i| !i.is_gold())
    }

    /// The first row other than Gold.
    pub fn first_sellable(&self) -> Option<&InventoryItem> {
        self.sellable().next()
    }

    /// Remove and return the first row other than Gold.
    pub fn take_first_sellable(&mut self) -> Option<InventoryItem> {
        let idx = self.items.iter().position(|i| !i.is_gold())?;
        Some(self.items.remove(idx))
    }

    /// Row at `index`.
    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        self.items.get(index)
    }

    /// Look up a row by name.
    pub fn find(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// All rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    /// Number of rows, Gold included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when not even Gold is present (only possible in damaged saves).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
