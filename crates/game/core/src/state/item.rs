//! Item value objects.

use core::fmt;

/// Marker in an item name that makes it drinkable.
const POTION_MARKER: &str = "Potion";

/// An immutable item: something that can sit on the ground, in a shop, or in
/// an inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value,
        }
    }

    /// An item with no trade value (loot, quest items).
    pub fn worthless(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price in gold.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Potions can be drunk outside combat to restore HP.
    pub fn is_potion(&self) -> bool {
        self.name.contains(POTION_MARKER)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}
