//! Common error infrastructure for game-core.
//!
//! Nothing inside combat or progression is fatal. The errors here describe
//! rejected requests: the caller reports them and the game carries on with
//! unchanged state.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each request kind has its own error type
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Side Effects**: Returning an error means no state was touched

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with alternative action.
    ///
    /// Examples: not enough MP yet, not enough gold yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill index, malformed command
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str;
}

/// A player turn that could not be carried out. The turn is still consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("there is no skill in slot {index}")]
    UnknownSkill { index: usize },

    #[error("{skill} needs {required} MP but only {available} is left")]
    InsufficientMp {
        skill: String,
        required: u32,
        available: u32,
    },

    #[error("'{input}' is not a valid command")]
    Malformed { input: String },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMp { .. } => ErrorSeverity::Recoverable,
            Self::UnknownSkill { .. } | Self::Malformed { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSkill { .. } => "UNKNOWN_SKILL",
            Self::InsufficientMp { .. } => "INSUFFICIENT_MP",
            Self::Malformed { .. } => "MALFORMED_COMMAND",
        }
    }
}

/// A purchase that did not go through. Gold and inventory are unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShopError {
    #[error("{merchant} has nothing to sell")]
    NoStock { merchant: String },

    #[error("there is no item {index} for sale")]
    UnknownItem { index: usize },

    #[error("not enough gold: {item} costs {price}, you have {gold}")]
    InsufficientGold { item: String, price: u32, gold: u32 },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientGold { .. } => ErrorSeverity::Recoverable,
            Self::NoStock { .. } | Self::UnknownItem { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoStock { .. } => "NO_STOCK",
            Self::UnknownItem { .. } => "UNKNOWN_SHOP_ITEM",
            Self::InsufficientGold { .. } => "INSUFFICIENT_GOLD",
        }
    }
}

/// An inventory request that did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("inventory slot {index} is empty")]
    UnknownSlot { index: usize },

    #[error("{item} cannot be used")]
    NotConsumable { item: String },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSlot { .. } => "UNKNOWN_SLOT",
            Self::NotConsumable { .. } => "NOT_CONSUMABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp_shortage_is_recoverable() {
        let error = ActionError::InsufficientMp {
            skill: "Heal".into(),
            required: 8,
            available: 3,
        };
        assert!(error.severity().is_recoverable());
        assert_eq!(error.error_code(), "INSUFFICIENT_MP");
        assert_eq!(error.to_string(), "Heal needs 8 MP but only 3 is left");
    }

    #[test]
    fn bad_index_is_validation() {
        let error = ActionError::UnknownSkill { index: 9 };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.severity().as_str(), "validation");
    }
}
