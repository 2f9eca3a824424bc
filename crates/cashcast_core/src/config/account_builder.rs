//! Account Builder DSL
//!
//! ```ignore
//! use cashcast_core::config::AccountBuilder;
//!
//! let main = AccountBuilder::checking("Main")
//!     .balance(250_000)
//!     .updated_at("2025-01-10T14:00:00Z".parse()?);
//!
//! let rainy_day = AccountBuilder::savings("Emergency").balance(1_000_000);
//! ```

use jiff::Timestamp;

use crate::model::{Account, AccountId, AccountKind, Cents};

/// Builder for creating accounts with a fluent API
#[derive(Debug, Clone)]
pub struct AccountBuilder {
    pub(crate) name: String,
    kind: AccountKind,
    balance: Cents,
    balance_updated_at: Option<Timestamp>,
}

impl AccountBuilder {
    /// Checking account: the only kind that funds the projection
    #[must_use]
    pub fn checking(name: impl Into<String>) -> Self {
        Self::new(name, AccountKind::Checking)
    }

    #[must_use]
    pub fn savings(name: impl Into<String>) -> Self {
        Self::new(name, AccountKind::Savings)
    }

    #[must_use]
    pub fn investment(name: impl Into<String>) -> Self {
        Self::new(name, AccountKind::Investment)
    }

    #[must_use]
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            kind,
            balance: 0,
            balance_updated_at: None,
        }
    }

    #[must_use]
    pub fn balance(mut self, cents: Cents) -> Self {
        self.balance = cents;
        self
    }

    /// When the balance was last entered
    #[must_use]
    pub fn updated_at(mut self, at: Timestamp) -> Self {
        self.balance_updated_at = Some(at);
        self
    }

    pub(crate) fn build(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            kind: self.kind,
            balance: self.balance,
            balance_updated_at: self.balance_updated_at,
        }
    }
}
