//! Identifiers for the entities a projection reads
//!
//! Ids are opaque strings owned by the persistence layer. Each entity type
//! gets its own newtype so an income id can't be used to look up a card.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Bank account (checking, savings, investment)
    AccountId
);
string_id!(
    /// Recurring or single-shot income source
    IncomeId
);
string_id!(
    /// Fixed or single-shot expense
    ExpenseId
);
string_id!(
    /// Credit card
    CardId
);
