//! Credit card bill amounts
//!
//! A card's `statement_balance` is what is due at its next due date. For a due
//! date in the current or following *real* month (relative to the clock, not
//! to the projection start) that balance is used. Further out, only a declared
//! `FutureStatement` counts; undeclared months resolve to 0 rather than
//! carrying a guess forward.

use jiff::civil::Date;
use tracing::warn;

use crate::date_math::next_month;
use crate::model::{CardAmountSource, Cents, CreditCard, FutureStatement};

/// Resolved bill for one due-date occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBill {
    pub amount: Cents,
    pub source: CardAmountSource,
}

/// True when `date` is in `today`'s month or the month after it
pub fn is_current_or_next_month(date: Date, today: Date) -> bool {
    let current = (today.year(), today.month());
    let next = next_month(today.year(), today.month());
    let target = (date.year(), date.month());
    target == current || target == next
}

/// Amount due for `card` on `due_date`.
///
/// `today` must come from the clock. Duplicate declarations for the same
/// card and month take the first one found.
pub fn resolve_card_bill(
    card: &CreditCard,
    due_date: Date,
    today: Date,
    statements: &[FutureStatement],
) -> CardBill {
    if is_current_or_next_month(due_date, today) {
        return CardBill {
            amount: card.statement_balance,
            source: CardAmountSource::Statement,
        };
    }

    let (year, month) = (due_date.year(), due_date.month());
    let mut matching = statements.iter().filter(|s| s.matches(&card.id, year, month));
    match matching.next() {
        Some(statement) => {
            if matching.next().is_some() {
                warn!(
                    card = %card.id,
                    year,
                    month,
                    "multiple future statements for one month, using the first"
                );
            }
            CardBill {
                amount: statement.amount,
                source: CardAmountSource::FutureStatement,
            }
        }
        None => CardBill {
            amount: 0,
            source: CardAmountSource::Undeclared,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardId;
    use jiff::civil::date;

    fn card() -> CreditCard {
        CreditCard {
            id: CardId::from("visa"),
            name: "Visa".into(),
            statement_balance: 90_000,
            due_day: 10,
            balance_updated_at: None,
        }
    }

    fn statement(year: i16, month: i8, amount: Cents) -> FutureStatement {
        FutureStatement {
            credit_card_id: CardId::from("visa"),
            target_month: month,
            target_year: year,
            amount,
        }
    }

    #[test]
    fn test_current_and_next_month_use_statement_balance() {
        let today = date(2025, 12, 20);
        assert!(is_current_or_next_month(date(2025, 12, 10), today));
        assert!(is_current_or_next_month(date(2026, 1, 10), today));
        assert!(!is_current_or_next_month(date(2026, 2, 10), today));

        // Even a declared statement is ignored for next month
        let bill = resolve_card_bill(&card(), date(2026, 1, 10), today, &[statement(2026, 1, 5)]);
        assert_eq!(bill.amount, 90_000);
        assert_eq!(bill.source, CardAmountSource::Statement);
    }

    #[test]
    fn test_later_months_use_declared_statement() {
        let today = date(2025, 1, 5);
        let statements = [statement(2025, 3, 42_000), statement(2025, 4, 1)];
        let bill = resolve_card_bill(&card(), date(2025, 3, 10), today, &statements);
        assert_eq!(bill.amount, 42_000);
        assert_eq!(bill.source, CardAmountSource::FutureStatement);
    }

    #[test]
    fn test_undeclared_later_month_is_zero() {
        let today = date(2025, 1, 5);
        let bill = resolve_card_bill(&card(), date(2025, 5, 10), today, &[statement(2025, 3, 1)]);
        assert_eq!(bill.amount, 0);
        assert_eq!(bill.source, CardAmountSource::Undeclared);
    }

    #[test]
    fn test_statements_for_other_cards_ignored() {
        let today = date(2025, 1, 5);
        let mut other = statement(2025, 3, 7_000);
        other.credit_card_id = CardId::from("amex");
        let bill = resolve_card_bill(&card(), date(2025, 3, 10), today, &[other]);
        assert_eq!(bill.amount, 0);
    }

    #[test]
    fn test_duplicate_statements_take_first() {
        let today = date(2025, 1, 5);
        let statements = [statement(2025, 6, 111), statement(2025, 6, 222)];
        let bill = resolve_card_bill(&card(), date(2025, 6, 10), today, &statements);
        assert_eq!(bill.amount, 111);
    }
}
