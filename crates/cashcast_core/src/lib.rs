//! Cashflow projection engine
//!
//! Walks a checking balance forward day by day and reports, for two
//! scenarios, where it ends up and on which days it dips below zero:
//! - Optimistic: every active income is counted
//! - Pessimistic: only incomes marked guaranteed are counted
//!
//! Expenses (fixed bills, one-off expenses and credit card bills) always count
//! in both. A second entry point estimates *today's* balance from stale stored
//! balances and rebases the projection onto it.
//!
//! All calendar logic is date-only. The one place instants are turned into
//! days is [`timezone`], driven by an explicit [`Clock`].
//!
//! # Builder DSL
//!
//! ```ignore
//! use cashcast_core::{AccountBuilder, Clock, IncomeBuilder, ProjectionBuilder};
//! use cashcast_core::simulation::calculate_projection;
//!
//! let input = ProjectionBuilder::new()
//!     .start(2025, 1, 1)
//!     .days(30)
//!     .account(AccountBuilder::checking("Main").balance(500_000))
//!     .income(IncomeBuilder::recurring("Salary").amount(200_000).monthly(15))
//!     .fixed_expense("Rent", 100_000, 10)
//!     .build();
//!
//! let projection = calculate_projection(&input, &Clock::system("America/Sao_Paulo")?)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod credit_cards;
pub mod date_math;
pub mod error;
pub mod estimate;
pub mod schedule;
pub mod simulation;
pub mod summary;
pub mod timezone;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AccountBuilder, IncomeBuilder, ProjectionBuilder, ProjectionInput};
pub use error::{EngineError, Result};
pub use estimate::{
    TodayProjection, calculate_estimated_today_balance, project_from_today,
    rebase_projection_from_estimated_today,
};
pub use simulation::{calculate_projection, project_batch};
pub use timezone::Clock;
