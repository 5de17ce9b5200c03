//! Vestra - marketplace backend
//!
//! Thin JSON-over-HTTP handlers in front of a PostgreSQL ledger.
//!
//! # Modules
//!
//! - [`finance`] - Seller ledger: balance, commission, withdrawals
//! - [`returns`] - Return request responses and the order side effect
//! - [`orders`] - Order rows, state enum, tracking updates
//! - [`polls`] - One-vote-per-user poll bookkeeping
//! - [`loyalty`] - Tier bucketing over lifetime spend
//! - [`identity`] - Users, sellers, sessions, role checks
//! - [`security`] - Step-up PIN with a store-backed attempt limiter
//! - [`gateway`] - axum router, handlers, response envelope

pub mod config;
pub mod db;
pub mod finance;
pub mod gateway;
pub mod identity;
pub mod logging;
pub mod loyalty;
pub mod orders;
pub mod polls;
pub mod returns;
pub mod security;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use finance::{
    CommissionBreakdown, FinanceError, SellerBalance, WithdrawalRequest, WithdrawalStatus,
};
pub use returns::{ReturnAction, ReturnStatus};
