//! Seller financial ledger
//!
//! Balance, commission and withdrawal/payout state. All mutations run inside
//! transactions with the invariants enforced by single atomic statements,
//! never by check-then-write sequences.

pub mod balance;
pub mod commission;
pub mod error;
pub mod models;
pub mod withdrawal;

pub use balance::BalanceService;
pub use commission::{calculate, CommissionBreakdown};
pub use error::FinanceError;
pub use models::{
    PayoutMethod, SellerBalance, WithdrawalRequest, WithdrawalStatus, DEFAULT_COMMISSION_RATE,
};
pub use withdrawal::{WithdrawalDecision, WithdrawalService, MIN_CARD_PAYOUT};
