//! Ledger row types: seller balances and withdrawal requests

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::Row;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Default commission rate applied to newly provisioned sellers (percent)
pub const DEFAULT_COMMISSION_RATE: Decimal = Decimal::from_parts(150, 0, 0, false, 1); // 15.0

/// Seller's ledger row, lazily created on first read
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SellerBalance {
    pub seller_id: i64,
    #[schema(value_type = String)]
    pub available_balance: Decimal,
    #[schema(value_type = String)]
    pub pending_balance: Decimal,
    #[schema(value_type = String)]
    pub total_withdrawn: Decimal,
    #[schema(value_type = String)]
    pub total_sales: Decimal,
    /// Percent taken by the platform on each payout
    #[schema(value_type = String)]
    pub commission_rate: Decimal,
}

impl SellerBalance {
    /// The shape returned on first access, before any sales or payouts
    pub fn zeroed(seller_id: i64) -> Self {
        Self {
            seller_id,
            available_balance: Decimal::ZERO,
            pending_balance: Decimal::ZERO,
            total_withdrawn: Decimal::ZERO,
            total_sales: Decimal::ZERO,
            commission_rate: DEFAULT_COMMISSION_RATE,
        }
    }

    pub fn from_row(r: &sqlx::postgres::PgRow) -> Self {
        Self {
            seller_id: r.get("seller_id"),
            available_balance: r.get("available_balance"),
            pending_balance: r.get("pending_balance"),
            total_withdrawn: r.get("total_withdrawn"),
            total_sales: r.get("total_sales"),
            commission_rate: r.get("commission_rate"),
        }
    }
}

/// Payout destination, with the snapshot fields persisted on the request
#[derive(Debug, Clone, PartialEq)]
pub enum PayoutMethod {
    /// Card on file; requires the seller's card to be verified
    Card,
    Bank { bank_name: String, iban: String },
    Paypal { email: String },
}

impl PayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutMethod::Card => "card",
            PayoutMethod::Bank { .. } => "bank",
            PayoutMethod::Paypal { .. } => "paypal",
        }
    }
}

/// Lifecycle of a withdrawal request
///
/// `pending -> approved -> paid` or `pending -> rejected`. Transitions are
/// applied by admin review; amount fields never change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Paid => "paid",
        }
    }

    /// Whether `self -> next` is a legal admin transition
    pub fn can_transition_to(&self, next: WithdrawalStatus) -> bool {
        matches!(
            (self, next),
            (WithdrawalStatus::Pending, WithdrawalStatus::Approved)
                | (WithdrawalStatus::Pending, WithdrawalStatus::Rejected)
                | (WithdrawalStatus::Approved, WithdrawalStatus::Paid)
        )
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WithdrawalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(WithdrawalStatus::Pending),
            "approved" => Ok(WithdrawalStatus::Approved),
            "rejected" => Ok(WithdrawalStatus::Rejected),
            "paid" => Ok(WithdrawalStatus::Paid),
            other => Err(format!("Unknown withdrawal status: {}", other)),
        }
    }
}

/// Persisted withdrawal request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WithdrawalRequest {
    pub id: Uuid,
    pub seller_id: i64,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub method: String,
    #[schema(value_type = String)]
    pub commission_amount: Decimal,
    #[schema(value_type = String)]
    pub net_amount: Decimal,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WithdrawalRequest {
    pub fn from_row(r: &sqlx::postgres::PgRow) -> Self {
        Self {
            id: r.get("id"),
            seller_id: r.get("seller_id"),
            amount: r.get("amount"),
            method: r.get("method"),
            commission_amount: r.get("commission_amount"),
            net_amount: r.get("net_amount"),
            status: r.get("status"),
            card_last4: r.get("card_last4"),
            bank_name: r.get("bank_name"),
            iban: r.get("iban"),
            paypal_email: r.get("paypal_email"),
            created_at: r.get("created_at"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commission_rate_is_15() {
        assert_eq!(DEFAULT_COMMISSION_RATE, Decimal::from_str("15.0").unwrap());
    }

    #[test]
    fn test_zeroed_balance_shape() {
        let b = SellerBalance::zeroed(7);
        assert_eq!(b.seller_id, 7);
        assert_eq!(b.available_balance, Decimal::ZERO);
        assert_eq!(b.pending_balance, Decimal::ZERO);
        assert_eq!(b.total_withdrawn, Decimal::ZERO);
        assert_eq!(b.total_sales, Decimal::ZERO);
        assert_eq!(b.commission_rate, DEFAULT_COMMISSION_RATE);
    }

    #[test]
    fn test_withdrawal_status_roundtrip() {
        for s in ["pending", "approved", "rejected", "paid"] {
            assert_eq!(WithdrawalStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(WithdrawalStatus::from_str("done").is_err());
    }

    #[test]
    fn test_legal_transitions() {
        use WithdrawalStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Paid));

        assert!(!Rejected.can_transition_to(Paid));
        assert!(!Paid.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Paid));
    }

    #[test]
    fn test_payout_method_names() {
        assert_eq!(PayoutMethod::Card.as_str(), "card");
        assert_eq!(
            PayoutMethod::Bank {
                bank_name: "N26".into(),
                iban: "DE00".into()
            }
            .as_str(),
            "bank"
        );
        assert_eq!(
            PayoutMethod::Paypal {
                email: "a@b.c".into()
            }
            .as_str(),
            "paypal"
        );
    }
}
