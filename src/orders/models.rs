//! Order row and state types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::Row;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Fulfillment state of an order
///
/// Stored as uppercase text. `ReturnRequested` is forced by return approval
/// regardless of the prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Pending,
    Paid,
    Shipped,
    Delivered,
    ReturnRequested,
    Refunded,
    Cancelled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Pending => "PENDING",
            OrderState::Paid => "PAID",
            OrderState::Shipped => "SHIPPED",
            OrderState::Delivered => "DELIVERED",
            OrderState::ReturnRequested => "RETURN_REQUESTED",
            OrderState::Refunded => "REFUNDED",
            OrderState::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderState::Pending),
            "PAID" => Ok(OrderState::Paid),
            "SHIPPED" => Ok(OrderState::Shipped),
            "DELIVERED" => Ok(OrderState::Delivered),
            "RETURN_REQUESTED" => Ok(OrderState::ReturnRequested),
            "REFUNDED" => Ok(OrderState::Refunded),
            "CANCELLED" => Ok(OrderState::Cancelled),
            other => Err(format!("Unknown order state: {}", other)),
        }
    }
}

/// Persisted order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub state: String,
    pub payment_status: String,
    #[schema(value_type = String)]
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_carrier: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_row(r: &sqlx::postgres::PgRow) -> Self {
        Self {
            id: r.get("id"),
            buyer_id: r.get("buyer_id"),
            seller_id: r.get("seller_id"),
            state: r.get("state"),
            payment_status: r.get("payment_status"),
            total_amount: r.get("total_amount"),
            tracking_number: r.get("tracking_number"),
            tracking_carrier: r.get("tracking_carrier"),
            created_at: r.get("created_at"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_state_roundtrip() {
        for s in [
            "PENDING",
            "PAID",
            "SHIPPED",
            "DELIVERED",
            "RETURN_REQUESTED",
            "REFUNDED",
            "CANCELLED",
        ] {
            assert_eq!(OrderState::from_str(s).unwrap().as_str(), s);
        }
        assert!(OrderState::from_str("paid").is_err());
    }
}
