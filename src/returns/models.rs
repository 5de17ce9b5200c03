//! Return request types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Status of a return request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReturnStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReturnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "pending",
            ReturnStatus::Approved => "approved",
            ReturnStatus::Rejected => "rejected",
        }
    }

    /// Both outcomes are terminal; only `pending` accepts a response
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReturnStatus::Pending)
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReturnStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReturnStatus::Pending),
            "approved" => Ok(ReturnStatus::Approved),
            "rejected" => Ok(ReturnStatus::Rejected),
            other => Err(format!("Unknown return status: {}", other)),
        }
    }
}

/// Seller's answer to a return request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReturnAction {
    Approve,
    Reject,
}

impl ReturnAction {
    pub fn resulting_status(&self) -> ReturnStatus {
        match self {
            ReturnAction::Approve => ReturnStatus::Approved,
            ReturnAction::Reject => ReturnStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for s in ["pending", "approved", "rejected"] {
            assert_eq!(ReturnStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(ReturnStatus::from_str("open").is_err());
    }

    #[test]
    fn test_only_pending_is_responsive() {
        assert!(!ReturnStatus::Pending.is_terminal());
        assert!(ReturnStatus::Approved.is_terminal());
        assert!(ReturnStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_action_to_status() {
        assert_eq!(
            ReturnAction::Approve.resulting_status(),
            ReturnStatus::Approved
        );
        assert_eq!(
            ReturnAction::Reject.resulting_status(),
            ReturnStatus::Rejected
        );
    }
}
