//! Data models for users and sellers

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User role, stored as a smallint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum UserRole {
    Customer = 0,
    Admin = 1,
}

impl From<i16> for UserRole {
    fn from(v: i16) -> Self {
        match v {
            1 => UserRole::Admin,
            _ => UserRole::Customer,
        }
    }
}

/// Registered user account
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Seller profile attached to a user account
///
/// Card fields are the seller's payout card on file. `card_verified`
/// gates the card payout path.
#[derive(Debug, Clone, Serialize)]
pub struct Seller {
    pub seller_id: i64,
    pub user_id: i64,
    pub shop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    pub card_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_i16() {
        assert_eq!(UserRole::from(0), UserRole::Customer);
        assert_eq!(UserRole::from(1), UserRole::Admin);
        assert_eq!(UserRole::from(99), UserRole::Customer); // unknown values are not admins
    }

    #[test]
    fn test_is_admin() {
        let user = User {
            user_id: 1,
            username: "ops".to_string(),
            email: "ops@example.com".to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
        };
        assert!(user.is_admin());
    }
}
