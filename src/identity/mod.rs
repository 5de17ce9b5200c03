//! User and seller identity
//!
//! PostgreSQL-backed accounts with argon2 password hashes, JWT sessions,
//! and the seller profile (payout card on file) attached to a user.

pub mod middleware;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{Seller, User, UserRole};
pub use repository::{SellerRepository, UserRepository};
pub use service::{Claims, UserAuthService};
