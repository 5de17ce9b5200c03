//! Orders: row shape, state enum, seller-side tracking updates

pub mod models;
pub mod repository;

pub use models::{Order, OrderState};
pub use repository::{OrderError, OrderRepository};
