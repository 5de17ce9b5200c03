//! Return/refund flow
//!
//! Sellers answer customer return requests: `pending -> approved | rejected`,
//! both terminal. Approval also moves the related order to RETURN_REQUESTED.

pub mod models;
pub mod service;

pub use models::{ReturnAction, ReturnStatus};
pub use service::{ReturnError, ReturnService};
