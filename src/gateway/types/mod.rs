//! Gateway types module
//!
//! Type-safe types for the API boundary:
//!
//! ## Input Types
//! - [`StrictAmount`]: format-validated monetary input
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: unified API response wrapper
//! - [`ApiError`] / [`ApiResult`]: handler-boundary error plumbing

pub mod money;
pub mod response;

pub use money::StrictAmount;
pub use response::{error_codes, ok, ApiError, ApiRejection, ApiResponse, ApiResult};
