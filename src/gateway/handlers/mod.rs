//! HTTP route handlers
//!
//! Handlers stay thin: parse the typed body, resolve the caller, make one
//! service call, convert the outcome into the response envelope. No business
//! rule lives here.

pub mod admin;
pub mod auth;
pub mod health;
pub mod helpers;
pub mod loyalty;
pub mod polls;
pub mod returns;
pub mod seller;
