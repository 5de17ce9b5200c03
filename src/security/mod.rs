//! Step-up security checks

pub mod pin;

pub use pin::{PinError, PinGuard};
