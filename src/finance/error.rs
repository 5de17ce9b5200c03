use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Payment method not verified")]
    PaymentMethodUnverified,

    #[error("Invalid amount: must be positive")]
    InvalidAmount,

    #[error("Amount below minimum: {0}")]
    BelowMinimum(String),

    #[error("Withdrawal request not found")]
    RequestNotFound,

    #[error("Invalid status transition: request is {0}")]
    InvalidStatusTransition(String),
}
