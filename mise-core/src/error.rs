use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount is not numeric: {0:?}")]
    NotNumeric(String),

    #[error("Amount is not finite: {0}")]
    NotFinite(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Cannot scale non-finite amount: {0}")]
    NonFiniteAmount(f64),

    #[error("Cannot scale by non-finite multiplier: {0}")]
    NonFiniteMultiplier(f64),

    #[error("Scaling {amount} by {multiplier} overflows")]
    Overflow { amount: f64, multiplier: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DuplicateCheckError {
    #[error("Missing required field: title")]
    MissingTitle,
}
