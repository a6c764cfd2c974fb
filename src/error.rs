use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackError {
    #[error("No samples have been added since the last reset")]
    Unseeded,
    #[error("Lookback of {back} samples exceeds ring capacity {capacity}")]
    OutOfRange { back: usize, capacity: usize },
}
