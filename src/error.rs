//! Lotto-specific errors
//!
//! Most things in a draw cannot fail, only the user input and the growth of
//! the table of already-drawn tickets can.
use thiserror::Error;

/// An error that drawing tickets could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LottoError {
    /// `{0}` is the raw argument that could not be used as a ticket count.
    #[error("invalid ticket count `{0}`, must be a positive integer")]
    InvalidArgument(String),
    /// `{0}` is the number of tickets already remembered when growing failed.
    #[error("could not grow the table of drawn tickets past {0} entries")]
    ResourceExhaustion(usize),
}
