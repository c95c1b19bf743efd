//! Drink tally error types.

use thiserror::Error;

/// Errors that can occur when adjusting the drink tally
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("No drinks recorded. The tally is already at zero")]
    Empty,
}
