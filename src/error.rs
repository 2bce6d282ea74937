//! Error types.
//!
//! Game actions deliberately have no error taxonomy: hitting or standing
//! after a round completes is a silent no-op, and dealing from an empty
//! deck yields `None`. Parsing card identifiers is the one fallible
//! operation with something to report.

use thiserror::Error;

/// Errors that can occur when parsing a card or suit from its asset-id form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The `_of_` separator between rank and suit is missing.
    #[error("missing `_of_` separator")]
    MissingSeparator,
    /// The rank symbol is not one of A, 2..10, J, Q, K.
    #[error("unknown rank symbol")]
    UnknownRank,
    /// The suit name is not one of the four standard suits.
    #[error("unknown suit name")]
    UnknownSuit,
}
