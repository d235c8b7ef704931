//! Error types for the billy-core library.

use thiserror::Error;

/// Errors raised by the editable ledger.
///
/// Only caller contract violations surface here. Malformed receipt text and
/// unparseable staged edits are absorbed by design: extraction yields no item
/// and commit leaves the prior value in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An item index outside the ledger was addressed.
    #[error("item index {index} out of range (ledger has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A field was updated or committed without an open edit for the item.
    #[error("no open edit for item {index}")]
    NoOpenEdit { index: usize },

    /// The total was updated or committed without an open total edit.
    #[error("no open total edit")]
    NoOpenTotalEdit,
}

/// Result type for the billy library.
pub type Result<T> = std::result::Result<T, LedgerError>;
