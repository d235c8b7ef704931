//! Core library for receipt bill-splitting.
//!
//! This crate provides:
//! - Line-item extraction from raw receipt OCR text
//! - An editable ledger with staged, commit-or-discard corrections
//! - Receipt data models and display formatting

pub mod error;
pub mod ledger;
pub mod models;
pub mod receipt;

pub use error::{LedgerError, Result};
pub use ledger::{
    FieldStatus, ItemCommit, ItemDraft, ItemField, Ledger, LedgerView, TotalCommit, parse_amount,
};
pub use models::receipt::{LineItem, TOTAL_PLACEHOLDER, format_amount, format_total};
pub use receipt::{LineItemExtractor, extract_items};
