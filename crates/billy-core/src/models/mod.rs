//! Data models for parsed receipts.

pub mod receipt;

pub use receipt::{LineItem, TOTAL_PLACEHOLDER, format_amount, format_total};
