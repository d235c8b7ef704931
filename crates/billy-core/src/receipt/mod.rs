//! Line-item extraction from raw receipt OCR text.

mod extractor;
pub mod patterns;

pub use extractor::{LineItemExtractor, extract_items};
