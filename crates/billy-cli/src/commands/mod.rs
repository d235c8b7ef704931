//! CLI command implementations.

pub mod parse;
pub mod review;

use std::fs;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use billy_core::{LedgerView, format_amount, format_total, parse_amount};

/// Read a receipt OCR text dump from a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse a `--total` argument into a money amount, under the same rule the
/// ledger applies to a staged total: optional currency symbol and grouping
/// commas, non-negative, at most two fractional digits.
pub fn parse_total_arg(raw: &str) -> anyhow::Result<Decimal> {
    parse_amount(raw).ok_or_else(|| anyhow::anyhow!("invalid total amount: {raw}"))
}

/// Render the committed ledger view as a plain-text table.
pub fn render_text(view: &LedgerView) -> String {
    if view.items.is_empty() {
        return format!("No receipt items found.\nTotal: {}\n", format_total(view.total));
    }

    let mut out = String::from("Receipt Items\n");
    for (i, item) in view.items.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<30} x{:<4} {:>10}\n",
            i + 1,
            item.description,
            item.quantity,
            format_amount(item.unit_price),
        ));
    }
    out.push_str(&format!("Total: {}\n", format_total(view.total)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_total_arg_rejects_invalid_amounts() {
        // Same money rule as a staged total: a negative or over-precise
        // amount never reaches the ledger.
        assert!(parse_total_arg("-5.00").is_err());
        assert!(parse_total_arg("28.005").is_err());
        assert!(parse_total_arg("lots").is_err());
    }

    #[test]
    fn test_total_arg_accepts_receipt_style_amounts() {
        let dec = |s| Decimal::from_str(s).unwrap();
        assert_eq!(parse_total_arg("28.00").unwrap(), dec("28.00"));
        assert_eq!(parse_total_arg("$28.00").unwrap(), dec("28.00"));
        assert_eq!(parse_total_arg("1,250.00").unwrap(), dec("1250.00"));
    }
}
