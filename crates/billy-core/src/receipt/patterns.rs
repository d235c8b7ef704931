//! Regex patterns for receipt line recognition.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One receipt row: quantity, dish name, price. The dish name accepts
    // letters and internal whitespace only, so rows with product codes or
    // digits in the name ("7-Up") do not match. The price needs exactly two
    // decimal digits and may group thousands with commas; the currency
    // symbol is optional because OCR frequently drops it.
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"(\d+)\s+([A-Za-z\s]+)\s+\$?([\d,]+\.\d{2})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_groups() {
        let caps = LINE_ITEM.captures("2 Cheeseburger $9.50").unwrap();
        assert_eq!(&caps[1], "2");
        assert_eq!(caps[2].trim(), "Cheeseburger");
        assert_eq!(&caps[3], "9.50");
    }

    #[test]
    fn test_line_item_rejects_integer_price() {
        assert!(!LINE_ITEM.is_match("2 Cheeseburger $9"));
    }

    #[test]
    fn test_line_item_rejects_digits_in_name() {
        // The digit breaks the name group and no later position yields a
        // quantity-name-price sequence.
        assert!(!LINE_ITEM.is_match("1 7-Up $2.00"));
    }

    #[test]
    fn test_line_item_rejects_label_lines() {
        assert!(!LINE_ITEM.is_match("Tax: $3.12"));
        assert!(!LINE_ITEM.is_match("Thank you for dining with us"));
    }
}
