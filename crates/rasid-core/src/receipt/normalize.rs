//! OCR artifact cleanup for receipt transcripts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Rs / INR / ₹ in any casing, plus trailing padding.
    static ref CURRENCY_MARKER: Regex = Regex::new(r"(?i)(?:Rs\.?|INR|₹)[ \t]*").unwrap();

    // A digit separated from the next digit by OCR-inserted spacing.
    static ref SPLIT_DIGITS: Regex = Regex::new(r"([0-9])[ \t]+([0-9])").unwrap();

    // Zero substituted for the letter o inside a word.
    static ref ZERO_IN_WORD: Regex = Regex::new(r"(?i)([a-z])0([a-z])").unwrap();

    // Letter O substituted for a zero between digits.
    static ref O_IN_NUMBER: Regex = Regex::new(r"([0-9])O([0-9])").unwrap();

    // Decimal point split off its digits, or misread as a comma.
    static ref SPLIT_DECIMAL: Regex = Regex::new(r"([0-9])[ \t]*[.,][ \t]*([0-9]{2})\b").unwrap();

    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Clean common OCR artifacts out of a receipt transcript.
///
/// Total and near-idempotent: it never fails, and re-running it on
/// already-normalized text produces no further change for well-formed
/// input. Whitespace classes are horizontal-only throughout, so the line
/// structure the amount extractor scans is preserved.
pub fn normalize(text: &str) -> String {
    // Pipe is almost always a misread capital I on receipts.
    let text = text.replace('|', "I");
    let text = text.replace(['[', '{'], "(").replace([']', '}'], ")");

    let text = CURRENCY_MARKER.replace_all(&text, "Rs. ");
    let text = SPLIT_DIGITS.replace_all(&text, "${1}${2}");
    let text = ZERO_IN_WORD.replace_all(&text, "${1}o${2}");
    let text = O_IN_NUMBER.replace_all(&text, "${1}0${2}");
    let text = SPLIT_DECIMAL.replace_all(&text, "${1}.${2}");

    let lines: Vec<String> = text
        .lines()
        .map(|line| SPACE_RUNS.replace_all(line.trim(), " ").into_owned())
        .collect();

    lines.join("\n").trim_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pipe_becomes_i() {
        assert_eq!(normalize("B|LL"), "BILL");
    }

    #[test]
    fn test_brackets_fold_to_parens() {
        assert_eq!(normalize("[GST] {18%}"), "(GST) (18%)");
    }

    #[test]
    fn test_currency_markers_canonicalize() {
        assert_eq!(normalize("INR 500"), "Rs. 500");
        assert_eq!(normalize("₹500"), "Rs. 500");
        assert_eq!(normalize("rs 500"), "Rs. 500");
        assert_eq!(normalize("Rs. 500"), "Rs. 500");
    }

    #[test]
    fn test_split_digits_rejoin() {
        assert_eq!(normalize("total 1 234"), "total 1234");
    }

    #[test]
    fn test_zero_inside_word_becomes_o() {
        assert_eq!(normalize("z0mato"), "zomato");
    }

    #[test]
    fn test_letter_o_between_digits_becomes_zero() {
        assert_eq!(normalize("5O0"), "500");
    }

    #[test]
    fn test_split_decimal_repairs() {
        assert_eq!(normalize("499 . 00"), "499.00");
        assert_eq!(normalize("499,00"), "499.00");
    }

    #[test]
    fn test_whitespace_collapses_but_lines_survive() {
        assert_eq!(normalize("  a   b  \n\tc  d "), "a b\nc d");
    }

    #[test]
    fn test_idempotent_on_receipt_text() {
        let samples = [
            "D0minos [Order] | 2 Pizzas\nGrand  Total :  ₹ 49 9 . 00",
            "PNR: 24681357\nTotal Fare Rs. 1,250.00",
            "",
            "   \n   ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert_eq!(normalize(""), "");
    }
}
