//! Loose number parsing: thousands separators, `$`, `%` and accounting
//! parentheses.

use crate::predicates::is_real_number;

/// Parse a number written the way people type it into a cell.
///
/// Plain numbers parse directly. Otherwise commas between digits and `$`
/// signs are removed, and every `%` divides the result by 100. If that still
/// isn't a number, a parenthesized part is unwrapped and the result negated.
///
/// ```
/// use cellfmt::parse_fuzzy_number;
///
/// assert_eq!(parse_fuzzy_number("(1,234.50)"), Some(-1234.5));
/// assert_eq!(parse_fuzzy_number("45%"), Some(0.45));
/// assert_eq!(parse_fuzzy_number("$1,000"), Some(1000.0));
/// assert_eq!(parse_fuzzy_number("twelve"), None);
/// ```
pub fn parse_fuzzy_number(text: &str) -> Option<f64> {
    if is_real_number(text) {
        return parse_real(text);
    }

    let mut weight = 1.0;
    let stripped: String = strip_group_commas(text)
        .chars()
        .filter(|&c| match c {
            '$' => false,
            '%' => {
                weight *= 100.0;
                false
            }
            _ => true,
        })
        .collect();

    if is_real_number(&stripped) {
        return parse_real(&stripped).map(|v| v / weight);
    }

    let open = stripped.find('(')?;
    let close = stripped.rfind(')')?;
    if close < open {
        return None;
    }
    let unwrapped = format!(
        "{}{}{}",
        &stripped[..open],
        &stripped[open + 1..close],
        &stripped[close + 1..]
    );
    weight = -weight;

    if is_real_number(&unwrapped) {
        return parse_real(&unwrapped).map(|v| v / weight);
    }
    None
}

/// Parse the loose number notation accepted for percent and decimal input.
///
/// Surrounding whitespace is ignored.
pub fn parse_loose_number(text: &str) -> Option<f64> {
    parse_fuzzy_number(text.trim())
}

fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Drop commas that sit between two digits.
fn strip_group_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = c == ','
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            !between_digits
        })
        .map(|(_, &c)| c)
        .collect()
}
