/// Shared formatting utilities for the UI layer.
///
/// Dashboard figures are shown the way the analysts read them: whole US
/// dollars with comma separators and one-decimal percentages.

/// Group the digits of a non-negative integer with commas ("1234567" -> "1,234,567").
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as USD without decimals, e.g. `$120,000` or `-$1,500`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Format a value already expressed in thousands of USD, e.g. `$120K`.
pub fn format_thousands(value: f64) -> String {
    let whole = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{sign}${}K", group_thousands(&format!("{:.0}", whole.abs())))
}

/// Format a percentage with one decimal, e.g. `45.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a ticket count with comma separators.
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// IAR scores are shown with one decimal.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}
