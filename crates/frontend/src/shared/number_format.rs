//! Numeric formatting in the Brazilian convention: thousands grouped with
//! '.', decimals separated by ',' (grouping and decimal swapped relative to
//! the international default).

/// Insert '.' every three digits of an integer-digit string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// "R$ 1.234,56"
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("R$ {},{}", group_thousands(int_part), dec_part)
}

/// "1.234" — integers (quantities) grouped, no decimals
pub fn format_int(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// "92.5%" — one decimal, as displayed by the KPI card
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
