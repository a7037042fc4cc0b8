/// Insert thousands separators into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Money amount with thousands separators and two decimals
///
/// # Examples
/// ```
/// use backend::shared::format::format_amount;
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

/// Plain integer count
pub fn format_count(value: i64) -> String {
    value.to_string()
}

/// Share of total as "12.3%"
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(42.0), "42.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(6100.0), "6,100.00");
        assert_eq!(format_amount(1234567890.12), "1,234,567,890.12");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_count_has_no_separators() {
        assert_eq!(format_count(15), "15");
        assert_eq!(format_count(123456), "123456");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(81.967), "82.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
