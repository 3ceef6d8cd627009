//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

/// Truncate a string to max_len, adding "..." if truncated
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a rand amount with thousands separators, e.g. `R85,500`
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-R{}", grouped)
    } else {
        format!("R{}", grouped)
    }
}

/// Fall back to a dash for absent values in tables
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Pietermaritzburg", 6), "Pie...");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(85500.0), "R85,500");
        assert_eq!(format_money(97900.0), "R97,900");
        assert_eq!(format_money(950.0), "R950");
        assert_eq!(format_money(1234567.4), "R1,234,567");
        assert_eq!(format_money(0.0), "R0");
        assert_eq!(format_money(-2500.0), "-R2,500");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("V001")), "V001");
    }
}
