//! Display formatting helpers shared across components

/// Format a dollar cost with four decimal places, e.g. `$0.0123`
pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}

/// Format an integer with thousands separators, e.g. `1,234,567`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Turn a snake_case field or agent name into a Title Case label,
/// e.g. `total_market_size` → `Total Market Size`
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_uses_four_decimals() {
        assert_eq!(format_cost(0.1234567), "$0.1235");
        assert_eq!(format_cost(0.0), "$0.0000");
        assert_eq!(format_cost(12.5), "$12.5000");
    }

    #[test]
    fn numbers_group_by_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn keys_humanize_to_title_case() {
        assert_eq!(humanize_key("extra_metric"), "Extra Metric");
        assert_eq!(humanize_key("total_market_size"), "Total Market Size");
        assert_eq!(humanize_key("plain"), "Plain");
        assert_eq!(humanize_key("__odd__"), "Odd");
    }
}
