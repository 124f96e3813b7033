//! Number formatting for answer text

/// Rounds half away from zero (687.5 -> 688, -687.5 -> -688)
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Plain decimal rendering: whole numbers without a fraction, others with
/// at most two decimals
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Quantity with thousands separators (5400 -> "5,400", 1234.5 -> "1,234.5")
pub fn format_quantity(value: f64) -> String {
    let plain = format_plain(value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && plain != "0" {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Percentage with one decimal, or "undefined" when it could not be computed
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(687.5), 688);
        assert_eq!(round_half_away(1175.0), 1175);
        assert_eq!(round_half_away(0.5), 1);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(2.4), 2);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(5400.0), "5,400");
        assert_eq!(format_quantity(450.0), "450");
        assert_eq!(format_quantity(1234567.0), "1,234,567");
        assert_eq!(format_quantity(1234.5), "1,234.5");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(-1500.0), "-1,500");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(1150.0), "1150");
        assert_eq!(format_plain(27.25), "27.25");
        assert_eq!(format_plain(27.5), "27.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(11.428571)), "11.4%");
        assert_eq!(format_percent(None), "undefined");
    }
}
