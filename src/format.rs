//! Display formatting for amounts and runway

use crate::projection::Runway;

/// Group integer digits the en-IN way: last three, then pairs (`12,34,567`)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee amount, e.g. `₹50,00,000` or `-₹1,00,000`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&digits))
}

/// Plain number with en-IN grouping and up to three decimals
pub fn format_number(value: f64) -> String {
    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, group_indian(int_part))
    } else {
        format!("{}{}.{}", sign, group_indian(int_part), frac_part)
    }
}

/// Runway as shown on the metric card: "Profitable", "2y 3m", "1y", "7m"
pub fn format_runway(runway: &Runway) -> String {
    let months = match runway {
        Runway::Indefinite => return "Profitable".to_string(),
        Runway::Finite(months) => *months,
    };

    let years = (months / 12.0).floor();
    let remaining = (months % 12.0).round();

    if years > 0.0 && remaining > 0.0 {
        format!("{}y {}m", years, remaining)
    } else if years > 0.0 {
        format!("{}y", years)
    } else {
        format!("{}m", months.round())
    }
}
