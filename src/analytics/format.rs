// src/analytics/format.rs

// Formatação para exibição no padrão en-IN: rúpias sem casas decimais e
// agrupamento indiano (12,34,567). Valor não finito vira "N/A".

use rust_decimal::{prelude::ToPrimitive, Decimal};

pub const NOT_AVAILABLE: &str = "N/A";

// "1234567" -> "12,34,567": último grupo de 3 dígitos, depois grupos de 2.
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

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = amount.abs().round();
    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&format!("{:.0}", rounded)))
}

/// Número com agrupamento indiano e até 3 casas decimais.
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let fixed = format!("{:.3}", num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if num < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, group_indian(int_part))
    } else {
        format!("{}{}.{}", sign, group_indian(int_part), frac_part)
    }
}

/// "+12.5% YoY" / "-3.0% YoY"
pub fn format_growth(percent: f64) -> String {
    if !percent.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    if percent > 0.0 {
        format!("+{:.1}% YoY", percent)
    } else {
        format!("{:.1}% YoY", percent)
    }
}
