use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Rupee rounding and lenient numeric parsing.
///
/// Every monetary figure that reaches a persisted column or a proposal is
/// rounded UP to the whole rupee. Issued quotations were reconciled against
/// this rule, so it must hold at every boundary, not just the grand total.

/// Round an amount up to the next whole rupee.
pub fn ceil_rupees(amount: Decimal) -> Decimal {
    amount.ceil()
}

/// Format a whole-rupee amount with Indian digit grouping (12,34,567).
///
/// The value is ceiled first so a fractional intermediate can never leak
/// into a rendered document.
pub fn format_rupees(amount: Decimal) -> String {
    let whole = ceil_rupees(amount);
    let negative = whole < Decimal::ZERO;
    let digits = whole.abs().normalize().to_string();

    // Last three digits stand alone, every group of two before them gets
    // its own separator.
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let head_bytes = head.as_bytes();
        let mut idx = head_bytes.len();
        while idx > 2 {
            parts.push(String::from_utf8_lossy(&head_bytes[idx - 2..idx]).into_owned());
            idx -= 2;
        }
        parts.push(String::from_utf8_lossy(&head_bytes[..idx]).into_owned());
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn decimal_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Deserialize a money/rate field that may arrive as a number, a numeric
/// string, null, or garbage. Anything unparseable coerces to zero so an
/// in-progress form never blocks the running total.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value).unwrap_or(Decimal::ZERO))
}

/// Like `lenient_decimal`, but absence and garbage mean "not provided"
/// rather than zero (used where a catalog fallback exists).
pub fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Deserialize a count field (rooms, occupancy, quantity) with the same
/// leniency. Fractional input truncates, garbage means "not provided".
pub fn lenient_opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value).and_then(|d| d.trunc().to_u32()))
}
