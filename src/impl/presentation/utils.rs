use num_format::{Locale, ToFormattedString as _};

use crate::entities::ArrearValue;

/// Format an amount the way Indonesian tax documents print it: '.' as the
/// thousands separator and ',' as the decimal mark (1.234.567,5). At most
/// two decimal places are kept, trailing zeros dropped.
pub(crate) fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let integer_part = (cents / 100).to_formatted_string(&Locale::id);
    let fractional_part = format!("{:02}", cents % 100);
    let fractional_part = fractional_part.trim_end_matches('0');
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fractional_part.is_empty() {
        format!("{}{}", sign, integer_part)
    } else {
        format!(
            "{}{}{}{}",
            sign,
            integer_part,
            Locale::id.decimal(),
            fractional_part
        )
    }
}

pub(crate) fn format_value(value: Option<ArrearValue>) -> String {
    match value.and_then(|v| v.amount()) {
        Some(amount) => format_amount(amount),
        None => "-".to_string(),
    }
}
