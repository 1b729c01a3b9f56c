use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::selection::Selection;

pub const CURRENCY_SYMBOL: &str = "₫";

pub fn total_price(selection: &Selection) -> Decimal {
    selection.components().map(|component| component.price).sum()
}

/// Formats an amount the Vietnamese way: `.` between thousands, `,` before up to three
/// fraction digits, currency symbol last. `12990000` becomes `12.990.000 ₫`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + 8);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(digit);
    }
    if let Some(fraction) = fraction {
        formatted.push(',');
        formatted.push_str(fraction);
    }
    formatted.push(' ');
    formatted.push_str(CURRENCY_SYMBOL);
    formatted
}

/// Plain-text build sheet: one `SLOT: name - price` line per filled slot, then the
/// total and the score.
pub fn build_summary(selection: &Selection, score: u8) -> String {
    let lines: Vec<String> = selection
        .iter()
        .filter_map(|(slot, component)| {
            component.map(|component| {
                format!(
                    "{}: {} - {}",
                    slot.as_str().to_ascii_uppercase(),
                    component.name,
                    format_price(component.price)
                )
            })
        })
        .collect();

    format!(
        "PC build\n\n{}\n\nTotal: {}\nCompatibility: {score}%",
        lines.join("\n"),
        format_price(total_price(selection))
    )
}
