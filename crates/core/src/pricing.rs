use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents for display. Stored amounts are never rounded.
pub fn present_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

pub fn format_amount(amount: Decimal) -> String {
    present_amount(amount).to_string()
}

pub fn format_price(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}
