use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for all rendered currency and percentage values
pub const DISPLAY_SCALE: u32 = 2;

/// Round a value for display: 2 decimal places, round-half-up
///
/// Internal accumulation stays unrounded; every renderer goes through this
/// single rounding point so screen, CSV and print digits cannot drift.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a signed amount with exactly 2 decimal places
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.1$}", round_display(amount), DISPLAY_SCALE as usize)
}

/// Format the magnitude of an amount, dropping the sign
///
/// Used for profit/loss display where the sign is carried by a separate
/// status discriminator, never hidden internally.
pub fn format_magnitude(amount: Decimal) -> String {
    format_amount(amount.abs())
}

/// Format a percentage value with 2 decimal places and a trailing `%`
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_amount(value))
}
