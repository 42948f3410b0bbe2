// Monetary helpers shared by the ledger calculator and the display layer.
//
// All monetary math in this crate uses `rust_decimal::Decimal` (fixed-point)
// rather than binary floats. Intermediate results keep their full scale;
// rounding to two decimal places happens only when a value is formatted
// for display.

use rust_decimal::Decimal;

/// Decimal places used when presenting amounts to the user.
pub const DISPLAY_SCALE: u32 = 2;

/// Coerce raw text from an input widget into a decimal amount.
///
/// Empty, whitespace-only or unparseable input yields zero. Incomplete
/// rows are caught later by submission validation, so the calculator
/// itself never rejects what the user typed.
pub fn coerce_decimal(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Round an amount to display scale using banker's rounding.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Format an amount as Indian Rupees with two decimal places.
pub fn format_inr(amount: Decimal) -> String {
    format!(
        "\u{20b9}{:.width$}",
        round_display(amount),
        width = DISPLAY_SCALE as usize
    )
}
