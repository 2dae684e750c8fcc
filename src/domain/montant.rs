//! Monetary rounding and display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to centimes.
pub fn arrondir(montant: Decimal) -> Decimal {
    montant.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display, French style: "929,40 €".
pub fn format_eur(montant: Decimal) -> String {
    format!("{:.2} €", arrondir(montant)).replace('.', ",")
}
