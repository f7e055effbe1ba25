//! # Currency
//!
//! Currency handling and conversion to minor units (cents).
//! Prices arrive as exact decimals; conversion rounds half away from zero.

use crate::error::{PaymentError, PaymentResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code, as the provider expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit.
    ///
    /// `19.99` becomes `1999`. Ties round away from zero, so `0.005` becomes `1`.
    pub fn to_minor_units(&self, amount: Decimal) -> PaymentResult<i64> {
        if amount < Decimal::ZERO {
            return Err(PaymentError::InvalidPrice {
                message: format!("{} is negative", amount),
            });
        }

        let multiplier = Decimal::from(10_i64.pow(self.decimal_places()));
        amount
            .checked_mul(multiplier)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|minor| minor.to_i64())
            .ok_or_else(|| PaymentError::InvalidPrice {
                message: format!("{} is out of range for {}", amount, self),
            })
    }

    /// Convert from smallest unit back to decimal
    pub fn from_minor_units(&self, amount: i64) -> Decimal {
        Decimal::new(amount, self.decimal_places())
    }

    /// Format a minor-unit amount for display (e.g., "$10.00")
    pub fn display(&self, amount: i64) -> String {
        let symbol = match self {
            Currency::USD => "$",
        };
        format!("{}{}", symbol, self.from_minor_units(amount))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
