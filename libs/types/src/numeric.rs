//! Fixed-point price and quantity types
//!
//! Prices are quoted in 7.5 format: up to 7 decimal digits before the
//! point and exactly 5 after it. Storing the two parts as integers avoids
//! the rounding error a binary float would introduce into price
//! comparisons and fill-price checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of digits in the integer part of a price
pub const INT_PART_DIGITS: usize = 7;
/// Exact number of digits in the fractional part of a price
pub const FRAC_PART_DIGITS: usize = 5;

const MAX_INT_PART: u32 = 9_999_999;
const MAX_FRAC_PART: u32 = 99_999;

/// Limit price in 7.5 fixed-point format
///
/// The derived ordering is lexicographic on `(int_part, frac_part)`,
/// which matches numeric order because the fractional width is fixed.
/// Prices are immutable once constructed and support no arithmetic;
/// the engine only compares and formats them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Price {
    int_part: u32,
    frac_part: u32,
}

impl Price {
    /// Create a price from its integer and fractional parts
    ///
    /// # Panics
    /// Panics if either part exceeds its digit budget
    pub fn new(int_part: u32, frac_part: u32) -> Self {
        Self::try_new(int_part, frac_part).expect("price part out of range")
    }

    /// Try to create a price, returning None if a part is out of range
    pub fn try_new(int_part: u32, frac_part: u32) -> Option<Self> {
        if int_part > MAX_INT_PART || frac_part > MAX_FRAC_PART {
            return None;
        }
        Some(Self {
            int_part,
            frac_part,
        })
    }

    /// Digits before the point
    pub fn int_part(&self) -> u32 {
        self.int_part
    }

    /// Digits after the point, scaled by 10^-5
    pub fn frac_part(&self) -> u32 {
        self.frac_part
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fractional part is always printed 5 digits wide
        write!(f, "{}.{:05}", self.int_part, self.frac_part)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    /// Parse a price from `<digits>.<digits>` text
    ///
    /// The fractional part must be exactly 5 digits wide; no rounding or
    /// truncation is applied to a wrong-width fraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_str, frac_str) = s.split_once('.').ok_or(PriceParseError::MissingSeparator)?;

        if int_str.is_empty() {
            return Err(PriceParseError::EmptyIntegerPart);
        }
        if int_str.starts_with('-') || frac_str.starts_with('-') {
            return Err(PriceParseError::Negative);
        }
        if frac_str.len() != FRAC_PART_DIGITS {
            return Err(PriceParseError::FractionWidth(frac_str.len()));
        }
        if int_str.len() > INT_PART_DIGITS {
            return Err(PriceParseError::IntegerTooWide);
        }

        let int_part = int_str
            .parse::<u32>()
            .map_err(|_| PriceParseError::NotANumber)?;
        let frac_part = frac_str
            .parse::<u32>()
            .map_err(|_| PriceParseError::NotANumber)?;

        Ok(Self {
            int_part,
            frac_part,
        })
    }
}

/// Errors from parsing a textual price
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("price is missing the '.' separator")]
    MissingSeparator,

    #[error("price integer part is empty")]
    EmptyIntegerPart,

    #[error("price must not be negative")]
    Negative,

    #[error("price integer part exceeds {INT_PART_DIGITS} digits")]
    IntegerTooWide,

    #[error("price fractional part must be exactly {FRAC_PART_DIGITS} digits, found {0}")]
    FractionWidth(usize),

    #[error("price part is not a number")]
    NotANumber,
}

/// Open quantity of an order
///
/// Quantities fit in a `u16` per the wire format. A quantity only ever
/// decreases as fills are applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u16);

impl Quantity {
    /// Create a quantity
    pub fn new(qty: u16) -> Self {
        Self(qty)
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Subtract a fill from this quantity
    ///
    /// # Panics
    /// Panics if `fill` exceeds the available quantity
    pub fn fill(self, fill: Quantity) -> Self {
        assert!(fill.0 <= self.0, "fill exceeds open quantity");
        Self(self.0 - fill.0)
    }

    /// Inner value
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
