//! Conversion between whole-coin amounts and on-chain subunits.
//!
//! Decoded records always carry raw subunits; these helpers exist for
//! callers that want to show or request human-scaled amounts.

use std::fmt;

use rust_decimal::Decimal;

/// Errors that can occur during unit scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    Overflow { context: String },
    UnsupportedDecimals(u32),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::UnsupportedDecimals(d) => {
                write!(f, "Unsupported decimal count: {}", d)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// `wholes * 10^decimals`, checked.
pub fn wholes_to_subunits(wholes: u64, decimals: u32) -> Result<u64, ScalingError> {
    let multiplier = 10u64
        .checked_pow(decimals)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        })?;
    wholes
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", wholes, decimals),
        })
}

/// Exact decimal view of a subunit amount, e.g. `150_000_000` with 8
/// decimals is `1.5`.
pub fn subunits_to_decimal(subunits: u64, decimals: u32) -> Result<Decimal, ScalingError> {
    Decimal::try_from_i128_with_scale(subunits as i128, decimals)
        .map(|d| d.normalize())
        .map_err(|_| ScalingError::UnsupportedDecimals(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wholes_to_subunits() {
        assert_eq!(wholes_to_subunits(10, 8).unwrap(), 1_000_000_000);
        assert_eq!(wholes_to_subunits(0, 6).unwrap(), 0);
        assert!(wholes_to_subunits(u64::MAX, 1).is_err());
        assert!(wholes_to_subunits(1, 20).is_err());
    }

    #[test]
    fn test_subunits_to_decimal() {
        assert_eq!(
            subunits_to_decimal(150_000_000, 8).unwrap(),
            Decimal::from_str("1.5").unwrap()
        );
        assert_eq!(subunits_to_decimal(7, 0).unwrap(), Decimal::from(7));
        assert!(subunits_to_decimal(1, 29).is_err());
    }
}
