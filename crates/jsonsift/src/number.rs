//! JSON numbers with the lexical distinction preserved.
//!
//! A literal with neither a decimal point nor an exponent becomes an
//! [`Number::Integer`] of unbounded precision; everything else becomes an
//! exact [`Number::Decimal`] that keeps the scale of the source text
//! (`0.5` is five tenths, `1.0E+2` is one hundred at one decimal place,
//! never an IEEE double).
use core::fmt;
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::ErrorKind;

/// A parsed JSON number.
#[derive(Debug, Clone)]
pub enum Number {
    /// A literal without `.` or exponent, at unbounded precision.
    Integer(BigInt),
    /// Any fractional or exponent form, as an exact decimal.
    Decimal(BigDecimal),
}

impl Number {
    /// Parses a raw number lexeme.
    pub(crate) fn from_literal(raw: &[u8]) -> Result<Self, ErrorKind> {
        let text = core::str::from_utf8(raw).map_err(|_| ErrorKind::InvalidNumber)?;
        if raw.iter().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            let dec = BigDecimal::from_str(text).map_err(|_| ErrorKind::InvalidNumber)?;
            Ok(Number::Decimal(dec))
        } else {
            let int = BigInt::from_str(text).map_err(|_| ErrorKind::InvalidNumber)?;
            Ok(Number::Integer(int))
        }
    }

    /// Returns `true` for the integer variant.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// The value as an `i64`, if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => i64::try_from(n).ok(),
            Number::Decimal(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// Parses any JSON number literal, applying the same integer/decimal split
/// as the parser.
impl FromStr for Number {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_literal(s.as_bytes())
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Integer(BigInt::from(v))
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Number::Integer(BigInt::from(v))
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Number::Integer(v)
    }
}

impl From<BigDecimal> for Number {
    fn from(v: BigDecimal) -> Self {
        Number::Decimal(v)
    }
}

/// Numeric equality: `1.0e1` equals `10` even though the variants differ.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Decimal(a), Number::Decimal(b)) => a == b,
            (Number::Integer(a), Number::Decimal(b)) | (Number::Decimal(b), Number::Integer(a)) => {
                BigDecimal::from(a.clone()) == *b
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Number::Integer(n) => match self.as_i64() {
                Some(v) => serializer.serialize_i64(v),
                None => serializer.collect_str(n),
            },
            // Decimals serialize as strings so no precision is lost.
            Number::Decimal(d) => serializer.collect_str(d),
        }
    }
}
