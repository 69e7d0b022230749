//! Set number of a stat event

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A positive integral set number.
///
/// Held as an `f64` so every integer a browser client can send is accepted
/// as-is, including values past `u64::MAX`. Always serialized without a
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SetNumber(f64);

impl SetNumber {
    /// `Some` for finite integral values of at least 1
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value.fract() == 0.0 && value >= 1.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display prints integral values without a fraction or exponent
        write!(f, "{}", self.0)
    }
}

impl Serialize for SetNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Below 1e21 browsers print every digit; past that, exponent form
        if self.0 < 1e21 {
            serializer.serialize_u128(self.0 as u128)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for SetNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).ok_or_else(|| {
            serde::de::Error::custom("setNumber must be a positive integer")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_any_positive_integer() {
        assert!(SetNumber::new(1.0).is_some());
        assert!(SetNumber::new(9_007_199_254_740_992.0).is_some());
        assert!(SetNumber::new(1e20).is_some());

        for bad in [0.0, -1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert!(SetNumber::new(bad).is_none(), "{}", bad);
        }
    }

    #[test]
    fn test_serializes_without_fraction() {
        let small = SetNumber::new(3.0).unwrap();
        assert_eq!(serde_json::to_string(&small).unwrap(), "3");

        let big = SetNumber::new(1e20).unwrap();
        assert_eq!(serde_json::to_string(&big).unwrap(), "100000000000000000000");
        assert_eq!(big.to_string(), "100000000000000000000");
    }

    #[test]
    fn test_deserialize_validates() {
        let n: SetNumber = serde_json::from_str("2").unwrap();
        assert_eq!(n.get(), 2.0);
        assert!(serde_json::from_str::<SetNumber>("0").is_err());
        assert!(serde_json::from_str::<SetNumber>("2.5").is_err());
    }
}
