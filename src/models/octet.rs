//! A single validated byte of an IPv4 address.

use crate::error::{CalcError, Result};
use std::fmt;
use std::ops::{BitAnd, Not};

/// Largest value an [`Octet`] can hold.
pub const MAX_OCTET: i64 = 255;

/// Number of bit positions in an [`Octet`].
pub const OCTET_BITS: u32 = 8;

/// An 8-bit unsigned value whose arithmetic never wraps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Octet(u8);

impl Octet {
    /// Build an [`Octet`] from any integer, rejecting values outside 0-255.
    ///
    /// # Examples
    /// ```
    /// use ip_calc::models::Octet;
    /// assert_eq!(Octet::new(192).unwrap().value(), 192);
    /// assert!(Octet::new(256).is_err());
    /// assert!(Octet::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Octet> {
        if value > MAX_OCTET {
            return Err(CalcError::range(format!(
                "Octet should be a decimal number 0-255, got {value}"
            )));
        }
        if value < 0 {
            return Err(CalcError::range(format!(
                "Octet can't be lower than 0, got {value}"
            )));
        }
        Ok(Octet(value as u8))
    }

    /// Copy an already-valid byte; every `u8` is in range.
    pub const fn from_u8(value: u8) -> Octet {
        Octet(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Sum of two octets, failing instead of wrapping past 255.
    pub fn checked_add(self, other: Octet) -> Result<Octet> {
        Octet::new(i64::from(self.0) + i64::from(other.0))
    }

    /// Difference of two octets, failing instead of wrapping below 0.
    pub fn checked_sub(self, other: Octet) -> Result<Octet> {
        Octet::new(i64::from(self.0) - i64::from(other.0))
    }

    /// Number of bits set to 1.
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Number of bits set to 0.
    pub fn count_zeros(&self) -> u32 {
        OCTET_BITS - self.count_ones()
    }

    /// Number of bit positions equal to `bit` (anything non-zero counts ones).
    pub fn bit_count(&self, bit: u8) -> u32 {
        if bit != 0 {
            self.count_ones()
        } else {
            self.count_zeros()
        }
    }
}

impl From<u8> for Octet {
    fn from(value: u8) -> Self {
        Octet::from_u8(value)
    }
}

impl From<Octet> for u8 {
    fn from(octet: Octet) -> Self {
        octet.0
    }
}

impl TryFrom<i64> for Octet {
    type Error = CalcError;

    fn try_from(value: i64) -> Result<Self> {
        Octet::new(value)
    }
}

impl Not for Octet {
    type Output = Octet;

    fn not(self) -> Octet {
        Octet(!self.0)
    }
}

impl BitAnd for Octet {
    type Output = Octet;

    fn bitand(self, rhs: Octet) -> Octet {
        Octet(self.0 & rhs.0)
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
