//! IPv4 address built from four validated octets.
//!
//! Provides [`Ipv4Address`] with its construction paths (bytes, CIDR prefix,
//! 32-bit integer, dotted-decimal string) and the elementwise arithmetic used
//! for subnet calculations.

use super::octet::Octet;
use crate::error::{CalcError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;
use std::ops::{BitAnd, Not};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u32 = 32;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u32) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::range(format!(
            "Cidr can't be higher than 32, got {len}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse one decimal token into an integer, leaving range checks to the caller.
pub(crate) fn parse_number(token: &str) -> Result<i64> {
    let token = token.trim();
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CalcError::range(format!("'{token}' is out of range"))
        }
        _ => CalcError::parse(format!("'{token}' is not a decimal number")),
    })
}

/// IPv4 address as four big-endian octets; index 0 is the most significant byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Address {
    octets: [Octet; OCTETS],
}

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Ipv4Address {
        Ipv4Address {
            octets: [Octet::from_u8(a), Octet::from_u8(b), Octet::from_u8(c), Octet::from_u8(d)],
        }
    }

    /// Build an address from exactly four integers, each validated as an [`Octet`].
    pub fn from_bytes(values: &[i64]) -> Result<Ipv4Address> {
        if values.len() != OCTETS {
            return Err(CalcError::parse(format!(
                "IPv4 is 4 bytes, got {}",
                values.len()
            )));
        }
        let mut octets = [Octet::default(); OCTETS];
        for (slot, value) in octets.iter_mut().zip(values) {
            *slot = Octet::new(*value)?;
        }
        Ok(Ipv4Address { octets })
    }

    /// Subnet mask with `prefix_len` leading ones.
    ///
    /// # Examples
    /// ```
    /// use ip_calc::models::Ipv4Address;
    /// assert_eq!(Ipv4Address::from_cidr(20).unwrap().to_string(), "255.255.240.0");
    /// ```
    pub fn from_cidr(prefix_len: u32) -> Result<Ipv4Address> {
        Ok(Ipv4Address::from_int(get_cidr_mask(prefix_len)?))
    }

    pub fn from_int(value: u32) -> Ipv4Address {
        let [a, b, c, d] = value.to_be_bytes();
        Ipv4Address::new(a, b, c, d)
    }

    /// Parse a dotted-decimal string such as `192.168.0.1`.
    pub fn from_string(text: &str) -> Result<Ipv4Address> {
        let tokens: Vec<&str> = text.split('.').collect();
        if tokens.len() != OCTETS {
            return Err(CalcError::parse(format!(
                "IPv4 contains 4 octets, got '{text}'"
            )));
        }
        let values = tokens
            .iter()
            .map(|t| parse_number(t))
            .collect::<Result<Vec<i64>>>()?;
        Ipv4Address::from_bytes(&values)
    }

    pub fn octets(&self) -> [Octet; OCTETS] {
        self.octets
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets.map(u8::from))
    }

    /// Elementwise sum; the first octet that overflows fails the whole operation.
    pub fn checked_add(&self, other: &Ipv4Address) -> Result<Ipv4Address> {
        self.zip_with(other, Octet::checked_add)
    }

    /// Elementwise difference; the first octet that underflows fails the whole operation.
    pub fn checked_sub(&self, other: &Ipv4Address) -> Result<Ipv4Address> {
        self.zip_with(other, Octet::checked_sub)
    }

    pub fn count_ones(&self) -> u32 {
        self.octets.iter().map(Octet::count_ones).sum()
    }

    pub fn count_zeros(&self) -> u32 {
        self.octets.iter().map(Octet::count_zeros).sum()
    }

    /// Number of bit positions (of 32) equal to `bit`.
    pub fn bit_count(&self, bit: u8) -> u32 {
        self.octets.iter().map(|o| o.bit_count(bit)).sum()
    }

    fn zip_with<F>(&self, other: &Ipv4Address, op: F) -> Result<Ipv4Address>
    where
        F: Fn(Octet, Octet) -> Result<Octet>,
    {
        let mut octets = [Octet::default(); OCTETS];
        for (i, slot) in octets.iter_mut().enumerate() {
            *slot = op(self.octets[i], other.octets[i])?;
        }
        Ok(Ipv4Address { octets })
    }
}

impl FromStr for Ipv4Address {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Address::from_string(s)
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Ipv4Address::from_int(value)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.to_u32()
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        let [a, b, c, d] = addr.octets();
        Ipv4Address::new(a, b, c, d)
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.to_u32())
    }
}

impl Not for Ipv4Address {
    type Output = Ipv4Address;

    fn not(self) -> Ipv4Address {
        Ipv4Address {
            octets: self.octets.map(|o| !o),
        }
    }
}

impl BitAnd for Ipv4Address {
    type Output = Ipv4Address;

    fn bitand(self, rhs: Ipv4Address) -> Ipv4Address {
        let mut octets = self.octets;
        for (o, r) in octets.iter_mut().zip(rhs.octets) {
            *o = *o & r;
        }
        Ipv4Address { octets }
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::from_string(&s)
            .map_err(|e| de::Error::custom(format!("invalid IP address {s}: {e}")))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
