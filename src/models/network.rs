//! Subnet facts derived from an address and its mask.

use super::ipv4::{parse_number, Ipv4Address, MAX_LENGTH};
use crate::error::{CalcError, Result};
use std::fmt;

/// An address paired with a subnet mask.
///
/// The mask is expected to be a contiguous run of leading ones but this is not
/// checked; other masks still compute, with meaningless results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    address: Ipv4Address,
    mask: Ipv4Address,
}

impl Network {
    pub fn from_parts(address: Ipv4Address, mask: Ipv4Address) -> Network {
        Network { address, mask }
    }

    /// Parse a network from `A.B.C.D/N`, or from `A.B.C.D` plus an explicit
    /// dotted-decimal mask.
    ///
    /// # Examples
    /// ```
    /// use ip_calc::models::Network;
    /// let net = Network::new("192.168.1.7/24", None).unwrap();
    /// assert_eq!(net.network_address().to_string(), "192.168.1.0");
    /// let same = Network::new("192.168.1.7", Some("255.255.255.0")).unwrap();
    /// assert_eq!(net, same);
    /// ```
    pub fn new(spec: &str, mask: Option<&str>) -> Result<Network> {
        match mask {
            Some(mask) => Ok(Network {
                address: Ipv4Address::from_string(spec)?,
                mask: Ipv4Address::from_string(mask)?,
            }),
            None => {
                let (addr, prefix) = spec.rsplit_once('/').ok_or_else(|| {
                    CalcError::parse(format!("'{spec}' has no /prefix and no mask was given"))
                })?;
                let prefix = parse_number(prefix)?;
                let prefix = u32::try_from(prefix)
                    .ok()
                    .filter(|p| *p <= MAX_LENGTH)
                    .ok_or_else(|| {
                        CalcError::range(format!("Cidr must be between 0 and 32, got {prefix}"))
                    })?;
                let mask = Ipv4Address::from_cidr(prefix)?;
                Ok(Network {
                    address: Ipv4Address::from_string(addr)?,
                    mask,
                })
            }
        }
    }

    /// Build from already-split input: one token in CIDR form, or address and mask.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Network> {
        match args {
            [spec] => Network::new(spec.as_ref(), None),
            [spec, mask] => Network::new(spec.as_ref(), Some(mask.as_ref())),
            _ => Err(CalcError::parse(format!(
                "expected 'address/prefix' or 'address mask', got {} arguments",
                args.len()
            ))),
        }
    }

    pub fn address(&self) -> Ipv4Address {
        self.address
    }

    pub fn mask(&self) -> Ipv4Address {
        self.mask
    }

    pub fn network_address(&self) -> Ipv4Address {
        self.address & self.mask
    }

    pub fn broadcast_address(&self) -> Result<Ipv4Address> {
        self.network_address().checked_add(&!self.mask)
    }

    pub fn first_host(&self) -> Result<Ipv4Address> {
        self.network_address()
            .checked_add(&Ipv4Address::from_int(1))
    }

    pub fn last_host(&self) -> Result<Ipv4Address> {
        self.broadcast_address()?
            .checked_sub(&Ipv4Address::from_int(1))
    }

    /// Usable hosts: every host-bit combination minus network and broadcast.
    ///
    /// /31 gives 0 and /32 gives -1; neither is special-cased.
    pub fn max_hosts(&self) -> i64 {
        (1i64 << self.mask.count_zeros()) - 2
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IP: {}\nMask: {}", self.address, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_24() {
        let net = Network::new("192.168.1.0/24", None).unwrap();
        assert_eq!(net.network_address(), Ipv4Address::new(192, 168, 1, 0));
        assert_eq!(
            net.broadcast_address().unwrap(),
            Ipv4Address::new(192, 168, 1, 255)
        );
        assert_eq!(net.first_host().unwrap(), Ipv4Address::new(192, 168, 1, 1));
        assert_eq!(net.last_host().unwrap(), Ipv4Address::new(192, 168, 1, 254));
        assert_eq!(net.max_hosts(), 254);
    }

    #[test]
    fn test_explicit_mask_matches_cidr() {
        let a = Network::new("10.0.0.5", Some("255.255.255.0")).unwrap();
        let b = Network::new("10.0.0.5/24", None).unwrap();
        assert_eq!(a.network_address(), b.network_address());
        assert_eq!(a.broadcast_address(), b.broadcast_address());
        assert_eq!(a.first_host(), b.first_host());
        assert_eq!(a.last_host(), b.last_host());
        assert_eq!(a.max_hosts(), b.max_hosts());
    }

    #[test]
    fn test_errors() {
        assert!(Network::new("999.1.1.1/24", None).unwrap_err().is_range());
        assert!(Network::new("1.2.3/24", None).unwrap_err().is_parse());
        assert!(Network::new("10.0.0.0/33", None).unwrap_err().is_range());
        assert!(Network::new("10.0.0.0/-1", None).unwrap_err().is_range());
        assert!(Network::new("10.0.0.0/abc", None).unwrap_err().is_parse());
        assert!(Network::new("10.0.0.0/99999999999999999999", None)
            .unwrap_err()
            .is_range());
        assert!(Network::new("10.0.0.0/2x", None).unwrap_err().is_parse());
        assert!(Network::new("99999999999999999999.0.0.0/8", None)
            .unwrap_err()
            .is_range());
        assert!(Network::new("10.0.0.0", None).unwrap_err().is_parse());
        assert!(Network::new("10.0.0.0/", None).unwrap_err().is_parse());
        assert!(Network::new("10.0.0.0/24", Some("255.255.255.0"))
            .unwrap_err()
            .is_parse());
        assert!(Network::new("10.0.0.0", Some("255.255.256.0"))
            .unwrap_err()
            .is_range());
    }

    #[test]
    fn test_splits_on_last_slash() {
        assert!(Network::new("10.0.0.0/8/24", None).unwrap_err().is_parse());
    }

    #[test]
    fn test_from_args() {
        let one = Network::from_args(&["172.16.4.9/22"]).unwrap();
        let two = Network::from_args(&["172.16.4.9", "255.255.252.0"]).unwrap();
        assert_eq!(one, two);
        assert_eq!(one.network_address(), Ipv4Address::new(172, 16, 4, 0));
        assert_eq!(
            one.broadcast_address().unwrap(),
            Ipv4Address::new(172, 16, 7, 255)
        );
        assert_eq!(one.max_hosts(), 1022);
        let none: [&str; 0] = [];
        assert!(Network::from_args(&none).unwrap_err().is_parse());
        assert!(Network::from_args(&["a", "b", "c"]).unwrap_err().is_parse());
    }

    #[test]
    fn test_slash_0() {
        let net = Network::new("8.8.8.8/0", None).unwrap();
        assert_eq!(net.network_address(), Ipv4Address::new(0, 0, 0, 0));
        assert_eq!(
            net.broadcast_address().unwrap(),
            Ipv4Address::new(255, 255, 255, 255)
        );
        assert_eq!(net.max_hosts(), 4_294_967_294);
    }

    #[test]
    fn test_slash_31_and_32() {
        let net = Network::new("10.0.0.0/31", None).unwrap();
        assert_eq!(net.max_hosts(), 0);
        assert_eq!(net.broadcast_address().unwrap(), Ipv4Address::new(10, 0, 0, 1));
        assert_eq!(net.first_host().unwrap(), Ipv4Address::new(10, 0, 0, 1));
        assert_eq!(net.last_host().unwrap(), Ipv4Address::new(10, 0, 0, 0));

        let host = Network::new("10.0.0.0/32", None).unwrap();
        assert_eq!(host.max_hosts(), -1);
        assert_eq!(host.broadcast_address().unwrap(), Ipv4Address::new(10, 0, 0, 0));
        assert!(host.last_host().unwrap_err().is_range());

        let top = Network::new("10.0.0.255/32", None).unwrap();
        assert!(top.first_host().unwrap_err().is_range());
    }

    #[test]
    fn test_non_contiguous_mask_still_computes() {
        let net = Network::new("192.168.77.10", Some("255.0.255.0")).unwrap();
        assert_eq!(net.network_address(), Ipv4Address::new(192, 0, 77, 0));
        assert_eq!(
            net.broadcast_address().unwrap(),
            Ipv4Address::new(192, 255, 77, 255)
        );
        assert_eq!(net.max_hosts(), (1 << 16) - 2);
    }

    #[test]
    fn test_from_parts() {
        let net = Network::from_parts(
            Ipv4Address::new(10, 1, 2, 3),
            Ipv4Address::from_cidr(16).unwrap(),
        );
        assert_eq!(net, Network::new("10.1.2.3/16", None).unwrap());
        assert_eq!(net.address(), Ipv4Address::new(10, 1, 2, 3));
        assert_eq!(net.mask().count_ones(), 16);
    }

    #[test]
    fn test_display() {
        let net = Network::new("10.1.2.3/16", None).unwrap();
        assert_eq!(net.to_string(), "IP: 10.1.2.3\nMask: 255.255.0.0");
    }
}
