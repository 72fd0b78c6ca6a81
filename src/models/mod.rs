//! Address arithmetic core.
//!
//! This module contains the value types every calculation is built from:
//! - [`Octet`] - validated byte with non-wrapping arithmetic
//! - [`Ipv4Address`] - four octets with elementwise operations
//! - [`Network`] - address and mask with derived subnet facts

mod ipv4;
mod network;
mod octet;

// Re-export public types
pub use ipv4::{get_cidr_mask, Ipv4Address, MAX_LENGTH, OCTETS};
pub use network::Network;
pub use octet::{Octet, MAX_OCTET, OCTET_BITS};
