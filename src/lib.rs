//! IPv4 subnet calculator.
//!
//! The [`models`] module holds the address arithmetic; everything else drives it
//! from the command line, an interactive prompt or a text field.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod repl;
pub mod report;

pub use error::{CalcError, Result};
pub use models::{Ipv4Address, Network, Octet};
pub use report::{Fact, Report, Selection};
