//! Selection and evaluation of the subnet facts shown to the user.

use crate::error::Result;
use crate::models::{Ipv4Address, Network};
use serde::Serialize;

/// One derived fact about a [`Network`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fact {
    Network,
    Broadcast,
    FirstHost,
    LastHost,
    HostCount,
}

impl Fact {
    /// All facts in display order.
    pub const ALL: [Fact; 5] = [
        Fact::Network,
        Fact::Broadcast,
        Fact::FirstHost,
        Fact::LastHost,
        Fact::HostCount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Fact::Network => "Network Address",
            Fact::Broadcast => "Broadcast Address",
            Fact::FirstHost => "First Host Address",
            Fact::LastHost => "Last Host Address",
            Fact::HostCount => "Number of addressable hosts",
        }
    }

    /// Key used in CSV headers and JSON objects.
    pub fn key(&self) -> &'static str {
        match self {
            Fact::Network => "network",
            Fact::Broadcast => "broadcast",
            Fact::FirstHost => "first_host",
            Fact::LastHost => "last_host",
            Fact::HostCount => "max_hosts",
        }
    }
}

/// Which facts to compute. An empty selection means all of them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub network: bool,
    pub broadcast: bool,
    pub first_host: bool,
    pub last_host: bool,
    pub host_count: bool,
}

impl Selection {
    pub fn all() -> Selection {
        Selection {
            network: true,
            broadcast: true,
            first_host: true,
            last_host: true,
            host_count: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.network || self.broadcast || self.first_host || self.last_host || self.host_count)
    }

    pub fn contains(&self, fact: Fact) -> bool {
        if self.is_empty() {
            return true;
        }
        match fact {
            Fact::Network => self.network,
            Fact::Broadcast => self.broadcast,
            Fact::FirstHost => self.first_host,
            Fact::LastHost => self.last_host,
            Fact::HostCount => self.host_count,
        }
    }

    pub fn facts(&self) -> Vec<Fact> {
        Fact::ALL
            .into_iter()
            .filter(|f| self.contains(*f))
            .collect()
    }
}

/// Evaluated facts for one network; unselected facts stay `None`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Ipv4Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<Ipv4Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_host: Option<Ipv4Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_host: Option<Ipv4Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hosts: Option<i64>,
}

impl Report {
    /// Compute the selected facts in display order, stopping at the first error.
    pub fn build(network: &Network, selection: &Selection) -> Result<Report> {
        let mut report = Report::default();
        for fact in selection.facts() {
            match fact {
                Fact::Network => report.network = Some(network.network_address()),
                Fact::Broadcast => report.broadcast = Some(network.broadcast_address()?),
                Fact::FirstHost => report.first_host = Some(network.first_host()?),
                Fact::LastHost => report.last_host = Some(network.last_host()?),
                Fact::HostCount => report.max_hosts = Some(network.max_hosts()),
            }
        }
        Ok(report)
    }

    /// Present facts with their rendered values, in display order.
    pub fn entries(&self) -> Vec<(Fact, String)> {
        Fact::ALL
            .into_iter()
            .filter_map(|fact| self.value(fact).map(|v| (fact, v)))
            .collect()
    }

    pub fn value(&self, fact: Fact) -> Option<String> {
        match fact {
            Fact::Network => self.network.map(|a| a.to_string()),
            Fact::Broadcast => self.broadcast.map(|a| a.to_string()),
            Fact::FirstHost => self.first_host.map(|a| a.to_string()),
            Fact::LastHost => self.last_host.map(|a| a.to_string()),
            Fact::HostCount => self.max_hosts.map(|n| n.to_string()),
        }
    }
}
