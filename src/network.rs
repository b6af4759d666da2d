//! Well-known networks and their public node endpoints.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Stagenet,
    /// A node running on this machine with the default REST port.
    Local,
}

impl Network {
    /// Public node REST endpoint.
    pub fn node_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://nodes.wavesnodes.com",
            Network::Testnet => "https://nodes-testnet.wavesnodes.com",
            Network::Stagenet => "https://nodes-stagenet.wavesnodes.com",
            Network::Local => "http://localhost:6869",
        }
    }

    /// Chain id byte, the character embedded in every address of the network.
    pub fn chain_id(self) -> u8 {
        match self {
            Network::Mainnet => b'W',
            Network::Testnet => b'T',
            Network::Stagenet => b'S',
            Network::Local => b'R',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Stagenet => "stagenet",
            Network::Local => "local",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "stagenet" => Ok(Network::Stagenet),
            "local" | "localnet" => Ok(Network::Local),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}
