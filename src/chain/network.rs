use log::debug;
use serde::{Deserialize, Serialize};

/// Networks the gallery can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    Base,
    Mainnet,
    ZoraNetwork,
}

impl Network {
    /// Map a configured network name onto a known network. Unrecognized
    /// names fall back to base rather than failing the run.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "base" => Network::Base,
            "mainnet" => Network::Mainnet,
            "zora-network" => Network::ZoraNetwork,
            other => {
                debug!("Unrecognized network {:?}, defaulting to base", other);
                Network::Base
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Base => "base",
            Network::Mainnet => "mainnet",
            Network::ZoraNetwork => "zora-network",
        }
    }

    /// Public read-only RPC endpoints, used unless the configuration
    /// overrides them.
    pub fn default_rpc_urls(&self) -> Vec<String> {
        let urls: &[&str] = match self {
            Network::Base => &["https://mainnet.base.org", "https://base.llamarpc.com"],
            Network::Mainnet => &["https://eth.llamarpc.com", "https://cloudflare-eth.com"],
            Network::ZoraNetwork => &["https://rpc.zora.energy"],
        };
        urls.iter().map(|url| url.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("base"), Network::Base);
        assert_eq!(Network::from_name("MAINNET"), Network::Mainnet);
        assert_eq!(Network::from_name("zora-network"), Network::ZoraNetwork);
    }

    #[test]
    fn test_unrecognized_network_defaults_to_base() {
        assert_eq!(Network::from_name("optimism"), Network::Base);
        assert_eq!(Network::from_name(""), Network::Base);
    }

    #[test]
    fn test_every_network_has_rpc_urls() {
        for network in [Network::Base, Network::Mainnet, Network::ZoraNetwork] {
            assert!(!network.default_rpc_urls().is_empty());
        }
    }
}
