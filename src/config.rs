use alloy::primitives::Address;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub gallery: GalleryConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Logical network name: base, mainnet or zora-network
    pub name: String,
    /// RPC endpoint override; the network's public endpoints are used when empty
    #[serde(default)]
    pub rpc_urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GalleryConfig {
    /// Comma-separated list of collection contract addresses
    pub contract_addresses: String,
    /// Legacy single-address key, consulted only when the list above is empty
    #[serde(default)]
    pub contract_address: Option<String>,
    /// Upper bound on the number of tokens handed to the consumer
    pub result_limit: usize,
    /// Serve the placeholder dataset without touching the network
    pub mock_mode: bool,
    /// 0 probes token id 1 per collection; N scans ids 1..=N per collection,
    /// stopping at the first missing id
    #[serde(default)]
    pub scan_range: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContentConfig {
    /// Host used to rewrite ipfs:// pointers into fetchable locations
    pub ipfs_gateway: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                name: "base".to_string(),
                rpc_urls: Vec::new(),
            },
            gallery: GalleryConfig {
                contract_addresses: String::new(),
                contract_address: None,
                result_limit: 12,
                mock_mode: false,
                scan_range: 0,
            },
            content: ContentConfig {
                ipfs_gateway: "ipfs.io".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Try to load from config directory
        info!("Loading config from file");
        match Self::load_from_file("config/config.toml") {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                // Fall back to environment variables or defaults
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(network) = std::env::var("NETWORK") {
            config.network.name = network;
        }

        if let Ok(urls) = std::env::var("RPC_URLS") {
            config.network.rpc_urls = urls
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(addresses) = std::env::var("CONTRACT_ADDRESSES") {
            config.gallery.contract_addresses = addresses;
        }

        if let Ok(address) = std::env::var("CONTRACT_ADDRESS") {
            config.gallery.contract_address = Some(address);
        }

        if let Ok(limit) = std::env::var("RESULT_LIMIT") {
            if let Ok(parsed) = limit.parse::<usize>() {
                config.gallery.result_limit = parsed;
            }
        }

        if let Ok(mock) = std::env::var("MOCK_MODE") {
            config.gallery.mock_mode = matches!(mock.to_lowercase().as_str(), "true" | "1");
        }

        if let Ok(range) = std::env::var("SCAN_RANGE") {
            if let Ok(parsed) = range.parse::<u64>() {
                config.gallery.scan_range = parsed;
            }
        }

        if let Ok(gateway) = std::env::var("IPFS_GATEWAY") {
            config.content.ipfs_gateway = gateway;
        }

        config
    }

    /// Validated collection address set, in first-seen configuration order.
    ///
    /// An empty result means no live resolution is possible and the caller
    /// goes straight to the placeholder dataset.
    pub fn collection_addresses(&self) -> Vec<Address> {
        let addresses = parse_address_list(&self.gallery.contract_addresses);
        if !addresses.is_empty() {
            return addresses;
        }
        self.gallery
            .contract_address
            .as_deref()
            .map(parse_address_list)
            .unwrap_or_default()
    }
}

/// Parse a comma-separated address list, silently dropping every entry that
/// fails the 42-character 0x-prefixed hex check. Duplicates are removed,
/// first occurrence wins.
pub fn parse_address_list(raw: &str) -> Vec<Address> {
    let mut addresses: Vec<Address> = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.len() != 42 || !part.starts_with("0x") {
            debug!("Dropping malformed collection address: {:?}", part);
            continue;
        }
        match part.parse::<Address>() {
            Ok(address) => {
                if !addresses.contains(&address) {
                    addresses.push(address);
                }
            }
            Err(e) => debug!("Dropping malformed collection address {:?}: {}", part, e),
        }
    }
    addresses
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.network.name, "base");
        assert_eq!(config.gallery.result_limit, 12);
        assert!(!config.gallery.mock_mode);
        assert_eq!(config.content.ipfs_gateway, "ipfs.io");
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("NETWORK", "zora-network");
        std::env::set_var("RESULT_LIMIT", "6");
        std::env::set_var("MOCK_MODE", "true");

        let config = Config::from_env();
        assert_eq!(config.network.name, "zora-network");
        assert_eq!(config.gallery.result_limit, 6);
        assert!(config.gallery.mock_mode);

        // Clean up
        std::env::remove_var("NETWORK");
        std::env::remove_var("RESULT_LIMIT");
        std::env::remove_var("MOCK_MODE");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("base"));
        assert!(toml_string.contains("ipfs.io"));
        assert!(toml_string.contains("result_limit"));
    }

    #[test]
    fn test_parse_address_list_drops_malformed_entries() {
        let raw = "0x1802c1d526a563471ed64a91045104dc7f1786fe, not-an-address, \
                   0x1802c1d526a563471ed64a91045104dc7f1786, 0xzz02c1d526a563471ed64a91045104dc7f1786fe";
        let addresses = parse_address_list(raw);
        assert_eq!(
            addresses,
            vec![address!("0x1802c1d526a563471ed64a91045104dc7f1786fe")]
        );
    }

    #[test]
    fn test_parse_address_list_dedups_preserving_order() {
        let raw = "0x1802c1d526a563471ed64a91045104dc7f1786fe,\
                   0x1f9840a85d5af5bf1d1762f925bdaddc4201f984,\
                   0x1802c1d526a563471ed64a91045104dc7f1786fe";
        let addresses = parse_address_list(raw);
        assert_eq!(
            addresses,
            vec![
                address!("0x1802c1d526a563471ed64a91045104dc7f1786fe"),
                address!("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"),
            ]
        );
    }

    #[test]
    fn test_collection_addresses_falls_back_to_legacy_key() {
        let mut config = Config::default();
        config.gallery.contract_address =
            Some("0x1802c1d526a563471ed64a91045104dc7f1786fe".to_string());
        assert_eq!(
            config.collection_addresses(),
            vec![address!("0x1802c1d526a563471ed64a91045104dc7f1786fe")]
        );

        // The list key takes precedence over the legacy key once populated
        config.gallery.contract_addresses =
            "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984".to_string();
        assert_eq!(
            config.collection_addresses(),
            vec![address!("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984")]
        );
    }

    #[test]
    fn test_collection_addresses_empty_when_nothing_configured() {
        let config = Config::default();
        assert!(config.collection_addresses().is_empty());
    }
}
