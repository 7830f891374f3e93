//! Data types shared between the codec, predicates and scorer.

use serde::{Deserialize, Serialize};

pub const MAINNET_P2PKH_VERSION: u8 = 0x00;
pub const MAINNET_P2SH_VERSION: u8 = 0x05;
pub const TESTNET_P2PKH_VERSION: u8 = 0x6f;
pub const TESTNET_P2SH_VERSION: u8 = 0xc4;
pub const MAINNET_WIF_VERSION: u8 = 0x80;
pub const TESTNET_WIF_VERSION: u8 = 0xef;

/// Supported network selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Stable string identifier used in error messages and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    pub fn address_versions(&self) -> [u8; 2] {
        match self {
            Network::Mainnet => [MAINNET_P2PKH_VERSION, MAINNET_P2SH_VERSION],
            Network::Testnet => [TESTNET_P2PKH_VERSION, TESTNET_P2SH_VERSION],
        }
    }

    pub fn wif_version(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF_VERSION,
            Network::Testnet => TESTNET_WIF_VERSION,
        }
    }
}

/// Codec settings. With no network every version byte is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub network: Option<Network>,
}

impl CodecConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network: Some(network),
        }
    }
}

/// A Base58Check address split into its version byte and hash payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedAddress {
    pub version: u8,
    pub hash: [u8; 20],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_config_defaults_to_any_network() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert!(config.network.is_none());
    }

    #[test]
    fn codec_config_reads_lowercase_network() {
        let config: CodecConfig = serde_json::from_str(r#"{"network":"testnet"}"#).unwrap();
        assert_eq!(config, CodecConfig::for_network(Network::Testnet));
    }

    #[test]
    fn network_versions_are_distinct() {
        assert_eq!(Network::Mainnet.address_versions(), [0x00, 0x05]);
        assert_eq!(Network::Testnet.address_versions(), [0x6f, 0xc4]);
        assert_ne!(Network::Mainnet.wif_version(), Network::Testnet.wif_version());
        assert_eq!(Network::Testnet.as_str(), "testnet");
    }
}
