//! Base58Check address and WIF private key decoding behind a narrow trait.

use std::any::Any;

use bitcoin::secp256k1::SecretKey;
use bitcoin::{NetworkKind, PrivateKey};
use tracing::debug;

use crate::error::CodecError;
use crate::types::{CodecConfig, DecodedAddress, MAINNET_WIF_VERSION};

const ADDRESS_PAYLOAD_LEN: usize = 21;
const WIF_UNCOMPRESSED_LEN: usize = 33;
const WIF_COMPRESSED_LEN: usize = 34;
const WIF_COMPRESSION_FLAG: u8 = 0x01;

/// Decoder for the two key formats the predicates check.
pub trait KeyCodec {
    fn try_decode_address(&self, candidate: &str) -> Result<DecodedAddress, CodecError>;

    fn try_decode_private_key(&self, candidate: &str) -> Result<PrivateKey, CodecError>;
}

/// [`KeyCodec`] over `bs58` checksummed decoding and secp256k1 key validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58CheckCodec {
    config: CodecConfig,
}

impl Base58CheckCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

fn decode_check(candidate: &str) -> Result<Vec<u8>, CodecError> {
    Ok(bs58::decode(candidate).with_check(None).into_vec()?)
}

impl KeyCodec for Base58CheckCodec {
    fn try_decode_address(&self, candidate: &str) -> Result<DecodedAddress, CodecError> {
        let payload = decode_check(candidate)?;
        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(CodecError::InvalidPayloadLength {
                kind: "address",
                expected: "21",
                actual: payload.len(),
            });
        }

        let version = payload[0];
        if let Some(network) = self.config.network {
            if !network.address_versions().contains(&version) {
                return Err(CodecError::NetworkMismatch {
                    expected: network.as_str(),
                    version,
                });
            }
        }

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok(DecodedAddress { version, hash })
    }

    fn try_decode_private_key(&self, candidate: &str) -> Result<PrivateKey, CodecError> {
        let payload = decode_check(candidate)?;
        let compressed = match payload.len() {
            WIF_UNCOMPRESSED_LEN => false,
            WIF_COMPRESSED_LEN => {
                let flag = payload[WIF_COMPRESSED_LEN - 1];
                if flag != WIF_COMPRESSION_FLAG {
                    return Err(CodecError::InvalidCompressionFlag(flag));
                }
                true
            }
            actual => {
                return Err(CodecError::InvalidPayloadLength {
                    kind: "wif",
                    expected: "33 or 34",
                    actual,
                })
            }
        };

        let version = payload[0];
        if let Some(network) = self.config.network {
            if network.wif_version() != version {
                return Err(CodecError::NetworkMismatch {
                    expected: network.as_str(),
                    version,
                });
            }
        }

        let inner = SecretKey::from_slice(&payload[1..WIF_UNCOMPRESSED_LEN])?;
        // Unknown version bytes are only reachable without a network filter.
        let network = if version == MAINNET_WIF_VERSION {
            NetworkKind::Main
        } else {
            NetworkKind::Test
        };

        Ok(PrivateKey {
            compressed,
            network,
            inner,
        })
    }
}

/// True iff `candidate` decodes as a Base58Check address with the default codec.
pub fn is_bitcoin_address(candidate: &str) -> bool {
    is_bitcoin_address_with(&Base58CheckCodec::default(), candidate)
}

pub fn is_bitcoin_address_with<C: KeyCodec + ?Sized>(codec: &C, candidate: &str) -> bool {
    match codec.try_decode_address(candidate) {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "rejected bitcoin address candidate");
            false
        }
    }
}

/// True iff `candidate` decodes as a WIF private key with the default codec.
pub fn is_bitcoin_private_key(candidate: &str) -> bool {
    is_bitcoin_private_key_with(&Base58CheckCodec::default(), candidate)
}

pub fn is_bitcoin_private_key_with<C: KeyCodec + ?Sized>(codec: &C, candidate: &str) -> bool {
    match codec.try_decode_private_key(candidate) {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "rejected bitcoin private key candidate");
            false
        }
    }
}

/// True iff `value` is a [`PrivateKey`]; checks the type, not a string format.
pub fn is_key(value: &dyn Any) -> bool {
    value.is::<PrivateKey>()
}
