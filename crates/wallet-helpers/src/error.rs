use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
    #[error("no tokio runtime is available to schedule delayed calls: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Reasons a Base58Check address or WIF key failed to decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base58check encoding: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    #[error("invalid {kind} payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength {
        kind: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("invalid compression flag 0x{0:02x}")]
    InvalidCompressionFlag(u8),

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(#[from] bitcoin::secp256k1::Error),

    #[error("version byte 0x{version:02x} does not belong to network '{expected}'")]
    NetworkMismatch { expected: &'static str, version: u8 },
}

pub type Result<T> = std::result::Result<T, HelperError>;
