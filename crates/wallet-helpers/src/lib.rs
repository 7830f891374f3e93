//! Helpers for Bitcoin wallet front ends: predicates, key-format checks,
//! memoize/debounce wrappers, shallow merges and password scoring.

pub mod codec;
pub mod debounce;
pub mod error;
pub mod math;
pub mod memoize;
pub mod merge;
pub mod password;
pub mod predicates;
pub mod types;

pub use codec::{
    is_bitcoin_address, is_bitcoin_address_with, is_bitcoin_private_key,
    is_bitcoin_private_key_with, is_key, Base58CheckCodec, KeyCodec,
};
pub use debounce::{async_once, AsyncOnce, BeforeHook};
pub use error::{CodecError, HelperError, Result};
pub use math::{add, compose, log2};
pub use memoize::{cache_key, key_fragment, memoize, Memoized};
pub use merge::{merge, merge_missing};
pub use password::{assess_password, score_password, score_password_str, PasswordAssessment};
pub use predicates::{
    is_alpha_num, is_boolean, is_hex, is_in_range, is_not_number, is_number, is_string,
    is_valid_label,
};
pub use types::{CodecConfig, DecodedAddress, Network};
