use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// DEX pools are used as defaults because their state changes constantly, so
/// providers cannot serve them from a stale cache.
pub const DEFAULT_ACCOUNTS: [&str; 3] = [
    // USDC/SOL Orca
    "Czfq3xZZDmsdGdUyrNLtRhGc47cXcZtLG4crryfu44zE",
    // USDC/SOL Raydium
    "3ucNos4NbumPLZNWztqGHNFFgkHeRMBQAVemeeomsUxv",
    // USDC/SOL Meteora
    "5rCf1DM8LjKTw4YqhnoLcngyZYeNnQqztScTogYHAS6",
];

/// A 32-byte public account key, displayed and parsed as base58.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountKey([u8; AccountKey::LEN]);

impl AccountKey {
    pub const LEN: usize = 32;

    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for AccountKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s.trim())
            .into_vec()
            .map_err(|err| ValidationError::InvalidBase58 { source: err })?;
        let actual = decoded.len();
        let bytes: [u8; Self::LEN] =
            decoded
                .try_into()
                .map_err(|_bytes: Vec<u8>| ValidationError::InvalidAccountLength {
                    expected: Self::LEN,
                    actual,
                })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for AccountKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountKey> for String {
    fn from(value: AccountKey) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

/// Parses [`DEFAULT_ACCOUNTS`].
///
/// # Errors
///
/// Returns an error if a built-in address fails to decode.
pub fn default_accounts() -> Result<Vec<AccountKey>, ValidationError> {
    DEFAULT_ACCOUNTS
        .iter()
        .map(|address| address.parse())
        .collect()
}
