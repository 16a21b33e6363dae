use std::fmt;

use super::{AccountKey, RpcCall};

/// RPC methods known to the collector.
///
/// `GetProgramAccounts` is planned but has no request builder; it is never
/// part of [`RpcMethod::SUPPORTED`] and must not be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    GetAccountInfo,
    GetMultipleAccounts,
    GetProgramAccounts,
}

impl RpcMethod {
    /// Methods sampled on every endpoint, in invocation order.
    pub const SUPPORTED: [Self; 2] = [Self::GetAccountInfo, Self::GetMultipleAccounts];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetAccountInfo => "getAccountInfo",
            Self::GetMultipleAccounts => "getMultipleAccounts",
            Self::GetProgramAccounts => "getProgramAccounts",
        }
    }

    #[must_use]
    pub const fn is_supported(self) -> bool {
        match self {
            Self::GetAccountInfo | Self::GetMultipleAccounts => true,
            Self::GetProgramAccounts => false,
        }
    }

    /// Builds the request for this method.
    ///
    /// `getAccountInfo` queries the first account, `getMultipleAccounts` the
    /// whole list. Returns `None` for an unsupported method or an empty
    /// account list.
    #[must_use]
    pub fn build_call(self, accounts: &[AccountKey]) -> Option<RpcCall> {
        match self {
            Self::GetAccountInfo => accounts.first().map(RpcCall::get_account_info),
            Self::GetMultipleAccounts if accounts.is_empty() => None,
            Self::GetMultipleAccounts => Some(RpcCall::get_multiple_accounts(accounts)),
            Self::GetProgramAccounts => None,
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
