use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::AccountKey;

const JSONRPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;
const ACCOUNT_ENCODING: &str = "base64";

/// A JSON-RPC 2.0 request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcCall {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcCall {
    #[must_use]
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: REQUEST_ID,
            method: method.to_owned(),
            params,
        }
    }

    /// `getAccountInfo` params: `[account, {"encoding":"base64"}]`.
    #[must_use]
    pub fn get_account_info(account: &AccountKey) -> Self {
        Self::new(
            "getAccountInfo",
            vec![
                Value::String(account.to_string()),
                json!({ "encoding": ACCOUNT_ENCODING }),
            ],
        )
    }

    /// `getMultipleAccounts` params: `[[account, ...], {"encoding":"base64"}]`.
    #[must_use]
    pub fn get_multiple_accounts(accounts: &[AccountKey]) -> Self {
        let addresses = accounts
            .iter()
            .map(|account| Value::String(account.to_string()))
            .collect();
        Self::new(
            "getMultipleAccounts",
            vec![
                Value::Array(addresses),
                json!({ "encoding": ACCOUNT_ENCODING }),
            ],
        )
    }
}

/// Response envelope. Only the error object matters for sampling; results are
/// drained for size and timing but never inspected.
///
/// `error` must be an object when present. A body that is JSON `null` decodes
/// as `Option::<RpcResponse>::None`, which carries no error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub error: Option<Map<String, Value>>,
}

impl RpcResponse {
    /// The `message` of the JSON-RPC error object, when there is one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}
