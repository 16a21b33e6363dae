//! JSON-RPC wire types and the accounts the sampled methods query.
mod account;
mod call;
mod method;


pub use account::{AccountKey, DEFAULT_ACCOUNTS, default_accounts};
pub use call::{RpcCall, RpcResponse};
pub use method::RpcMethod;
