//! Typed JSON-RPC clients for the two ERC-4337 side services: the bundler
//! relaying user operations and the paymaster sponsoring their gas.
//!
//! Absent results (`null`) mean "not indexed yet" and surface as `Ok(None)`
//! so callers can poll; well-formed RPC errors carry their code and message;
//! transport timeouts are a distinct error kind. The clients never retry: a
//! signed user operation is single-use and resubmission policy belongs to the
//! caller.

mod bundler;
mod bundler_api;
mod error;
mod paymaster;
mod paymaster_api;

pub use bundler::BundlerClient;
pub use bundler_api::BundlerApiClient;
pub use error::RpcClientError;
pub use paymaster::PaymasterClient;
pub use paymaster_api::PaymasterApiClient;
