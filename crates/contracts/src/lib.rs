//! Safe infrastructure contract bindings
//!
//! Typed bindings for the deployed Safe contracts an account talks to, the
//! pure calldata encoders used to assemble user operations, and the
//! counterfactual address derivation the proxy factory performs on-chain.

mod encode;
mod entry_point;
mod error;
mod factory;
pub mod gen;

pub use encode::{
    add_owner_call_data, enable_modules_call_data, execute_user_op_call_data, init_code,
    multi_send_call_data, setup_call_data, shared_signer_configure_call_data, MultiSendTx,
};
pub use entry_point::EntryPoint;
pub use error::ContractsError;
pub use factory::{account_salt_nonce, predict_address, proxy_creation_code};
