//! Safe smart account (ERC-4337) primitive types
//!
//! This crate contains the wire and domain types shared by the safe4337
//! crates: the user operation struct and its canonical hash, the bundler and
//! paymaster response records, the Safe deployment configuration, and the
//! signer identity used for address derivation.

pub mod constants;
mod safe;
mod signer;
mod user_operation;
mod utils;

pub use safe::SafeConfig;
pub use signer::SignerIdentity;
pub use user_operation::{
    SponsorUserOperationResponse, UserOperation, UserOperationByHash, UserOperationGasEstimation,
    UserOperationHash, UserOperationReceipt, UserOperationRequest,
};
pub use utils::{get_address, unpack_init_code};
