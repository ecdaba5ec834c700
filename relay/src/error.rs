//! Error types for the GMP relay

use cosmwasm_std::StdError;
use ossifiable_proxy::ProxyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Proxy(#[from] ProxyError),

    // ========================================================================
    // Send Errors
    // ========================================================================

    #[error("No funds sent: attach native tokens to pay for destination gas")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid receiver: {reason}")]
    InvalidReceiver { reason: String },

    // ========================================================================
    // Permit Errors
    // ========================================================================

    #[error("Permit expired: deadline {deadline}, block time {now}")]
    PermitExpired { deadline: u64, now: u64 },

    #[error("Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Missing init data: relay needs gateway, gas service and token")]
    MissingInitData,

    #[error("Unexpected migration data: relay migrations take no call data")]
    UnexpectedMigrationData,
}
