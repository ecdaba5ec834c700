use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MockError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("Unsupported destination chain: {chain}")]
    UnsupportedChain { chain: String },

    #[error("Unknown token symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("Invalid amount: must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient gas payment: required {required} {denom}, got {got}")]
    InsufficientGas {
        required: Uint128,
        denom: String,
        got: Uint128,
    },

    #[error("Permit expired at {deadline}")]
    PermitExpired { deadline: u64 },

    #[error("Invalid permit signature")]
    InvalidSignature,

    #[error("No permit key registered for {owner}")]
    UnknownSigner { owner: String },
}
