use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProxyError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the proxy admin can perform this action")]
    Unauthorized,

    #[error("Proxy is ossified: admin operations are permanently disabled")]
    Ossified,

    #[error("Code id {code_id} is not a stored contract code")]
    NotACode { code_id: u64 },

    #[error("Proxy must be its own chain-level admin for this action")]
    NotSelfAdministered,

    #[error("Implementation mismatch: slot holds code id {expected}, migration targets {got}")]
    ImplementationMismatch { expected: u64, got: u64 },
}
