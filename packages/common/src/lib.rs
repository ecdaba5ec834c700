//! Common - Collaborator Interfaces for the wstETH GMP Relay
//!
//! The relay never links against its collaborators. It talks to them through
//! the message types defined here, so any contract speaking the same JSON can
//! be plugged in at instantiation (including the test doubles in `relay-mocks`).
//!
//! - `gateway` - cross-chain gateway (`CallContractWithToken`)
//! - `gas_service` - destination gas prepayment
//! - `permit` - signature-based allowance extension for CW20 tokens

pub mod gas_service;
pub mod gateway;
pub mod hash;
pub mod permit;

pub use gas_service::GasServiceExecuteMsg;
pub use gateway::GatewayExecuteMsg;
pub use hash::{bytes32_to_hex, keccak256};
pub use permit::{permit_digest, PermitExecuteMsg, PermitQueryMsg};
