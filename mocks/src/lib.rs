//! Relay Mocks - Test Doubles for the Relay's Collaborators
//!
//! Stand-ins for the contracts the relay only knows by interface:
//! - `gateway` - records `CallContractWithToken` and escrows the approved tokens
//! - `gas_service` - records gas prepayments and enforces a minimum fee
//! - `token` - cw20-base with the permit extension and per-owner nonces
//! - `signer` - k256 helper producing permit signatures
//!
//! Each contract is exposed as a `cw-multi-test` wrapper.

pub mod error;
pub mod gas_service;
pub mod gateway;
pub mod signer;
pub mod token;

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub use crate::error::MockError;
pub use crate::signer::{PermitSignature, TestSigner};

pub fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(gateway::execute, gateway::instantiate, gateway::query);
    Box::new(contract)
}

pub fn contract_gas_service() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gas_service::execute,
        gas_service::instantiate,
        gas_service::query,
    );
    Box::new(contract)
}

pub fn contract_permit_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(token::execute, token::instantiate, token::query);
    Box::new(contract)
}
