//! Query handlers for the GMP relay.

use cosmwasm_std::{Deps, StdResult, Uint128};

use common::{bytes32_to_hex, keccak256};

use crate::msg::{AddressResponse, ConfigResponse, PayloadResponse, StringResponse};
use crate::payload::build_payload;
use crate::state::{CONFIG, DESTINATION_CHAIN, DESTINATION_CONTRACT, TOKEN_SYMBOL};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        gateway: config.gateway,
        gas_service: config.gas_service,
        token: config.token,
        destination_chain: DESTINATION_CHAIN.to_string(),
        destination_contract: DESTINATION_CONTRACT.to_string(),
        token_symbol: TOKEN_SYMBOL.to_string(),
    })
}

pub fn query_gateway(deps: Deps) -> StdResult<AddressResponse> {
    Ok(AddressResponse {
        address: CONFIG.load(deps.storage)?.gateway,
    })
}

pub fn query_gas_service(deps: Deps) -> StdResult<AddressResponse> {
    Ok(AddressResponse {
        address: CONFIG.load(deps.storage)?.gas_service,
    })
}

pub fn query_token(deps: Deps) -> StdResult<AddressResponse> {
    Ok(AddressResponse {
        address: CONFIG.load(deps.storage)?.token,
    })
}

pub fn query_constant(value: &str) -> StringResponse {
    StringResponse {
        value: value.to_string(),
    }
}

/// Preview the payload. The receiver is not validated here.
pub fn query_payload(receiver: String, amount: Uint128) -> StdResult<PayloadResponse> {
    let payload = build_payload(&receiver, amount)?;
    let payload_hash = bytes32_to_hex(&keccak256(payload.as_slice()));
    Ok(PayloadResponse {
        payload,
        payload_hash,
    })
}
