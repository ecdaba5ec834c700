//! Destination payload codec.
//!
//! The Lido satellite on Neutron expects a versioned payload:
//!
//! ```text
//! 0x00000002 ‖ {"mint":{"receiver":"neutron1...","symbol":"wstETH","amount":"1000"}}
//! ```
//!
//! The first four bytes select the JSON payload format on the destination
//! side; the rest is the JSON message executed there.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_vec, Binary, StdError, StdResult, Uint128};

use crate::state::TOKEN_SYMBOL;

/// Version prefix for JSON payloads
pub const PAYLOAD_VERSION: [u8; 4] = [0, 0, 0, 2];

#[cw_serde]
pub enum PayloadMsg {
    Mint {
        receiver: String,
        symbol: String,
        amount: Uint128,
    },
}

/// Build the payload delivered to the destination contract.
pub fn build_payload(receiver: &str, amount: Uint128) -> StdResult<Binary> {
    let body = to_json_vec(&PayloadMsg::Mint {
        receiver: receiver.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        amount,
    })?;

    let mut payload = Vec::with_capacity(PAYLOAD_VERSION.len() + body.len());
    payload.extend_from_slice(&PAYLOAD_VERSION);
    payload.extend_from_slice(&body);
    Ok(Binary::from(payload))
}

/// Decode a payload produced by [`build_payload`].
pub fn parse_payload(payload: &[u8]) -> StdResult<PayloadMsg> {
    if payload.len() < PAYLOAD_VERSION.len() {
        return Err(StdError::generic_err("Payload shorter than version prefix"));
    }
    let (version, body) = payload.split_at(PAYLOAD_VERSION.len());
    if version != PAYLOAD_VERSION {
        let version: String = version.iter().map(|b| format!("{b:02x}")).collect();
        return Err(StdError::generic_err(format!(
            "Unsupported payload version: 0x{version}"
        )));
    }
    from_json(body)
}
