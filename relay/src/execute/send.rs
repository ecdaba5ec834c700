//! Send handlers.
//!
//! Both variants dispatch the same sequence, atomically:
//! 1. `TransferFrom` caller -> relay on the token
//! 2. allowance adjustment so the gateway may pull exactly `amount`
//! 3. gas prepayment on the gas service with all attached funds
//! 4. `CallContractWithToken` on the gateway
//!
//! `SendWithPermit` puts the token's `Permit` in front of step 1.

use bech32::{FromBase32, Variant};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::permit::recovery_id;
use common::{
    bytes32_to_hex, keccak256, GasServiceExecuteMsg, GatewayExecuteMsg, PermitExecuteMsg,
};

use crate::error::ContractError;
use crate::payload::build_payload;
use crate::state::{
    Config, CONFIG, DESTINATION_CHAIN, DESTINATION_CONTRACT, RECEIVER_HRP, TOKEN_SYMBOL,
};

/// Validated inputs of one send
struct SendRequest {
    receiver: String,
    amount: Uint128,
    refund_address: Addr,
    payload: Binary,
}

/// Execute handler for `Send`
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let request = validate_request(deps.as_ref(), &info, receiver, amount, refund_address)?;
    let config = CONFIG.load(deps.storage)?;

    let messages = send_messages(deps.as_ref(), &env, &info, &config, &request)?;
    send_response("send", &info, request, messages)
}

/// Execute handler for `SendWithPermit`
#[allow(clippy::too_many_arguments)]
pub fn execute_send_with_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let request = validate_request(deps.as_ref(), &info, receiver, amount, refund_address)?;

    let now = env.block.time.seconds();
    if now > deadline {
        return Err(ContractError::PermitExpired { deadline, now });
    }
    if recovery_id(v).is_none() {
        return Err(ContractError::InvalidSignature {
            reason: format!("v must be 27 or 28, got {v}"),
        });
    }
    if r.len() != 32 || s.len() != 32 {
        return Err(ContractError::InvalidSignature {
            reason: format!("r and s must be 32 bytes, got {} and {}", r.len(), s.len()),
        });
    }

    let config = CONFIG.load(deps.storage)?;

    // The token verifies the signature and consumes the owner's nonce
    let permit_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&PermitExecuteMsg::Permit {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
            value: request.amount,
            deadline,
            v,
            r,
            s,
        })?,
        funds: vec![],
    });

    let mut messages = vec![permit_msg];
    messages.extend(send_messages(deps.as_ref(), &env, &info, &config, &request)?);
    send_response("send_with_permit", &info, request, messages)
}

// ============================================================================
// Helpers
// ============================================================================

fn validate_request(
    deps: Deps,
    info: &MessageInfo,
    receiver: String,
    amount: Uint128,
    refund_address: Option<String>,
) -> Result<SendRequest, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    if info.funds.iter().all(|coin| coin.amount.is_zero()) {
        return Err(ContractError::NoFundsSent);
    }

    validate_receiver(&receiver)?;

    // Absent or empty refund address falls back to the caller
    let refund_address = match refund_address.filter(|addr| !addr.is_empty()) {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };

    let payload = build_payload(&receiver, amount)?;

    Ok(SendRequest {
        receiver,
        amount,
        refund_address,
        payload,
    })
}

/// Receivers are Neutron accounts: lowercase bech32 under the `neutron` hrp
/// with a valid checksum and a 20 or 32 byte payload.
pub fn validate_receiver(receiver: &str) -> Result<(), ContractError> {
    // Lowercase form only
    if !receiver.starts_with(&format!("{RECEIVER_HRP}1")) {
        return Err(ContractError::InvalidReceiver {
            reason: format!("expected prefix {RECEIVER_HRP}1, got {receiver:?}"),
        });
    }

    let (hrp, data, variant) =
        bech32::decode(receiver).map_err(|e| ContractError::InvalidReceiver {
            reason: format!("{receiver:?} is not bech32: {e}"),
        })?;

    if hrp != RECEIVER_HRP || variant != Variant::Bech32 {
        return Err(ContractError::InvalidReceiver {
            reason: format!("{receiver:?} is not a {RECEIVER_HRP} bech32 address"),
        });
    }

    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| ContractError::InvalidReceiver {
        reason: format!("{receiver:?} has a malformed data part: {e}"),
    })?;
    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(ContractError::InvalidReceiver {
            reason: format!("expected 20 or 32 address bytes, got {}", bytes.len()),
        });
    }

    Ok(())
}

/// Steps 1 to 4, in dispatch order.
fn send_messages(
    deps: Deps,
    env: &Env,
    info: &MessageInfo,
    config: &Config,
    request: &SendRequest,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let relay = env.contract.address.to_string();

    let mut messages = vec![token_msg(
        config,
        &Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: relay.clone(),
            amount: request.amount,
        },
    )?];

    if let Some(adjustment) = gateway_allowance_adjustment(deps, config, &relay, request.amount)? {
        messages.push(token_msg(config, &adjustment)?);
    }

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.gas_service.to_string(),
        msg: to_json_binary(&GasServiceExecuteMsg::PayNativeGasForContractCallWithToken {
            sender: relay,
            destination_chain: DESTINATION_CHAIN.to_string(),
            destination_address: DESTINATION_CONTRACT.to_string(),
            payload: request.payload.clone(),
            symbol: TOKEN_SYMBOL.to_string(),
            amount: request.amount,
            refund_address: request.refund_address.to_string(),
        })?,
        funds: info.funds.clone(),
    }));

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.gateway.to_string(),
        msg: to_json_binary(&GatewayExecuteMsg::CallContractWithToken {
            destination_chain: DESTINATION_CHAIN.to_string(),
            destination_address: DESTINATION_CONTRACT.to_string(),
            payload: request.payload.clone(),
            symbol: TOKEN_SYMBOL.to_string(),
            amount: request.amount,
        })?,
        funds: vec![],
    }));

    Ok(messages)
}

/// CW20 only offers relative allowance changes, so move from whatever the
/// gateway holds now to exactly `amount`.
fn gateway_allowance_adjustment(
    deps: Deps,
    config: &Config,
    relay: &str,
    amount: Uint128,
) -> Result<Option<Cw20ExecuteMsg>, ContractError> {
    let current: AllowanceResponse = deps.querier.query_wasm_smart(
        config.token.to_string(),
        &Cw20QueryMsg::Allowance {
            owner: relay.to_string(),
            spender: config.gateway.to_string(),
        },
    )?;

    let spender = config.gateway.to_string();
    let adjustment = if amount > current.allowance {
        Some(Cw20ExecuteMsg::IncreaseAllowance {
            spender,
            amount: amount - current.allowance,
            expires: None,
        })
    } else if amount < current.allowance {
        Some(Cw20ExecuteMsg::DecreaseAllowance {
            spender,
            amount: current.allowance - amount,
            expires: None,
        })
    } else {
        None
    };
    Ok(adjustment)
}

fn token_msg(config: &Config, msg: &Cw20ExecuteMsg) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

fn send_response(
    method: &str,
    info: &MessageInfo,
    request: SendRequest,
    messages: Vec<CosmosMsg>,
) -> Result<Response, ContractError> {
    let payload_hash = bytes32_to_hex(&keccak256(request.payload.as_slice()));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", method)
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("receiver", request.receiver)
        .add_attribute("amount", request.amount.to_string())
        .add_attribute("refund_address", request.refund_address)
        .add_attribute("destination_chain", DESTINATION_CHAIN)
        .add_attribute("destination_contract", DESTINATION_CONTRACT)
        .add_attribute("symbol", TOKEN_SYMBOL)
        .add_attribute("payload_hash", payload_hash))
}
