//! GMP Relay - Entry Points
//!
//! The relay embeds `ossifiable_proxy`: instantiate writes the proxy slots
//! before the relay's own config, `Proxy(..)` messages are routed to the
//! proxy handlers, and migrate only accepts upgrades issued by the proxy.

use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_send, execute_send_with_permit};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RelayInitMsg};
use crate::query::{
    query_config, query_constant, query_gas_service, query_gateway, query_payload, query_token,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DESTINATION_CHAIN, DESTINATION_CONTRACT,
    TOKEN_SYMBOL,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let init: RelayInitMsg = from_json(msg.init.as_ref().ok_or(ContractError::MissingInitData)?)?;
    let proxy_res = ossifiable_proxy::initialize(deps.branch(), &msg)?;

    let config = Config {
        gateway: deps.api.addr_validate(&init.gateway)?,
        gas_service: deps.api.addr_validate(&init.gas_service)?,
        token: deps.api.addr_validate(&init.token)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attributes(proxy_res.attributes)
        .add_attribute("gateway", config.gateway)
        .add_attribute("gas_service", config.gas_service)
        .add_attribute("token", config.token)
        .add_attribute("destination_chain", DESTINATION_CHAIN))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            receiver,
            amount,
            refund_address,
        } => execute_send(deps, env, info, receiver, amount, refund_address),
        ExecuteMsg::SendWithPermit {
            receiver,
            amount,
            deadline,
            v,
            r,
            s,
            refund_address,
        } => execute_send_with_permit(
            deps,
            env,
            info,
            receiver,
            amount,
            deadline,
            v,
            r,
            s,
            refund_address,
        ),

        // Proxy administration
        ExecuteMsg::Proxy(proxy_msg) => {
            Ok(ossifiable_proxy::execute(deps, env, info, proxy_msg)?)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Gateway {} => to_json_binary(&query_gateway(deps)?),
        QueryMsg::GasService {} => to_json_binary(&query_gas_service(deps)?),
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::DestinationChain {} => to_json_binary(&query_constant(DESTINATION_CHAIN)),
        QueryMsg::DestinationContract {} => to_json_binary(&query_constant(DESTINATION_CONTRACT)),
        QueryMsg::TokenSymbol {} => to_json_binary(&query_constant(TOKEN_SYMBOL)),
        QueryMsg::Payload { receiver, amount } => {
            to_json_binary(&query_payload(receiver, amount)?)
        }
        QueryMsg::Proxy(proxy_msg) => ossifiable_proxy::query(deps, proxy_msg),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(mut deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let implementation = msg.implementation;
    if ossifiable_proxy::migrate(deps.branch(), env, msg)?.is_some() {
        return Err(ContractError::UnexpectedMigrationData);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("implementation", implementation.to_string())
        .add_attribute("version", CONTRACT_VERSION))
}
