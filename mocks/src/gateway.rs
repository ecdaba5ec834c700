//! Gateway double.
//!
//! Accepts `CallContractWithToken` for the chains and the single token it was
//! instantiated with, pulls the approved amount from the caller into its own
//! balance and keeps every call for inspection.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Item;

use common::{bytes32_to_hex, keccak256, GatewayExecuteMsg};

use crate::error::MockError;

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 contract escrowed under `symbol`
    pub token: String,
    pub symbol: String,
    pub supported_chains: Vec<String>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CallsResponse)]
    Calls {},
}

#[cw_serde]
pub struct GatewayConfig {
    pub token: Addr,
    pub symbol: String,
    pub supported_chains: Vec<String>,
}

#[cw_serde]
pub struct ContractCallWithToken {
    pub sender: Addr,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload: Binary,
    pub symbol: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct CallsResponse {
    pub calls: Vec<ContractCallWithToken>,
}

const CONFIG: Item<GatewayConfig> = Item::new("gateway_config");
const CALLS: Item<Vec<ContractCallWithToken>> = Item::new("calls");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, MockError> {
    let token = deps.api.addr_validate(&msg.token)?;
    CONFIG.save(
        deps.storage,
        &GatewayConfig {
            token,
            symbol: msg.symbol,
            supported_chains: msg.supported_chains,
        },
    )?;
    CALLS.save(deps.storage, &vec![])?;

    Ok(Response::new().add_attribute("action", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: GatewayExecuteMsg,
) -> Result<Response, MockError> {
    match msg {
        GatewayExecuteMsg::CallContractWithToken {
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
        } => {
            let config = CONFIG.load(deps.storage)?;
            if !config.supported_chains.contains(&destination_chain) {
                return Err(MockError::UnsupportedChain {
                    chain: destination_chain,
                });
            }
            if symbol != config.symbol {
                return Err(MockError::UnknownSymbol { symbol });
            }
            if amount.is_zero() {
                return Err(MockError::ZeroAmount);
            }

            let payload_hash = bytes32_to_hex(&keccak256(payload.as_slice()));
            let mut calls = CALLS.load(deps.storage)?;
            calls.push(ContractCallWithToken {
                sender: info.sender.clone(),
                destination_chain: destination_chain.clone(),
                destination_address,
                payload,
                symbol,
                amount,
            });
            CALLS.save(deps.storage, &calls)?;

            let escrow_msg = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            });

            Ok(Response::new()
                .add_message(escrow_msg)
                .add_attribute("action", "contract_call_with_token")
                .add_attribute("sender", info.sender)
                .add_attribute("destination_chain", destination_chain)
                .add_attribute("amount", amount)
                .add_attribute("payload_hash", payload_hash))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Calls {} => to_json_binary(&CallsResponse {
            calls: CALLS.load(deps.storage)?,
        }),
    }
}
