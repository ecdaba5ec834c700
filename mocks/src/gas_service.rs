//! Gas service double.
//!
//! Requires at least `min_amount` of `denom` with every prepayment and keeps
//! the payments for inspection. The funds stay on the mock.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw_storage_plus::Item;

use common::GasServiceExecuteMsg;

use crate::error::MockError;

#[cw_serde]
pub struct InstantiateMsg {
    pub denom: String,
    pub min_amount: Uint128,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PaymentsResponse)]
    Payments {},
}

#[cw_serde]
pub struct GasPayment {
    /// Contract that paid (the relay)
    pub payer: Addr,
    /// `sender` field of the message
    pub sender: String,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload: Binary,
    pub symbol: String,
    pub amount: Uint128,
    pub refund_address: String,
    pub paid: Vec<Coin>,
}

#[cw_serde]
pub struct PaymentsResponse {
    pub payments: Vec<GasPayment>,
}

const FEE: Item<InstantiateMsg> = Item::new("fee");
const PAYMENTS: Item<Vec<GasPayment>> = Item::new("payments");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, MockError> {
    FEE.save(deps.storage, &msg)?;
    PAYMENTS.save(deps.storage, &vec![])?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("min_amount", msg.min_amount))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: GasServiceExecuteMsg,
) -> Result<Response, MockError> {
    match msg {
        GasServiceExecuteMsg::PayNativeGasForContractCallWithToken {
            sender,
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
            refund_address,
        } => {
            let fee = FEE.load(deps.storage)?;
            let got = info
                .funds
                .iter()
                .filter(|coin| coin.denom == fee.denom)
                .map(|coin| coin.amount)
                .sum::<Uint128>();
            if got.is_zero() || got < fee.min_amount {
                return Err(MockError::InsufficientGas {
                    required: fee.min_amount,
                    denom: fee.denom,
                    got,
                });
            }

            let mut payments = PAYMENTS.load(deps.storage)?;
            payments.push(GasPayment {
                payer: info.sender.clone(),
                sender,
                destination_chain,
                destination_address,
                payload,
                symbol,
                amount,
                refund_address: refund_address.clone(),
                paid: info.funds,
            });
            PAYMENTS.save(deps.storage, &payments)?;

            Ok(Response::new()
                .add_attribute("action", "pay_native_gas")
                .add_attribute("payer", info.sender)
                .add_attribute("gas", got)
                .add_attribute("refund_address", refund_address))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Payments {} => to_json_binary(&PaymentsResponse {
            payments: PAYMENTS.load(deps.storage)?,
        }),
    }
}
