//! Permit-capable CW20 double.
//!
//! Plain cw20-base for balances and allowances, plus:
//! - `Permit` - sets an allowance from an owner's secp256k1 signature
//! - `Nonce` - per-owner permit counter, bumped on every accepted permit
//!
//! Owners must be registered with their public key at instantiation; the
//! recovered key is compared against it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration};
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, query_allowance,
};
use cw20_base::msg::{
    ExecuteMsg as Cw20BaseExecuteMsg, InstantiateMsg as Cw20BaseInstantiateMsg,
    QueryMsg as Cw20BaseQueryMsg,
};
use cw_storage_plus::Map;

use common::permit::{permit_digest, recovery_id, NonceResponse};

use crate::error::MockError;

#[cw_serde]
pub struct PermitSigner {
    pub owner: String,
    /// Uncompressed secp256k1 public key (65 bytes)
    pub pubkey: Binary,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    pub signers: Vec<PermitSigner>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    Permit {
        owner: String,
        spender: String,
        value: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(NonceResponse)]
    Nonce { owner: String },
}

const PUBKEYS: Map<&str, Binary> = Map::new("permit_pubkeys");
const NONCES: Map<&str, u64> = Map::new("permit_nonces");

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, MockError> {
    for signer in &msg.signers {
        let owner = deps.api.addr_validate(&signer.owner)?;
        PUBKEYS.save(deps.storage, owner.as_str(), &signer.pubkey)?;
    }

    let base = Cw20BaseInstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: msg.initial_balances,
        mint: None,
        marketing: None,
    };
    Ok(cw20_base::contract::instantiate(deps, env, info, base)?)
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, MockError> {
    let base = match msg {
        ExecuteMsg::Permit {
            owner,
            spender,
            value,
            deadline,
            v,
            r,
            s,
        } => {
            return execute_permit(deps, env, owner, spender, value, deadline, v, r, s);
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            Cw20BaseExecuteMsg::Transfer { recipient, amount }
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Cw20BaseExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        },
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Cw20BaseExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        },
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Cw20BaseExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        },
    };

    Ok(cw20_base::contract::execute(deps, env, info, base)?)
}

#[allow(clippy::too_many_arguments)]
fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    value: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, MockError> {
    if env.block.time.seconds() > deadline {
        return Err(MockError::PermitExpired { deadline });
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    let expected = PUBKEYS
        .may_load(deps.storage, owner_addr.as_str())?
        .ok_or_else(|| MockError::UnknownSigner {
            owner: owner.clone(),
        })?;

    let recovery_param = recovery_id(v).ok_or(MockError::InvalidSignature)?;
    if r.len() != 32 || s.len() != 32 {
        return Err(MockError::InvalidSignature);
    }
    let mut signature = r.to_vec();
    signature.extend_from_slice(&s);

    let nonce = NONCES
        .may_load(deps.storage, owner_addr.as_str())?
        .unwrap_or_default();
    let digest = permit_digest(
        env.contract.address.as_str(),
        owner_addr.as_str(),
        &spender,
        value,
        nonce,
        deadline,
    );
    let recovered = deps
        .api
        .secp256k1_recover_pubkey(&digest, &signature, recovery_param)
        .map_err(|_| MockError::InvalidSignature)?;
    if recovered.as_slice() != expected.as_slice() {
        return Err(MockError::InvalidSignature);
    }
    NONCES.save(deps.storage, owner_addr.as_str(), &(nonce + 1))?;

    // Permit sets the allowance outright, so move from the current value
    let current = query_allowance(deps.as_ref(), owner.clone(), spender.clone())?.allowance;
    let owner_info = MessageInfo {
        sender: owner_addr,
        funds: vec![],
    };
    let res = if value > current {
        execute_increase_allowance(deps, env, owner_info, spender.clone(), value - current, None)?
    } else if value < current {
        execute_decrease_allowance(deps, env, owner_info, spender.clone(), current - value, None)?
    } else {
        Response::new()
    };

    Ok(res
        .add_attribute("method", "permit")
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("value", value)
        .add_attribute("nonce", nonce.to_string()))
}

pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => {
            cw20_base::contract::query(deps, env, Cw20BaseQueryMsg::Balance { address })
        }
        QueryMsg::Allowance { owner, spender } => {
            cw20_base::contract::query(deps, env, Cw20BaseQueryMsg::Allowance { owner, spender })
        }
        QueryMsg::Nonce { owner } => {
            let owner = deps.api.addr_validate(&owner)?;
            let nonce = NONCES
                .may_load(deps.storage, owner.as_str())?
                .unwrap_or_default();
            to_json_binary(&NonceResponse { nonce })
        }
    }
}
