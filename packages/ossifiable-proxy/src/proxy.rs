//! Proxy handlers.
//!
//! These are plain functions, not entry points: the proxied contract routes
//! its `Proxy(..)` variants and its instantiate/migrate messages here.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};

use crate::error::ProxyError;
use crate::msg::{
    AdminResponse, ImplementationResponse, InstantiateMsg, IsOssifiedResponse, MigrateMsg,
    ProxyExecuteMsg, ProxyQueryMsg,
};
use crate::slots::{ProxyState, ADMIN, IMPLEMENTATION};

// ============================================================================
// Instantiate
// ============================================================================

/// Write both proxy slots. Call once from the implementation's instantiate.
///
/// `msg.implementation` must be the code id this instance is being
/// instantiated from. The chain does not expose a contract's own code id
/// until instantiation finishes, so only its existence is checked here.
/// Deployment scripts should compare it against the contract info once the
/// instance exists.
///
/// Returns the response to extend; the caller is responsible for running
/// `msg.init`.
pub fn initialize(deps: DepsMut, msg: &InstantiateMsg) -> Result<Response, ProxyError> {
    ensure_code_exists(deps.as_ref(), msg.implementation)?;
    let admin = deps.api.addr_validate(&msg.admin)?;

    IMPLEMENTATION.save(deps.storage, &msg.implementation)?;
    ADMIN.save(deps.storage, &Some(admin.clone()))?;

    Ok(Response::new()
        .add_attribute("proxy_implementation", msg.implementation.to_string())
        .add_attribute("proxy_admin", admin))
}

// ============================================================================
// Execute
// ============================================================================

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ProxyExecuteMsg,
) -> Result<Response, ProxyError> {
    assert_admin(deps.as_ref(), &info.sender)?;

    match msg {
        ProxyExecuteMsg::UpgradeTo { code_id } => execute_upgrade_to(deps, env, code_id, None),
        ProxyExecuteMsg::UpgradeToAndCall { code_id, data } => {
            execute_upgrade_to(deps, env, code_id, Some(data))
        }
        ProxyExecuteMsg::ChangeAdmin { new_admin } => {
            execute_change_admin(deps, env, info, new_admin)
        }
        ProxyExecuteMsg::Ossify {} => execute_ossify(deps, env, info),
    }
}

fn assert_admin(deps: Deps, sender: &Addr) -> Result<(), ProxyError> {
    match ADMIN.load(deps.storage)? {
        None => Err(ProxyError::Ossified),
        Some(admin) if admin == *sender => Ok(()),
        Some(_) => Err(ProxyError::Unauthorized),
    }
}

/// The chain only runs a migrate issued by the contract's admin, so the
/// proxy slots mean nothing unless that admin is the instance itself.
fn ensure_self_administered(deps: Deps, contract: &Addr) -> Result<(), ProxyError> {
    let info = deps.querier.query_wasm_contract_info(contract.as_str())?;
    if info.admin.as_deref() != Some(contract.as_str()) {
        return Err(ProxyError::NotSelfAdministered);
    }
    Ok(())
}

fn ensure_code_exists(deps: Deps, code_id: u64) -> Result<(), ProxyError> {
    deps.querier
        .query_wasm_code_info(code_id)
        .map_err(|_| ProxyError::NotACode { code_id })?;
    Ok(())
}

fn execute_upgrade_to(
    deps: DepsMut,
    env: Env,
    code_id: u64,
    data: Option<Binary>,
) -> Result<Response, ProxyError> {
    ensure_code_exists(deps.as_ref(), code_id)?;
    let contract = env.contract.address;
    ensure_self_administered(deps.as_ref(), &contract)?;

    let previous = IMPLEMENTATION.load(deps.storage)?;
    IMPLEMENTATION.save(deps.storage, &code_id)?;

    let with_call = data.is_some();
    let migrate_msg = WasmMsg::Migrate {
        contract_addr: contract.to_string(),
        new_code_id: code_id,
        msg: to_json_binary(&MigrateMsg {
            implementation: code_id,
            data,
        })?,
    };

    Ok(Response::new()
        .add_message(migrate_msg)
        .add_attribute("method", "proxy_upgrade_to")
        .add_attribute("previous_implementation", previous.to_string())
        .add_attribute("implementation", code_id.to_string())
        .add_attribute("with_call", with_call.to_string()))
}

fn execute_change_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ProxyError> {
    ensure_self_administered(deps.as_ref(), &env.contract.address)?;

    let new_admin = deps.api.addr_validate(&new_admin)?;
    ADMIN.save(deps.storage, &Some(new_admin.clone()))?;

    Ok(Response::new()
        .add_attribute("method", "proxy_change_admin")
        .add_attribute("previous_admin", info.sender)
        .add_attribute("new_admin", new_admin))
}

/// Clear both admins. With no chain-level admin left, no migrate can ever
/// run against this instance again.
fn execute_ossify(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ProxyError> {
    let contract = env.contract.address;
    ensure_self_administered(deps.as_ref(), &contract)?;

    ADMIN.save(deps.storage, &None)?;

    Ok(Response::new()
        .add_message(WasmMsg::ClearAdmin {
            contract_addr: contract.to_string(),
        })
        .add_attribute("method", "proxy_ossify")
        .add_attribute("previous_admin", info.sender))
}

// ============================================================================
// Migrate
// ============================================================================

/// Validate a migration issued by [`execute`] and return its call data.
///
/// Call first thing from the new code's migrate entry point. The proxy must
/// still have an admin and be its own chain-level admin. The migration target
/// must match the implementation slot.
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Option<Binary>, ProxyError> {
    if ADMIN.load(deps.storage)?.is_none() {
        return Err(ProxyError::Ossified);
    }
    ensure_self_administered(deps.as_ref(), &env.contract.address)?;

    let expected = IMPLEMENTATION.load(deps.storage)?;
    if msg.implementation != expected {
        return Err(ProxyError::ImplementationMismatch {
            expected,
            got: msg.implementation,
        });
    }
    Ok(msg.data)
}

// ============================================================================
// Query
// ============================================================================

pub fn query(deps: Deps, msg: ProxyQueryMsg) -> StdResult<Binary> {
    let state = ProxyState::load(deps.storage)?;
    match msg {
        ProxyQueryMsg::Admin {} => to_json_binary(&AdminResponse { admin: state.admin }),
        ProxyQueryMsg::Implementation {} => to_json_binary(&ImplementationResponse {
            code_id: state.implementation,
        }),
        ProxyQueryMsg::IsOssified {} => to_json_binary(&IsOssifiedResponse {
            is_ossified: state.is_ossified(),
        }),
    }
}
