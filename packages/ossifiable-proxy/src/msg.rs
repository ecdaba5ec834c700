//! Proxy message types.
//!
//! Proxied contracts embed `ProxyExecuteMsg` and `ProxyQueryMsg` as a
//! `Proxy(..)` variant of their own message enums and use [`InstantiateMsg`]
//! and [`MigrateMsg`] as their instantiate and migrate messages.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Construction message for any proxied contract
#[cw_serde]
pub struct InstantiateMsg {
    /// Code id this instance is instantiated from. Only its existence is
    /// checked on chain, so the deployer must pass the same id it instantiates.
    pub implementation: u64,
    /// Proxy admin allowed to upgrade, change admin and ossify
    pub admin: String,
    /// Implementation-specific setup data, run once during instantiation
    pub init: Option<Binary>,
}

#[cw_serde]
pub enum ProxyExecuteMsg {
    /// Swap the code behind this address.
    ///
    /// Authorization: Admin only
    UpgradeTo { code_id: u64 },

    /// Swap the code and hand `data` to the new code's migrate handler in
    /// the same transaction.
    ///
    /// Authorization: Admin only
    UpgradeToAndCall { code_id: u64, data: Binary },

    /// Transfer the admin role.
    ///
    /// Authorization: Admin only
    ChangeAdmin { new_admin: String },

    /// Renounce the admin role permanently. The current code keeps serving
    /// every non-admin call.
    ///
    /// Authorization: Admin only
    Ossify {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ProxyQueryMsg {
    #[returns(AdminResponse)]
    Admin {},
    #[returns(ImplementationResponse)]
    Implementation {},
    #[returns(IsOssifiedResponse)]
    IsOssified {},
}

/// Message the proxy sends to the new code on upgrade
#[cw_serde]
pub struct MigrateMsg {
    /// Code id the proxy recorded in its implementation slot
    pub implementation: u64,
    /// Call data from `UpgradeToAndCall`
    pub data: Option<Binary>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Option<Addr>,
}

#[cw_serde]
pub struct ImplementationResponse {
    pub code_id: u64,
}

#[cw_serde]
pub struct IsOssifiedResponse {
    pub is_ossified: bool,
}
