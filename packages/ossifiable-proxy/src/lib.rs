//! Ossifiable Proxy - Upgradeable Contracts at a Stable Address
//!
//! A contract that embeds this crate keeps one address for its whole life
//! while the code behind it can be replaced by an administrator. Once the
//! administrator ossifies the proxy, the code is fixed forever.
//!
//! # Storage
//! The proxy owns exactly two storage entries, keyed by the EIP-1967 slot
//! hashes (`keccak256(label) - 1`), so they cannot collide with the
//! implementation's own `cw-storage-plus` namespaces:
//! - implementation slot: code id currently running at this address
//! - admin slot: `Some(admin)` while upgradable, `None` once ossified
//!
//! # Upgrade Flow
//! 1. Deployer instantiates the implementation code with [`InstantiateMsg`]
//! 2. Deployer hands chain-level admin of the instance to the instance itself
//! 3. Proxy admin sends `UpgradeTo` / `UpgradeToAndCall`
//! 4. Proxy records the new code id and self-issues `WasmMsg::Migrate`
//! 5. New code's `migrate` entry point calls [`migrate`] and runs any call data
//!
//! Every message that is not a proxy message falls through to the
//! implementation's own handlers, with the original sender and the same
//! storage.

pub mod error;
pub mod msg;
mod proxy;
pub mod slots;

pub use crate::error::ProxyError;
pub use crate::msg::{
    AdminResponse, ImplementationResponse, InstantiateMsg, IsOssifiedResponse, MigrateMsg,
    ProxyExecuteMsg, ProxyQueryMsg,
};
pub use crate::proxy::{execute, initialize, migrate, query};
pub use crate::slots::{ProxyState, ADMIN_SLOT, IMPLEMENTATION_SLOT};
