//! Proxy storage layout.
//!
//! Both slots follow EIP-1967: the namespace is `keccak256(label) - 1`, hex
//! encoded without a `0x` prefix. The `- 1` removes any known preimage for the
//! key, so no other hash-derived namespace can land on it, and a 64-character
//! hex namespace never matches a human-chosen `Item`/`Map` name.
//!
//! | Slot | Label | Value |
//! |------|-------|-------|
//! | implementation | `eip1967.proxy.implementation` | `u64` code id |
//! | admin | `eip1967.proxy.admin` | `Option<Addr>` |
//!
//! Layout version 1. Any change to labels or value types is a breaking
//! storage migration.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;
use tiny_keccak::{Hasher, Keccak};

pub const IMPLEMENTATION_LABEL: &str = "eip1967.proxy.implementation";
pub const ADMIN_LABEL: &str = "eip1967.proxy.admin";

/// `keccak256("eip1967.proxy.implementation") - 1`
pub const IMPLEMENTATION_SLOT: &str =
    "360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc";

/// `keccak256("eip1967.proxy.admin") - 1`
pub const ADMIN_SLOT: &str = "b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// Code id running behind the proxy
pub(crate) const IMPLEMENTATION: Item<u64> = Item::new(IMPLEMENTATION_SLOT);

/// Proxy admin; `None` once ossified
pub(crate) const ADMIN: Item<Option<Addr>> = Item::new(ADMIN_SLOT);

/// Snapshot of both proxy slots
#[cw_serde]
pub struct ProxyState {
    pub implementation: u64,
    pub admin: Option<Addr>,
}

impl ProxyState {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(ProxyState {
            implementation: IMPLEMENTATION.load(storage)?,
            admin: ADMIN.load(storage)?,
        })
    }

    pub fn is_ossified(&self) -> bool {
        self.admin.is_none()
    }
}

/// Derive an EIP-1967 slot: `keccak256(label) - 1` as a big-endian integer.
pub fn eip1967_slot(label: &str) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(label.as_bytes());
    let mut slot = [0u8; 32];
    hasher.finalize(&mut slot);

    for byte in slot.iter_mut().rev() {
        let (value, borrow) = byte.overflowing_sub(1);
        *byte = value;
        if !borrow {
            break;
        }
    }
    slot
}
