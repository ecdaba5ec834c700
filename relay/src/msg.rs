//! Message types for the GMP relay
//!
//! The relay is instantiated with the proxy's [`ossifiable_proxy::InstantiateMsg`];
//! its own setup travels in the `init` blob as a [`RelayInitMsg`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use ossifiable_proxy::{ProxyExecuteMsg, ProxyQueryMsg};

pub use ossifiable_proxy::{InstantiateMsg, MigrateMsg};

// ============================================================================
// Instantiate
// ============================================================================

/// Relay setup carried in `InstantiateMsg::init`
#[cw_serde]
pub struct RelayInitMsg {
    /// Cross-chain gateway address
    pub gateway: String,
    /// Gas service address
    pub gas_service: String,
    /// wstETH CW20 contract address
    pub token: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Send wstETH to `receiver` on Neutron.
    ///
    /// Authorization: Anyone
    ///
    /// The caller must have approved the relay for `amount` and must attach
    /// native tokens to pay for destination gas. Unused gas goes to
    /// `refund_address`, or to the caller when it is absent or empty.
    Send {
        receiver: String,
        amount: Uint128,
        refund_address: Option<String>,
    },

    /// Same as `Send`, but the relay's allowance is established in the same
    /// transaction from the caller's permit signature.
    ///
    /// Authorization: Anyone (the signature must be the caller's)
    SendWithPermit {
        receiver: String,
        amount: Uint128,
        /// Block time (seconds) after which the permit is void
        deadline: u64,
        /// 27 or 28
        v: u8,
        /// 32-byte signature component
        r: Binary,
        /// 32-byte signature component
        s: Binary,
        refund_address: Option<String>,
    },

    /// Proxy administration (upgrade, change admin, ossify)
    Proxy(ProxyExecuteMsg),
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
pub enum QueryMsg {
    /// Returns [`ConfigResponse`]
    Config {},
    /// Returns [`AddressResponse`]
    Gateway {},
    /// Returns [`AddressResponse`]
    GasService {},
    /// Returns [`AddressResponse`]
    Token {},
    /// Returns [`StringResponse`]
    DestinationChain {},
    /// Returns [`StringResponse`]
    DestinationContract {},
    /// Returns [`StringResponse`]
    TokenSymbol {},
    /// Payload a send with these inputs would deliver. Returns [`PayloadResponse`]
    Payload { receiver: String, amount: Uint128 },
    /// Proxy state; responses are defined in `ossifiable_proxy`
    Proxy(ProxyQueryMsg),
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub gateway: Addr,
    pub gas_service: Addr,
    pub token: Addr,
    pub destination_chain: String,
    pub destination_contract: String,
    pub token_symbol: String,
}

#[cw_serde]
pub struct AddressResponse {
    pub address: Addr,
}

#[cw_serde]
pub struct StringResponse {
    pub value: String,
}

#[cw_serde]
pub struct PayloadResponse {
    pub payload: Binary,
    /// 0x-prefixed keccak256 of `payload`
    pub payload_hash: String,
}
