//! State definitions for the GMP relay
//!
//! The relay keeps a single configuration item. Everything that identifies
//! the destination side is compiled in.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

// ============================================================================
// Contract Info
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:gmp-relay";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Destination
// ============================================================================

/// Chain name the gateway routes to
pub const DESTINATION_CHAIN: &str = "neutron";

/// Lido satellite contract on Neutron that mints canonical wstETH
pub const DESTINATION_CONTRACT: &str =
    "neutron1ug740qrkquxzrk2hh29qrlx3sktkfml3je7juusc2te7xmvsscns0n2wry";

/// Gateway symbol of the relayed token
pub const TOKEN_SYMBOL: &str = "wstETH";

/// Bech32 human-readable part every receiver must carry
pub const RECEIVER_HRP: &str = "neutron";

// ============================================================================
// Configuration
// ============================================================================

/// Collaborators fixed at instantiation. There is no setter.
#[cw_serde]
pub struct Config {
    /// Cross-chain gateway that escrows the tokens
    pub gateway: Addr,
    /// Gas service that prepays destination execution
    pub gas_service: Addr,
    /// CW20 token being relayed
    pub token: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
