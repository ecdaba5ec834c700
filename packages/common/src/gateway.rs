//! Gateway collaborator interface.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Messages the relay sends to the cross-chain gateway.
///
/// Before `CallContractWithToken` the caller must have approved the gateway
/// for `amount` of the token registered under `symbol`; the gateway pulls the
/// tokens with `TransferFrom` and escrows them until the destination side
/// settles.
#[cw_serde]
pub enum GatewayExecuteMsg {
    CallContractWithToken {
        /// Destination chain name as registered on the gateway (e.g. "neutron")
        destination_chain: String,
        /// Contract on the destination chain that receives payload and tokens
        destination_address: String,
        /// Opaque payload delivered to `destination_address`
        payload: Binary,
        /// Gateway symbol of the escrowed token
        symbol: String,
        /// Amount in the token's smallest unit
        amount: Uint128,
    },
}
