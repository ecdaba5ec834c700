//! Gas-payment collaborator interface.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Messages the relay sends to the gas service.
///
/// The native funds attached to the message pay for execution on the
/// destination chain. Whatever the gas service does not spend is refunded
/// to `refund_address`.
#[cw_serde]
pub enum GasServiceExecuteMsg {
    PayNativeGasForContractCallWithToken {
        /// Contract that will issue the matching gateway call
        sender: String,
        destination_chain: String,
        destination_address: String,
        /// Must be byte-identical to the payload of the gateway call
        payload: Binary,
        symbol: String,
        amount: Uint128,
        /// Receives any unused gas
        refund_address: String,
    },
}
