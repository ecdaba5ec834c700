//! GMP Relay - wstETH to Neutron over General Message Passing
//!
//! Lets a wstETH holder on this chain mint canonical wstETH for any Neutron
//! account in one transaction.
//!
//! # Send Flow
//! 1. Caller approves the relay (or signs a permit) and calls `Send`
//! 2. Relay pulls the tokens and approves the gateway for exactly `amount`
//! 3. Relay prepays destination gas with the attached native funds
//! 4. Relay calls the gateway with a mint payload for the Lido satellite
//! 5. The gateway escrows the tokens; the relay keeps no balance
//!
//! # Upgrades
//! The relay runs behind `ossifiable_proxy`: the proxy admin can swap the
//! code (`Proxy(UpgradeTo)`) until it ossifies the instance.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod payload;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::execute::validate_receiver;
pub use crate::payload::{build_payload, parse_payload, PayloadMsg};
