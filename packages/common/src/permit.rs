//! Permit extension for CW20 tokens.
//!
//! A permit lets `owner` authorize `spender` for `value` tokens with an
//! offline secp256k1 signature instead of a prior `IncreaseAllowance`
//! transaction. The signed message is a keccak256 digest over the token
//! contract, both parties, the value, the owner's current permit nonce and
//! the deadline:
//!
//! ```text
//! keccak256(
//!     PERMIT_TYPEHASH
//!     ‖ keccak256(token) ‖ keccak256(owner) ‖ keccak256(spender)
//!     ‖ uint256(value) ‖ uint256(nonce) ‖ uint256(deadline)
//! )
//! ```
//!
//! Addresses are hashed (EIP-712 style for dynamic strings) so every field is
//! exactly one 32-byte word. `v` carries `27 + recovery_id`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::hash::{keccak256, u128_word, u64_word};

/// Type string the permit digest commits to
pub const PERMIT_TYPE: &str =
    "Permit(string token,string owner,string spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Offset added to the secp256k1 recovery id to form `v`
pub const RECOVERY_ID_OFFSET: u8 = 27;

#[cw_serde]
pub enum PermitExecuteMsg {
    /// Set the allowance of `spender` over `owner`'s tokens to exactly `value`.
    ///
    /// Consumes the owner's current nonce; fails once `deadline` (block time,
    /// seconds) has passed.
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
pub enum PermitQueryMsg {
    /// Next nonce the owner's permit must be signed with
    #[returns(NonceResponse)]
    Nonce { owner: String },
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

/// keccak256 of [`PERMIT_TYPE`]
pub fn permit_typehash() -> [u8; 32] {
    keccak256(PERMIT_TYPE.as_bytes())
}

/// Compute the digest an owner signs to authorize a permit.
pub fn permit_digest(
    token: &str,
    owner: &str,
    spender: &str,
    value: Uint128,
    nonce: u64,
    deadline: u64,
) -> [u8; 32] {
    let mut data = [0u8; 224];

    data[0..32].copy_from_slice(&permit_typehash());
    data[32..64].copy_from_slice(&keccak256(token.as_bytes()));
    data[64..96].copy_from_slice(&keccak256(owner.as_bytes()));
    data[96..128].copy_from_slice(&keccak256(spender.as_bytes()));
    data[128..160].copy_from_slice(&u128_word(value.u128()));
    data[160..192].copy_from_slice(&u64_word(nonce));
    data[192..224].copy_from_slice(&u64_word(deadline));

    keccak256(&data)
}

/// Split `v` into a secp256k1 recovery id, rejecting anything but 27 or 28.
pub fn recovery_id(v: u8) -> Option<u8> {
    match v {
        27 | 28 => Some(v - RECOVERY_ID_OFFSET),
        _ => None,
    }
}
