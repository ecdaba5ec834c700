//! secp256k1 key that signs permits the way a wallet would.

use cosmwasm_std::{Binary, Uint128};
use k256::ecdsa::{Error as EcdsaError, SigningKey};

use common::permit::{permit_digest, RECOVERY_ID_OFFSET};

/// Signature components in the form `PermitExecuteMsg::Permit` expects
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermitSignature {
    pub v: u8,
    pub r: Binary,
    pub s: Binary,
}

pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    /// Deterministic key whose secret is `seed` repeated 32 times
    pub fn from_seed(seed: u8) -> Result<Self, EcdsaError> {
        let key = SigningKey::from_slice(&[seed; 32])?;
        Ok(Self { key })
    }

    /// Uncompressed (65-byte) public key, as registered with the token
    pub fn pubkey(&self) -> Binary {
        Binary::from(self.key.verifying_key().to_encoded_point(false).as_bytes())
    }

    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<PermitSignature, EcdsaError> {
        let (signature, recid) = self.key.sign_prehash_recoverable(digest)?;
        let bytes = signature.to_bytes();

        Ok(PermitSignature {
            v: RECOVERY_ID_OFFSET + recid.to_byte(),
            r: Binary::from(&bytes[..32]),
            s: Binary::from(&bytes[32..]),
        })
    }

    pub fn sign_permit(
        &self,
        token: &str,
        owner: &str,
        spender: &str,
        value: Uint128,
        nonce: u64,
        deadline: u64,
    ) -> Result<PermitSignature, EcdsaError> {
        self.sign_digest(&permit_digest(token, owner, spender, value, nonce, deadline))
    }
}
