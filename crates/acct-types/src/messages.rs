use serde::{Deserialize, Serialize};

use crate::Address;

/// Final signed external message, ready to be transmitted to the ledger.
///
/// Opaque beyond its transmittable form; the ledger interprets the boc.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SignedMessage {
    #[serde(with = "hex::serde")]
    hash: Vec<u8>,
    expire_at: u32,
    #[serde(with = "hex::serde")]
    boc: Vec<u8>,
}

impl SignedMessage {
    pub fn new(hash: Vec<u8>, expire_at: u32, boc: Vec<u8>) -> Self {
        Self {
            hash,
            expire_at,
            boc,
        }
    }

    /// Canonical hash the signature was produced over.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Unix deadline after which the ledger rejects the message.
    pub fn expire_at(&self) -> u32 {
        self.expire_at
    }

    pub fn boc(&self) -> &[u8] {
        &self.boc
    }
}

/// Caller-supplied parameters for one outgoing transfer.
///
/// Fee flags are not part of this: each account variant pins its own.
#[derive(Clone, Debug)]
pub struct TransferParams {
    pub recipient: Address,
    pub amount: u128,
    pub bounce: bool,
    /// Message expiration timeout in seconds.
    pub timeout: u32,
    pub payload: Option<PayloadRequest>,
}

/// Optional typed payload to attach to a transfer, encoded against the
/// given interface description.
#[derive(Clone, Debug)]
pub struct PayloadRequest {
    pub abi: String,
    pub method: String,
    pub params: serde_json::Value,
}
