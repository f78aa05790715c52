//! Shared fixtures and stub collaborators for the account protocol tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use everline_acct::{Signer, UnsignedMessage};
use everline_acct_types::{
    Address, CodecError, ContractState, PublicKey, Signature, SignedMessage, SigningError,
};

pub fn giver_address() -> Address {
    Address::new(0, [0xab; 32])
}

pub fn recipient_address() -> Address {
    Address::new(0, [0xde; 32])
}

pub fn giver_key() -> PublicKey {
    PublicKey::from_bytes([0x11; 32])
}

pub fn test_signature() -> Signature {
    Signature::from_bytes([0x51; 64])
}

pub fn deployed_state() -> ContractState {
    ContractState::new(true, 10_000_000_000, b"giver state boc".to_vec())
}

pub fn undeployed_state() -> ContractState {
    ContractState::new(false, 0, Vec::new())
}

/// Signer stub returning a canned result for any hash.
#[derive(Clone, Debug)]
pub struct StubSigner {
    result: Result<Signature, SigningError>,
}

impl StubSigner {
    pub fn returning(signature: Signature) -> Self {
        Self {
            result: Ok(signature),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(SigningError::new(reason)),
        }
    }
}

#[async_trait]
impl Signer for StubSigner {
    async fn sign(&self, _hash: Vec<u8>) -> Result<Signature, SigningError> {
        self.result.clone()
    }
}

/// Unsigned-message stub that counts release calls and signs by appending
/// the signature bytes to the hash.
#[derive(Debug)]
pub struct StubUnsignedMessage {
    hash: Vec<u8>,
    expire_at: u32,
    fail_sign: bool,
    releases: Arc<AtomicUsize>,
}

impl StubUnsignedMessage {
    pub fn new(hash: Vec<u8>, expire_at: u32, releases: Arc<AtomicUsize>) -> Self {
        Self {
            hash,
            expire_at,
            fail_sign: false,
            releases,
        }
    }

    pub fn failing_sign(hash: Vec<u8>, expire_at: u32, releases: Arc<AtomicUsize>) -> Self {
        Self {
            hash,
            expire_at,
            fail_sign: true,
            releases,
        }
    }
}

impl UnsignedMessage for StubUnsignedMessage {
    fn hash(&self) -> &[u8] {
        &self.hash
    }

    fn expire_at(&self) -> u32 {
        self.expire_at
    }

    fn sign(&self, signature: &Signature) -> Result<SignedMessage, CodecError> {
        if self.fail_sign {
            return Err(CodecError::new("stub refused to bind signature"));
        }
        let mut boc = self.hash.clone();
        boc.extend_from_slice(signature.as_bytes());
        Ok(SignedMessage::new(self.hash.clone(), self.expire_at, boc))
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
