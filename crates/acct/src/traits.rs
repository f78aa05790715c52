use std::sync::Arc;

use async_trait::async_trait;
use everline_acct_types::{
    Address, CodecError, ContractState, KeystoreError, PublicKey, Signature, SigningError,
    TransportError,
};

use crate::{clock::Clock, unsigned::UnsignedMessage};

/// Ledger connectivity, limited to what account key resolution needs.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the full on-chain state of `address`.
    ///
    /// `None` means the ledger holds no state for the address at all.
    async fn get_full_contract_state(
        &self,
        address: Address,
    ) -> Result<Option<ContractState>, TransportError>;
}

/// Low-level codec/runtime boundary.
///
/// Owns the binary cell format and the ABI encoding rules; this crate only
/// supplies interface descriptions and typed arguments.
#[cfg_attr(feature = "test-utils", mockall::automock)]
pub trait MessageCodec: Send + Sync {
    /// Derives the signing public key from serialized contract state.
    fn extract_public_key(&self, boc: &[u8]) -> Result<PublicKey, CodecError>;

    /// Encodes a typed internal-message body against `abi`.
    fn encode_internal_input(
        &self,
        abi: &str,
        method: &str,
        params: &serde_json::Value,
    ) -> Result<Vec<u8>, CodecError>;

    /// Builds an unsigned external message envelope for `method` on `abi`.
    ///
    /// The returned handle owns a runtime allocation; callers wrap it in
    /// [`crate::UnsignedHandle`] so it is released on every exit path.
    #[expect(clippy::too_many_arguments, reason = "mirrors the runtime entry point")]
    fn create_external_message(
        &self,
        clock: Arc<dyn Clock>,
        address: &Address,
        abi: &str,
        method: &str,
        header: Option<serde_json::Value>,
        args: &serde_json::Value,
        public_key: &PublicKey,
        timeout: u32,
    ) -> Result<Box<dyn UnsignedMessage>, CodecError>;
}

/// Key custodian lookup surface.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait Keystore: Send + Sync {
    /// Looks up a signer bound to `public_key`.
    ///
    /// `None` when the custodian does not hold the key.
    async fn get_signer(
        &self,
        public_key: PublicKey,
    ) -> Result<Option<Arc<dyn Signer>>, KeystoreError>;
}

/// Capability object bound to one custodied key.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait Signer: Send + Sync {
    /// Signs a message hash with the custodied key.
    async fn sign(&self, hash: Vec<u8>) -> Result<Signature, SigningError>;
}
