use thiserror::Error;

use crate::{Address, PublicKey};

pub type AcctResult<T> = Result<T, AcctError>;

/// Account operation errors.
///
/// Collaborator failures pass through transparently; nothing is wrapped,
/// retried, or swallowed here.
#[derive(Debug, Error)]
pub enum AcctError {
    /// Contract state absent or not yet deployed. Retryable: a later fetch
    /// against a now-deployed contract succeeds.
    #[error("contract {0} is not deployed")]
    NotDeployed(Address),

    /// The codec could not derive a public key from deployed state.
    #[error("failed to extract public key from contract state")]
    KeyExtraction(#[source] CodecError),

    /// The keystore holds no signer for the resolved key. Signals a custody
    /// gap to the caller.
    #[error("no signer for public key {0}")]
    SignerNotFound(PublicKey),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Keystore(#[from] KeystoreError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Failure reported by the ledger connectivity layer.
#[derive(Clone, Debug, Error)]
#[error("transport: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Failure reported by the codec/runtime collaborator.
#[derive(Clone, Debug, Error)]
#[error("codec: {0}")]
pub struct CodecError(pub String);

impl CodecError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Failure reported by the key custodian while looking up a signer.
#[derive(Clone, Debug, Error)]
#[error("keystore: {0}")]
pub struct KeystoreError(pub String);

impl KeystoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Failure reported by a signer while producing a signature.
#[derive(Clone, Debug, Error)]
#[error("signing: {0}")]
pub struct SigningError(pub String);

impl SigningError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
