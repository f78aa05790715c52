//! Common type definitions for the account message-preparation library.

mod address;
mod errors;
mod keys;
mod messages;
mod state;

pub use address::{Address, AddressParseError};
pub use errors::{
    AcctError, AcctResult, CodecError, KeystoreError, SigningError, TransportError,
};
pub use keys::{KeyParseError, PublicKey, Signature};
pub use messages::{PayloadRequest, SignedMessage, TransferParams};
pub use state::ContractState;
