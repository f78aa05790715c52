//! Account abstractions over an injected ledger runtime.
//!
//! Every account variant follows the same three-stage protocol: resolve the
//! account's signing key (from cache or live contract state), build an
//! unsigned message envelope against the variant's fixed interface
//! description, then obtain a signature from the key custodian and bind it
//! into the final transmittable message. The transient unsigned-message
//! handle is released on every exit path.
//!
//! All I/O goes through the collaborator traits in this crate; adapters for
//! a concrete transport, codec runtime, and keystore live elsewhere.

mod account;
mod clock;
mod context;
mod giver;
mod traits;
mod unsigned;

pub use account::Account;
pub use clock::{Clock, OffsetClock, SystemClock};
pub use context::AccountContext;
pub use giver::{GiverAccount, GIVER_ABI};
pub use traits::{Keystore, MessageCodec, Signer, Transport};
pub use unsigned::{UnsignedHandle, UnsignedMessage};

#[cfg(feature = "test-utils")]
pub use clock::MockClock;
#[cfg(feature = "test-utils")]
pub use traits::{MockKeystore, MockMessageCodec, MockSigner, MockTransport};
