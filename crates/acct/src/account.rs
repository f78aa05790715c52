use async_trait::async_trait;
use everline_acct_types::{AcctResult, Address, PublicKey, SignedMessage, TransferParams};

use crate::AccountContext;

/// Capability set shared by all account variants.
///
/// Each variant embeds its own fixed interface description and argument
/// construction rule; the resolution/sign/release protocol is common.
#[async_trait]
pub trait Account: Send + Sync {
    /// Ledger address of this account.
    fn address(&self) -> &Address;

    /// Cached signing key, if one has been resolved or supplied.
    fn public_key(&self) -> Option<PublicKey>;

    /// Resolves the account's signing key.
    ///
    /// Returns the cached key with no I/O once one fetch has succeeded;
    /// failures are never memoized.
    async fn fetch_public_key(&self, ctx: &AccountContext) -> AcctResult<PublicKey>;

    /// Builds, signs, and finalizes one transfer message.
    async fn prepare_message(
        &self,
        params: &TransferParams,
        ctx: &AccountContext,
    ) -> AcctResult<SignedMessage>;
}
