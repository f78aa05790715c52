use serde::{Deserialize, Serialize};

/// Read-only snapshot of a contract's on-chain state.
///
/// No public key can be derived from an undeployed contract; callers treat
/// that as a retryable failure of the fetch attempt.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContractState {
    is_deployed: bool,
    balance: u128,
    #[serde(with = "hex::serde")]
    boc: Vec<u8>,
}

impl ContractState {
    pub fn new(is_deployed: bool, balance: u128, boc: Vec<u8>) -> Self {
        Self {
            is_deployed,
            balance,
            boc,
        }
    }

    pub fn is_deployed(&self) -> bool {
        self.is_deployed
    }

    pub fn balance(&self) -> u128 {
        self.balance
    }

    /// Serialized contract state, opaque to this crate.
    pub fn boc(&self) -> &[u8] {
        &self.boc
    }
}
