use std::sync::OnceLock;

use async_trait::async_trait;
use everline_acct_types::{
    AcctError, AcctResult, Address, PublicKey, SignedMessage, TransferParams,
};
use serde_json::json;
use tracing::debug;

use crate::{unsigned::UnsignedHandle, Account, AccountContext};

/// Interface description of the giver contract: ABI v2, header fields
/// `pubkey`/`time`/`expire`, a single `sendTransaction` entry point.
///
/// The message encoding depends on this literal; it must match what the
/// deployed contract expects and must not drift.
pub const GIVER_ABI: &str = r#"{
  "ABI version": 2,
  "header": ["pubkey", "time", "expire"],
  "functions": [
    {
      "name": "sendTransaction",
      "inputs": [
        {"name": "dest", "type": "address"},
        {"name": "value", "type": "uint128"},
        {"name": "bounce", "type": "bool"},
        {"name": "flags", "type": "uint8"},
        {"name": "payload", "type": "cell"}
      ],
      "outputs": []
    }
  ],
  "events": []
}"#;

const SEND_TRANSACTION: &str = "sendTransaction";

/// Fee mode for giver transfers: pay forwarding fees from the account
/// balance and bounce on failure. Fixed by the contract, not caller-set.
const SEND_FLAGS: u8 = 3;

/// Faucet account that disburses value through `sendTransaction`.
///
/// Holds its address and a lazily resolved, write-once signing key.
#[derive(Debug)]
pub struct GiverAccount {
    address: Address,
    public_key: OnceLock<PublicKey>,
}

impl GiverAccount {
    /// Account whose key is resolved from live contract state on first use.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            public_key: OnceLock::new(),
        }
    }

    /// Account with an already known signing key; no state query is made.
    pub fn with_public_key(address: Address, public_key: PublicKey) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(public_key);
        Self {
            address,
            public_key: cell,
        }
    }
}

fn build_send_args(params: &TransferParams, payload: &[u8]) -> serde_json::Value {
    // uint128 exceeds the JSON number range; the ABI takes it as decimal
    // text, like addresses.
    json!({
        "dest": params.recipient.to_string(),
        "value": params.amount.to_string(),
        "bounce": params.bounce,
        "flags": SEND_FLAGS,
        "payload": hex::encode(payload),
    })
}

#[async_trait]
impl Account for GiverAccount {
    fn address(&self) -> &Address {
        &self.address
    }

    fn public_key(&self) -> Option<PublicKey> {
        self.public_key.get().copied()
    }

    async fn fetch_public_key(&self, ctx: &AccountContext) -> AcctResult<PublicKey> {
        if let Some(key) = self.public_key.get() {
            return Ok(*key);
        }

        let state = ctx
            .transport()
            .get_full_contract_state(self.address)
            .await?
            .ok_or(AcctError::NotDeployed(self.address))?;
        if !state.is_deployed() {
            return Err(AcctError::NotDeployed(self.address));
        }

        let key = ctx
            .codec()
            .extract_public_key(state.boc())
            .map_err(AcctError::KeyExtraction)?;
        debug!(address = %self.address, "resolved giver public key");

        // A lost race just means a concurrent fetch computed the same key.
        let _ = self.public_key.set(key);
        Ok(key)
    }

    async fn prepare_message(
        &self,
        params: &TransferParams,
        ctx: &AccountContext,
    ) -> AcctResult<SignedMessage> {
        let public_key = self.fetch_public_key(ctx).await?;

        let signer = ctx
            .keystore()
            .get_signer(public_key)
            .await?
            .ok_or(AcctError::SignerNotFound(public_key))?;

        let body = match &params.payload {
            Some(req) => ctx
                .codec()
                .encode_internal_input(&req.abi, &req.method, &req.params)?,
            None => Vec::new(),
        };
        let args = build_send_args(params, &body);

        let unsigned = ctx.codec().create_external_message(
            ctx.clock(),
            &self.address,
            GIVER_ABI,
            SEND_TRANSACTION,
            None,
            &args,
            &public_key,
            params.timeout,
        )?;
        // Guarded so the runtime allocation is released on every exit path
        // below, including a failed sign.
        let unsigned = UnsignedHandle::new(unsigned);

        let signature = signer.sign(unsigned.hash().to_vec()).await?;
        let signed = unsigned.sign(&signature)?;
        debug!(
            address = %self.address,
            expire_at = signed.expire_at(),
            "prepared giver transfer"
        );
        Ok(signed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(amount: u128, bounce: bool) -> TransferParams {
        TransferParams {
            recipient: Address::new(0, [0xde; 32]),
            amount,
            bounce,
            timeout: 60,
            payload: None,
        }
    }

    #[test]
    fn abi_constant_is_well_formed() {
        let abi: serde_json::Value = serde_json::from_str(GIVER_ABI).unwrap();
        assert_eq!(abi["ABI version"], 2);
        assert_eq!(abi["header"], json!(["pubkey", "time", "expire"]));

        let functions = abi["functions"].as_array().unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0]["name"], SEND_TRANSACTION);
        let inputs: Vec<&str> = functions[0]["inputs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect();
        assert_eq!(inputs, ["dest", "value", "bounce", "flags", "payload"]);
        assert_eq!(functions[0]["outputs"], json!([]));
    }

    #[test]
    fn send_args_pin_flags_and_empty_payload() {
        let args = build_send_args(&transfer(1_000_000_000, true), &[]);
        assert_eq!(args["flags"], 3);
        assert_eq!(args["payload"], "");
        assert_eq!(args["value"], "1000000000");
        assert_eq!(args["bounce"], true);

        // Flags stay pinned whatever the caller picks.
        let args = build_send_args(&transfer(1, false), b"\x01\x02");
        assert_eq!(args["flags"], 3);
        assert_eq!(args["payload"], "0102");
        assert_eq!(args["bounce"], false);
    }

    #[test]
    fn send_args_keep_full_uint128_range() {
        let amount = u128::from(u64::MAX) + 1;
        let args = build_send_args(&transfer(amount, true), &[]);
        assert_eq!(args["value"], amount.to_string());

        let args = build_send_args(&transfer(u128::MAX, false), &[]);
        assert_eq!(args["value"], u128::MAX.to_string());
    }
}
