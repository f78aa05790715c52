use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Ledger-native account address: a workchain id plus a 256-bit account id.
///
/// The canonical text form is `<workchain>:<64 lowercase hex chars>`, e.g.
/// `0:abab…ab` or `-1:3333…33`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    workchain: i8,
    account: [u8; 32],
}

impl Address {
    pub fn new(workchain: i8, account: [u8; 32]) -> Self {
        Self { workchain, account }
    }

    pub fn workchain(&self) -> i8 {
        self.workchain
    }

    pub fn account(&self) -> &[u8; 32] {
        &self.account
    }
}

/// Reasons an address string fails to parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum AddressParseError {
    #[error("missing ':' workchain separator")]
    MissingSeparator,

    #[error("invalid workchain id")]
    InvalidWorkchain,

    #[error("account id is not valid hex")]
    InvalidAccountHex,

    #[error("account id must be 32 bytes, got {0}")]
    InvalidAccountLen(usize),
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (wc, acct) = s.split_once(':').ok_or(AddressParseError::MissingSeparator)?;
        let workchain = wc
            .parse::<i8>()
            .map_err(|_| AddressParseError::InvalidWorkchain)?;
        let bytes = hex::decode(acct).map_err(|_| AddressParseError::InvalidAccountHex)?;
        let account: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| AddressParseError::InvalidAccountLen(b.len()))?;
        Ok(Self { workchain, account })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, hex::encode(self.account))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_workchain() {
        let s = format!("0:{}", "ab".repeat(32));
        let addr: Address = s.parse().unwrap();
        assert_eq!(addr.workchain(), 0);
        assert_eq!(addr.account(), &[0xab; 32]);
        assert_eq!(addr.to_string(), s);
    }

    #[test]
    fn parses_masterchain() {
        let s = format!("-1:{}", "33".repeat(32));
        let addr: Address = s.parse().unwrap();
        assert_eq!(addr.workchain(), -1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            "abcdef".parse::<Address>(),
            Err(AddressParseError::MissingSeparator)
        );
        assert_eq!(
            format!("zz:{}", "ab".repeat(32)).parse::<Address>(),
            Err(AddressParseError::InvalidWorkchain)
        );
        assert_eq!(
            "0:nothex".parse::<Address>(),
            Err(AddressParseError::InvalidAccountHex)
        );
        assert_eq!(
            "0:abab".parse::<Address>(),
            Err(AddressParseError::InvalidAccountLen(2))
        );
    }

    #[test]
    fn serde_uses_text_form() {
        let addr = Address::new(0, [0xab; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0:{}\"", "ab".repeat(32)));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
