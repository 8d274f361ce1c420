use alloy_primitives::{Address, U256};
use serde::{Serialize, Serializer};
use std::fmt;

/// Cached constants of a deployed token. `None` means not fetched yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub address: Address,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    /// Base units, serialized as a decimal string
    #[serde(serialize_with = "decimal_string")]
    pub total_supply: Option<U256>,
}

fn decimal_string<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_some(&value.to_string()),
        None => serializer.serialize_none(),
    }
}

fn or_unknown<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "unknown".to_string(), ToString::to_string)
}

impl fmt::Display for TokenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Token:        {}", self.address)?;
        writeln!(f, "Name:         {}", or_unknown(&self.name))?;
        writeln!(f, "Symbol:       {}", or_unknown(&self.symbol))?;
        writeln!(f, "Decimals:     {}", or_unknown(&self.decimals))?;
        write!(f, "Total supply: {}", or_unknown(&self.total_supply))
    }
}
