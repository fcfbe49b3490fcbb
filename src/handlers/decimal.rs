//! Decimal fields accepted as either a JSON string (`"9.99"`) or a JSON
//! number (`9.99`).
//!
//! Numbers are parsed from their shortest decimal rendering, so `9.99`
//! is stored as `9.99` and not as the exact value of the nearest `f64`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalInput {
    Text(String),
    Number(serde_json::Number),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match DecimalInput::deserialize(deserializer)? {
        DecimalInput::Text(s) => s,
        DecimalInput::Number(n) => n.to_string(),
    };
    BigDecimal::from_str(raw.trim())
        .map_err(|e| de::Error::custom(format!("invalid decimal '{raw}': {e}")))
}
