use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::errors::TokenListError;

/// Comparison key of a token record
pub const SYMBOL_FIELD: &str = "symbol";
/// Identity-sensitive chain address
pub const ADDRESS_FIELD: &str = "address";
/// Derived logo URL, injected by the loader
pub const LOGO_URI_FIELD: &str = "logoURI";

/// One asset's public metadata.
///
/// Only `symbol` and `address` are interpreted; every other field
/// (`name`, `decimals`, `chainId`, ...) is carried opaquely and takes part in
/// equality only. Records are built once per run and never edited in place:
/// [`Token::with_logo_uri`] consumes the record and returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Token {
    symbol: String,
    address: String,
    fields: Map<String, Value>,
}

impl Token {
    /// Build a token from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// - `NotAnObject` if `value` is not a JSON object
    /// - `MissingField` if `symbol` or `address` is absent or not a string
    pub fn from_value(value: Value) -> Result<Self, TokenListError> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            other => Err(TokenListError::NotAnObject {
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn logo_uri(&self) -> Option<&str> {
        self.fields.get(LOGO_URI_FIELD).and_then(Value::as_str)
    }

    /// Look up any field, including the opaque ones
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Return this record with `logoURI` set, replacing any authored value
    pub fn with_logo_uri(mut self, uri: impl Into<String>) -> Self {
        self.fields
            .insert(LOGO_URI_FIELD.to_string(), Value::String(uri.into()));
        self
    }
}

impl TryFrom<Map<String, Value>> for Token {
    type Error = TokenListError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let symbol = required_string(&fields, SYMBOL_FIELD)?;
        let address = required_string(&fields, ADDRESS_FIELD)?;
        Ok(Self {
            symbol,
            address,
            fields,
        })
    }
}

impl From<Token> for Map<String, Value> {
    fn from(token: Token) -> Self {
        token.fields
    }
}

fn required_string(fields: &Map<String, Value>, field: &str) -> Result<String, TokenListError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TokenListError::MissingField {
            field: field.to_string(),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reject a collection in which two records share a symbol.
///
/// # Errors
///
/// `DuplicateSymbol` naming the first repeated symbol in collection order.
pub fn ensure_unique_symbols(tokens: &[Token]) -> Result<(), TokenListError> {
    let mut seen = HashSet::with_capacity(tokens.len());
    for token in tokens {
        if !seen.insert(token.symbol()) {
            return Err(TokenListError::DuplicateSymbol {
                symbol: token.symbol().to_string(),
            });
        }
    }
    Ok(())
}
