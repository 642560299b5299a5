//! Invocation context and the dynamic values passed through the native
//! dispatch surface.

use neo_primitives::{UInt160, UInt256};
use serde_json::json;

use crate::error::{ContractError, ContractResult};
use crate::manifest::ParameterKind;

/// Who is calling, with how much attached value, and when.
///
/// Every mutating entry point receives one of these. The host supplies the
/// timestamp of the transaction being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationContext {
    /// Account that signed the call.
    pub caller: UInt160,
    /// Funds attached to the call.
    pub value: u64,
    /// Block time in UNIX seconds.
    pub timestamp: u64,
}

impl InvocationContext {
    pub fn new(caller: UInt160, timestamp: u64) -> Self {
        Self {
            caller,
            value: 0,
            timestamp,
        }
    }

    /// Attaches `value` to the call.
    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i128),
    Hash160(UInt160),
    Hash256(UInt256),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Value::Null => ParameterKind::Any,
            Value::Bool(_) => ParameterKind::Boolean,
            Value::Int(_) => ParameterKind::Integer,
            Value::Hash160(_) => ParameterKind::Hash160,
            Value::Hash256(_) => ParameterKind::Hash256,
            Value::String(_) => ParameterKind::String,
            Value::Array(_) => ParameterKind::Array,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer value if it fits in a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_hash160(&self) -> Option<UInt160> {
        match self {
            Value::Hash160(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_hash256(&self) -> Option<UInt256> {
        match self {
            Value::Hash256(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Renders the value in the stack-item JSON shape used by RPC responses.
    pub fn to_stack_json(&self) -> serde_json::Value {
        match self {
            Value::Null => json!({ "type": "Any", "value": serde_json::Value::Null }),
            Value::Bool(v) => json!({ "type": "Boolean", "value": v }),
            Value::Int(v) => json!({ "type": "Integer", "value": v.to_string() }),
            Value::Hash160(v) => json!({ "type": "Hash160", "value": v.to_hex_string() }),
            Value::Hash256(v) => json!({ "type": "Hash256", "value": v.to_hex_string() }),
            Value::String(v) => json!({ "type": "String", "value": v }),
            Value::Array(values) => json!({
                "type": "Array",
                "value": values.iter().map(|v| v.to_stack_json()).collect::<Vec<_>>()
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(i128::from(value))
    }
}

impl From<UInt160> for Value {
    fn from(value: UInt160) -> Self {
        Value::Hash160(value)
    }
}

impl From<UInt256> for Value {
    fn from(value: UInt256) -> Self {
        Value::Hash256(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Typed extraction of positional arguments for a dispatched method.
pub(crate) struct Args<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(method: &'a str, values: &'a [Value]) -> Self {
        Self { method, values }
    }

    fn get(&self, index: usize) -> ContractResult<&'a Value> {
        self.values.get(index).ok_or_else(|| {
            ContractError::invalid_parameters(self.method, format!("missing argument {index}"))
        })
    }

    fn mismatch(&self, index: usize, expected: &str) -> ContractError {
        ContractError::invalid_parameters(
            self.method,
            format!("argument {index} is not a valid {expected}"),
        )
    }

    pub(crate) fn string(&self, index: usize) -> ContractResult<&'a str> {
        self.get(index)?
            .as_str()
            .ok_or_else(|| self.mismatch(index, "string"))
    }

    pub(crate) fn u64(&self, index: usize) -> ContractResult<u64> {
        self.get(index)?
            .as_u64()
            .ok_or_else(|| self.mismatch(index, "u64 integer"))
    }

    pub(crate) fn u32(&self, index: usize) -> ContractResult<u32> {
        let value = self.u64(index)?;
        u32::try_from(value).map_err(|_| self.mismatch(index, "u32 integer"))
    }

    pub(crate) fn bool(&self, index: usize) -> ContractResult<bool> {
        self.get(index)?
            .as_bool()
            .ok_or_else(|| self.mismatch(index, "boolean"))
    }

    pub(crate) fn hash160(&self, index: usize) -> ContractResult<UInt160> {
        self.get(index)?
            .as_hash160()
            .ok_or_else(|| self.mismatch(index, "Hash160"))
    }

    pub(crate) fn hash256(&self, index: usize) -> ContractResult<UInt256> {
        self.get(index)?
            .as_hash256()
            .ok_or_else(|| self.mismatch(index, "Hash256"))
    }

    pub(crate) fn array(&self, index: usize) -> ContractResult<&'a [Value]> {
        self.get(index)?
            .as_array()
            .ok_or_else(|| self.mismatch(index, "array"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub value: Value,
}

impl InvocationResult {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn empty() -> Self {
        Self { value: Value::Null }
    }
}
