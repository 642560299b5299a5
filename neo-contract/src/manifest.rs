//! Contract manifest: the method table a native contract exposes.

use serde::{Deserialize, Serialize};

/// Parameter and return types understood by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Any,
    Boolean,
    Integer,
    Hash160,
    Hash256,
    String,
    Array,
    Void,
}

impl ParameterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::Any => "Any",
            ParameterKind::Boolean => "Boolean",
            ParameterKind::Integer => "Integer",
            ParameterKind::Hash160 => "Hash160",
            ParameterKind::Hash256 => "Hash256",
            ParameterKind::String => "String",
            ParameterKind::Array => "Array",
            ParameterKind::Void => "Void",
        }
    }

    /// Whether a supplied argument of kind `supplied` fits this parameter.
    pub fn accepts(self, supplied: ParameterKind) -> bool {
        self == ParameterKind::Any || self == supplied
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractParameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl ContractParameter {
    pub fn new(name: &str, kind: ParameterKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMethod {
    pub name: String,
    pub parameters: Vec<ContractParameter>,
    pub return_type: ParameterKind,
    /// Safe methods never modify state.
    pub safe: bool,
}

impl ContractMethod {
    pub fn new(name: &str, parameters: Vec<ContractParameter>, return_type: ParameterKind) -> Self {
        Self {
            name: name.to_owned(),
            parameters,
            return_type,
            safe: false,
        }
    }

    pub fn safe(mut self) -> Self {
        self.safe = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    pub name: String,
    pub methods: Vec<ContractMethod>,
}

impl ContractManifest {
    pub fn find_method(&self, name: &str) -> Option<&ContractMethod> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_accepts_everything() {
        assert!(ParameterKind::Any.accepts(ParameterKind::Hash160));
        assert!(ParameterKind::Integer.accepts(ParameterKind::Integer));
        assert!(!ParameterKind::Integer.accepts(ParameterKind::String));
    }

    #[test]
    fn test_find_method() {
        let manifest = ContractManifest {
            name: "Sample".into(),
            methods: vec![ContractMethod::new(
                "get",
                vec![ContractParameter::new("key", ParameterKind::String)],
                ParameterKind::Integer,
            )
            .safe()],
        };
        let method = manifest.find_method("get").unwrap();
        assert!(method.safe);
        assert!(manifest.find_method("set").is_none());
        assert!(manifest.to_json().unwrap().contains("\"get\""));
    }
}
