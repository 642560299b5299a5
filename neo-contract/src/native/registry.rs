use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::{
    error::ContractError,
    manifest::ContractMethod,
    runtime::{InvocationContext, InvocationResult, Value},
};

use super::NativeContract;

/// In-memory registry that keeps track of all registered native contracts.
#[derive(Default)]
pub struct NativeRegistry {
    contracts: DashMap<&'static str, Arc<dyn NativeContract>>,
}

impl NativeRegistry {
    pub fn new() -> Self {
        Self {
            contracts: DashMap::new(),
        }
    }

    pub fn register(&self, contract: Arc<dyn NativeContract>) {
        self.contracts.insert(contract.name(), contract);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn NativeContract>> {
        self.contracts.get(name).map(|c| Arc::clone(&c))
    }

    pub fn invoke(
        &self,
        name: &str,
        method: &str,
        ctx: &InvocationContext,
        params: &[Value],
    ) -> Result<InvocationResult, ContractError> {
        let contract = self
            .get(name)
            .ok_or_else(|| ContractError::NativeNotFound(name.to_owned()))?;
        let manifest = contract.manifest();
        let method_def =
            manifest
                .find_method(method)
                .ok_or_else(|| ContractError::MethodNotFound {
                    method: method.to_owned(),
                })?;

        Self::validate_parameters(method_def, params)?;

        debug!(contract = name, method, caller = %ctx.caller, "invoking native method");
        contract.invoke(ctx, method_def, params)
    }

    fn validate_parameters(
        method: &ContractMethod,
        supplied: &[Value],
    ) -> Result<(), ContractError> {
        if method.parameters.len() != supplied.len() {
            return Err(ContractError::invalid_parameters(
                &method.name,
                format!(
                    "expected {} arguments, got {}",
                    method.parameters.len(),
                    supplied.len()
                ),
            ));
        }
        for (param, value) in method.parameters.iter().zip(supplied.iter()) {
            if !param.kind.accepts(value.kind()) {
                return Err(ContractError::invalid_parameters(
                    &method.name,
                    format!(
                        "parameter '{}' expects {}, got {}",
                        param.name,
                        param.kind.as_str(),
                        value.kind().as_str()
                    ),
                ));
            }
        }
        Ok(())
    }
}
