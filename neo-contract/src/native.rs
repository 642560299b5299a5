//! Native contract surface and the registry that dispatches to it.

mod registry;

pub use registry::NativeRegistry;

use crate::{
    error::ContractError,
    manifest::{ContractManifest, ContractMethod},
    runtime::{InvocationContext, InvocationResult, Value},
};

pub trait NativeContract: Send + Sync {
    fn name(&self) -> &'static str;
    fn manifest(&self) -> &ContractManifest;
    fn invoke(
        &self,
        ctx: &InvocationContext,
        method: &ContractMethod,
        params: &[Value],
    ) -> Result<InvocationResult, ContractError>;
}
