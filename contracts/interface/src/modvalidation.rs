//! Surface shared by every validation module.
//!
//! An account installs one or more validation modules and asks each of them,
//! through [`ValidationModule::is_valid_operation`], whether a user operation
//! may run. Which family a module belongs to is advertised by the `type_id`
//! of its [`Manifest`].

use prost::Message;

use crate::error::ModuleResult;
use crate::host::Host;

pub const MODULE_VALIDATION_TYPE_ID: u32 = 1;
pub const MODULE_EXECUTION_TYPE_ID: u32 = 2;
pub const MODULE_SIGN_TYPE_ID: u32 = 3;
pub const MODULE_HOOK_TYPE_ID: u32 = 4;

/// Module family tag carried in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ModuleType {
    Validation = MODULE_VALIDATION_TYPE_ID,
    Execution = MODULE_EXECUTION_TYPE_ID,
    Sign = MODULE_SIGN_TYPE_ID,
    Hook = MODULE_HOOK_TYPE_ID,
}

impl TryFrom<u32> for ModuleType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            MODULE_VALIDATION_TYPE_ID => Ok(ModuleType::Validation),
            MODULE_EXECUTION_TYPE_ID => Ok(ModuleType::Execution),
            MODULE_SIGN_TYPE_ID => Ok(ModuleType::Sign),
            MODULE_HOOK_TYPE_ID => Ok(ModuleType::Hook),
            other => Err(other),
        }
    }
}

/// A contract call proposed for execution on behalf of an account.
#[derive(Clone, PartialEq, Eq, Hash, Message)]
pub struct Operation {
    #[prost(bytes = "vec", tag = "1")]
    pub contract_id: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub entry_point: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub args: Vec<u8>,
}

impl Operation {
    pub fn new(contract_id: impl Into<Vec<u8>>, entry_point: u32, args: impl Into<Vec<u8>>) -> Self {
        Self {
            contract_id: contract_id.into(),
            entry_point,
            args: args.into(),
        }
    }

    pub fn targets(&self, contract_id: &[u8], entry_point: u32) -> bool {
        self.contract_id == contract_id && self.entry_point == entry_point
    }
}

#[cfg(any(test, feature = "memory-host"))]
impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}:{}",
            hex::encode(&self.contract_id),
            self.entry_point
        )
    }
}

/// The operation is always written, even when empty.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct IsValidOperationArgs {
    #[prost(message, required, tag = "1")]
    pub operation: Operation,
}

#[derive(Clone, Copy, PartialEq, Eq, Message)]
pub struct IsValidOperationResult {
    #[prost(bool, tag = "1")]
    pub value: bool,
}

impl IsValidOperationResult {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

/// Arguments an account passes when it installs a module. The payload is
/// module-defined and may be empty.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct OnInstallArgs {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

/// Entry points an installed module is consulted for. An empty `contract_id`
/// matches any contract.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct Scope {
    #[prost(uint32, tag = "1")]
    pub entry_point: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub contract_id: Vec<u8>,
}

impl Scope {
    /// Scope accounts fall back to when no narrower scope matches an operation.
    pub const DEFAULT_ENTRY_POINT: u32 = 1;

    pub fn new(entry_point: u32) -> Self {
        Self {
            entry_point,
            contract_id: Vec::new(),
        }
    }

    pub fn default_scope() -> Self {
        Self::new(Self::DEFAULT_ENTRY_POINT)
    }
}

#[derive(Clone, PartialEq, Eq, Message)]
pub struct Manifest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(uint32, tag = "3")]
    pub type_id: u32,
    #[prost(message, repeated, tag = "4")]
    pub scopes: Vec<Scope>,
}

impl Manifest {
    pub fn module_type(&self) -> Option<ModuleType> {
        ModuleType::try_from(self.type_id).ok()
    }
}

/// Capability set every validation-class module implements.
pub trait ValidationModule<H: Host + ?Sized> {
    /// Reports whether `args.operation` may run. A denial is `Ok` with a false
    /// value; an `Err` aborts the transaction.
    fn is_valid_operation(
        &self,
        host: &mut H,
        args: IsValidOperationArgs,
    ) -> ModuleResult<IsValidOperationResult>;

    /// Called once by the host when an account attaches the module.
    fn on_install(&self, host: &mut H, args: OnInstallArgs) -> ModuleResult;

    fn manifest(&self) -> Manifest;
}
