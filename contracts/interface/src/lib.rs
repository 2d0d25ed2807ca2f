//! Interface between smart-account modules and the chain that hosts them.
//!
//! Defines the system calls a module consumes ([`Host`]) and the surface
//! shared by all validation modules ([`modvalidation`]). Arguments, results
//! and records are protobuf messages encoded with `prost`.

pub mod error;
pub mod host;
pub mod modvalidation;
pub mod selector;

#[cfg(any(test, feature = "memory-host"))]
pub mod memory;

pub use error::{ModuleError, ModuleResult};
pub use host::{AuthorizationType, Host, Space};
#[cfg(any(test, feature = "memory-host"))]
pub use memory::MemoryHost;
pub use modvalidation::{
    IsValidOperationArgs, IsValidOperationResult, Manifest, ModuleType, OnInstallArgs, Operation,
    Scope, ValidationModule, MODULE_VALIDATION_TYPE_ID,
};
pub use selector::entry_point_selector;
