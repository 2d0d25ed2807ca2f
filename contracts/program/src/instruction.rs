//! Any-Operation Validator Entry Points
//!
//! Every external operation is addressed by its selector, see
//! [`modvalidation_interface::entry_point_selector`]. Arguments and results
//! are protobuf messages.

use modvalidation_interface::{ModuleError, Operation};
use prost::Message;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EntryPoint {
    /// Decide whether an operation may run, consuming a matching allowance
    IsValidOperation = IS_VALID_OPERATION_ENTRY_POINT,
    /// Register a one-time allowance for the current transaction
    Allow = ALLOW_ENTRY_POINT,
    GetAllowances = GET_ALLOWANCES_ENTRY_POINT,
    AddSkipEntryPoint = ADD_SKIP_ENTRY_POINT_ENTRY_POINT,
    RemoveSkipEntryPoint = REMOVE_SKIP_ENTRY_POINT_ENTRY_POINT,
    GetSkipEntryPoints = GET_SKIP_ENTRY_POINTS_ENTRY_POINT,
    /// Bind the installing account
    OnInstall = ON_INSTALL_ENTRY_POINT,
    GetAccountId = GET_ACCOUNT_ID_ENTRY_POINT,
    Manifest = MANIFEST_ENTRY_POINT,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 9] = [
        EntryPoint::IsValidOperation,
        EntryPoint::Allow,
        EntryPoint::GetAllowances,
        EntryPoint::AddSkipEntryPoint,
        EntryPoint::RemoveSkipEntryPoint,
        EntryPoint::GetSkipEntryPoints,
        EntryPoint::OnInstall,
        EntryPoint::GetAccountId,
        EntryPoint::Manifest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntryPoint::IsValidOperation => "is_valid_operation",
            EntryPoint::Allow => "allow",
            EntryPoint::GetAllowances => "get_allowances",
            EntryPoint::AddSkipEntryPoint => "add_skip_entry_point",
            EntryPoint::RemoveSkipEntryPoint => "remove_skip_entry_point",
            EntryPoint::GetSkipEntryPoints => "get_skip_entry_points",
            EntryPoint::OnInstall => "on_install",
            EntryPoint::GetAccountId => "get_account_id",
            EntryPoint::Manifest => "manifest",
        }
    }

    pub fn selector(&self) -> u32 {
        *self as u32
    }

    /// Read-only entry points never write storage.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            EntryPoint::GetAllowances
                | EntryPoint::GetSkipEntryPoints
                | EntryPoint::GetAccountId
                | EntryPoint::Manifest
        )
    }
}

impl TryFrom<u32> for EntryPoint {
    type Error = ModuleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        EntryPoint::ALL
            .into_iter()
            .find(|entry_point| entry_point.selector() == value)
            .ok_or(ModuleError::UnknownEntryPoint(value))
    }
}

/// Arguments of `allow`.
///
/// `user` is optional; when set it must name the account the module is bound
/// to.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct AllowArgs {
    #[prost(bytes = "vec", tag = "1")]
    pub user: Vec<u8>,
    #[prost(message, required, tag = "2")]
    pub operation: Operation,
}

impl AllowArgs {
    pub fn new(operation: Operation) -> Self {
        Self {
            user: Vec::new(),
            operation,
        }
    }

    pub fn for_user(user: Vec<u8>, operation: Operation) -> Self {
        Self { user, operation }
    }
}

/// Arguments of `add_skip_entry_point` and `remove_skip_entry_point`.
#[derive(Clone, Copy, PartialEq, Eq, Message)]
pub struct SkipEntryPointArgs {
    #[prost(uint32, tag = "1")]
    pub entry_point: u32,
}

impl SkipEntryPointArgs {
    pub fn new(entry_point: u32) -> Self {
        Self { entry_point }
    }
}
