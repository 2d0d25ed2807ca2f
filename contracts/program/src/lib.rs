//! Any-Operation Validator
//!
//! Validation module for smart accounts. The account asks it whether a user
//! operation may run; the answer is yes when the operation was explicitly
//! allowed earlier in the same transaction (the allowance is then consumed),
//! when its entry point is on the skip list, or when it is the module's own
//! `allow` call.

/// Writes a prefixed line to the transaction receipt.
macro_rules! msg {
    ($host:expr, $($arg:tt)+) => {
        $host.log(&format!(
            "{} {}",
            $crate::constants::LOG_PREFIX,
            format_args!($($arg)+)
        ))
    };
}

pub mod actions;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod processor;

use modvalidation_any_state::{AccountId, Allowances, SkipEntryPoints};
use modvalidation_interface::{
    Host, IsValidOperationArgs, IsValidOperationResult, Manifest, ModuleResult, OnInstallArgs,
    ValidationModule,
};

pub use error::ModValidationAnyError;
pub use instruction::{AllowArgs, EntryPoint, SkipEntryPointArgs};

/// The any-operation validation module.
///
/// Holds no state of its own: every record lives in host storage and the host
/// is passed to each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModValidationAny;

impl ModValidationAny {
    pub fn new() -> Self {
        Self
    }

    /// Runs the entry point addressed by `entry_point` on encoded `args` and
    /// returns the encoded result.
    pub fn call<H: Host + ?Sized>(
        &self,
        host: &mut H,
        entry_point: u32,
        args: &[u8],
    ) -> ModuleResult<Vec<u8>> {
        processor::process_call(host, entry_point, args)
    }

    pub fn allow<H: Host + ?Sized>(&self, host: &mut H, args: AllowArgs) -> ModuleResult {
        actions::process_allow(host, args)
    }

    pub fn get_allowances<H: Host + ?Sized>(&self, host: &H) -> ModuleResult<Option<Allowances>> {
        actions::process_get_allowances(host)
    }

    pub fn add_skip_entry_point<H: Host + ?Sized>(
        &self,
        host: &mut H,
        args: SkipEntryPointArgs,
    ) -> ModuleResult {
        actions::process_add_skip_entry_point(host, args.entry_point)
    }

    pub fn remove_skip_entry_point<H: Host + ?Sized>(
        &self,
        host: &mut H,
        args: SkipEntryPointArgs,
    ) -> ModuleResult {
        actions::process_remove_skip_entry_point(host, args.entry_point)
    }

    pub fn get_skip_entry_points<H: Host + ?Sized>(&self, host: &H) -> ModuleResult<SkipEntryPoints> {
        actions::process_get_skip_entry_points(host)
    }

    pub fn get_account_id<H: Host + ?Sized>(&self, host: &H) -> ModuleResult<AccountId> {
        actions::process_get_account_id(host)
    }
}

impl<H: Host + ?Sized> ValidationModule<H> for ModValidationAny {
    fn is_valid_operation(
        &self,
        host: &mut H,
        args: IsValidOperationArgs,
    ) -> ModuleResult<IsValidOperationResult> {
        actions::process_is_valid_operation(host, &args.operation).map(IsValidOperationResult::new)
    }

    fn on_install(&self, host: &mut H, _args: OnInstallArgs) -> ModuleResult {
        actions::process_on_install(host)
    }

    fn manifest(&self) -> Manifest {
        actions::manifest()
    }
}
