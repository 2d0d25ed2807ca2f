//! Install hook and module descriptors

use modvalidation_any_state::{AccountId, ModuleStorage};
use modvalidation_assertions::require_caller;
use modvalidation_interface::{Host, Manifest, ModuleResult, Scope, MODULE_VALIDATION_TYPE_ID};

use crate::constants::{MODULE_DESCRIPTION, MODULE_NAME};
use crate::error::ModValidationAnyError;

/// Binds the installing caller as the module's account.
///
/// The host calls this once per installation; a second call rebinds.
pub fn process_on_install<H: Host + ?Sized>(host: &mut H) -> ModuleResult {
    let caller = require_caller(host, ModValidationAnyError::MissingCaller)?;
    ModuleStorage::of(host).put_account_id(host, &AccountId::new(caller));

    msg!(host, "called on_install");
    Ok(())
}

/// Bound account, empty when the module was never installed.
pub fn process_get_account_id<H: Host + ?Sized>(host: &H) -> ModuleResult<AccountId> {
    Ok(ModuleStorage::of(host)
        .account_id(host)?
        .unwrap_or_default())
}

pub fn manifest() -> Manifest {
    Manifest {
        name: MODULE_NAME.to_string(),
        description: MODULE_DESCRIPTION.to_string(),
        type_id: MODULE_VALIDATION_TYPE_ID,
        scopes: vec![Scope::default_scope()],
    }
}
