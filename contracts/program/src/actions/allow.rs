//! Allow and GetAllowances handlers

use modvalidation_any_state::{Allowance, Allowances, ModuleStorage};
use modvalidation_assertions::{
    check_bytes_match, check_contract_call_authority, require_transaction_id,
};
use modvalidation_interface::{Host, ModuleResult};

use crate::error::ModValidationAnyError;
use crate::instruction::AllowArgs;

/// Registers a one-time allowance for `args.operation`, redeemable only within
/// the current transaction.
///
/// The allowance is granted by the account the module is bound to, which must
/// authorize the call. Nothing is written when any check fails.
pub fn process_allow<H: Host + ?Sized>(host: &mut H, args: AllowArgs) -> ModuleResult {
    let storage = ModuleStorage::of(host);

    let account = storage
        .account_id(host)?
        .ok_or(ModValidationAnyError::NotInstalled)?;

    if !args.user.is_empty() {
        check_bytes_match(&args.user, &account.value, ModValidationAnyError::Unauthorized)?;
    }

    check_contract_call_authority(host, &account.value, ModValidationAnyError::Unauthorized)?;

    let tx_id = require_transaction_id(host, ModValidationAnyError::MissingTransactionId)?;

    let entry_point = args.operation.entry_point;
    let mut allowances = storage.allowances(host)?.unwrap_or_default();
    allowances.push(Allowance::new(tx_id, account.value, args.operation));
    storage.put_allowances(host, &allowances);

    msg!(host, "pre-allow {}", entry_point);
    Ok(())
}

/// Pending allowances, `None` when none was ever registered.
pub fn process_get_allowances<H: Host + ?Sized>(host: &H) -> ModuleResult<Option<Allowances>> {
    Ok(ModuleStorage::of(host).allowances(host)?)
}
