//! IsValidOperation handler
//!
//! Decision order, first match wins:
//! 1. `allow` on this module itself is always valid, otherwise no allowance
//!    could ever be registered.
//! 2. Skip-listed entry points are valid for any target and arguments.
//! 3. The first allowance granted in the current transaction for exactly this
//!    operation is consumed and the operation is valid.
//!
//! Anything else is denied. A denial is a normal answer, the account decides
//! whether to abort. Unreadable stored records deny as well.

use modvalidation_any_state::{ModuleStorage, StateError};
use modvalidation_interface::{Host, ModuleResult, Operation};

use crate::constants::ALLOW_ENTRY_POINT;

pub fn process_is_valid_operation<H: Host + ?Sized>(
    host: &mut H,
    operation: &Operation,
) -> ModuleResult<bool> {
    let storage = ModuleStorage::of(host);

    if operation.targets(storage.contract_id(), ALLOW_ENTRY_POINT) {
        msg!(host, "skip allow");
        return Ok(true);
    }

    let valid = check_records(host, &storage, operation).unwrap_or_else(|e| {
        tracing::warn!(error = %e, entry_point = operation.entry_point, "denying on unreadable state");
        false
    });

    if !valid {
        msg!(host, "fail {}", operation.entry_point);
    }
    Ok(valid)
}

fn check_records<H: Host + ?Sized>(
    host: &mut H,
    storage: &ModuleStorage,
    operation: &Operation,
) -> Result<bool, StateError> {
    if let Some(skip) = storage.skip_entry_points(host)? {
        if skip.contains(operation.entry_point) {
            msg!(host, "skip {}", operation.entry_point);
            return Ok(true);
        }
    }

    msg!(host, "checking {}", operation.entry_point);

    let Some(tx_id) = host.transaction_id() else {
        return Ok(false);
    };
    let Some(allowances) = storage
        .allowances(host)?
        .filter(|allowances| !allowances.is_empty())
    else {
        return Ok(false);
    };

    match allowances.position(&tx_id, operation) {
        Some(index) => {
            storage.put_allowances(host, &allowances.without(index));
            msg!(host, "allowing {}", operation.entry_point);
            Ok(true)
        },
        None => Ok(false),
    }
}
