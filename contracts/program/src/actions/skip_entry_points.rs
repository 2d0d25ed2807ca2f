//! Skip-list handlers
//!
//! Any caller able to reach the module can change the skip list; restricting
//! who can is left to the account.

use modvalidation_any_state::{ModuleStorage, SkipEntryPoints};
use modvalidation_interface::{Host, ModuleResult};

use crate::error::ModValidationAnyError;

pub fn process_add_skip_entry_point<H: Host + ?Sized>(
    host: &mut H,
    entry_point: u32,
) -> ModuleResult {
    let storage = ModuleStorage::of(host);
    let mut skip = storage.skip_entry_points(host)?.unwrap_or_default();

    if !skip.insert(entry_point) {
        msg!(host, "entry point {} already skipped", entry_point);
        return Ok(());
    }

    storage.put_skip_entry_points(host, &skip);
    Ok(())
}

/// Removing an entry point that is not listed leaves the list as it is.
pub fn process_remove_skip_entry_point<H: Host + ?Sized>(
    host: &mut H,
    entry_point: u32,
) -> ModuleResult {
    let storage = ModuleStorage::of(host);
    let skip = storage
        .skip_entry_points(host)?
        .ok_or(ModValidationAnyError::SkipEntryPointsNotFound)?;

    storage.put_skip_entry_points(host, &skip.without(entry_point));
    Ok(())
}

pub fn process_get_skip_entry_points<H: Host + ?Sized>(
    host: &H,
) -> ModuleResult<SkipEntryPoints> {
    let skip = ModuleStorage::of(host)
        .skip_entry_points(host)?
        .ok_or(ModValidationAnyError::SkipEntryPointsNotFound)?;
    Ok(skip)
}
