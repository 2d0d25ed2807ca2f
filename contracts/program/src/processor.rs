//! Entry Point Processor
//!
//! Thin dispatcher that decodes arguments, routes each selector to its
//! handler and encodes the result.

use modvalidation_interface::{
    Host, IsValidOperationArgs, IsValidOperationResult, ModuleResult, OnInstallArgs,
};
use prost::Message;

use crate::actions;
use crate::instruction::{AllowArgs, EntryPoint, SkipEntryPointArgs};

pub fn process_call<H: Host + ?Sized>(
    host: &mut H,
    entry_point: u32,
    input: &[u8],
) -> ModuleResult<Vec<u8>> {
    let entry_point = EntryPoint::try_from(entry_point).map_err(|e| {
        tracing::debug!(entry_point, "unknown entry point");
        e
    })?;
    tracing::trace!(
        entry_point = entry_point.name(),
        read_only = entry_point.is_read_only(),
        args_len = input.len(),
        "processing call"
    );

    match entry_point {
        EntryPoint::IsValidOperation => {
            let args = IsValidOperationArgs::decode(input)?;
            let value = actions::process_is_valid_operation(host, &args.operation)?;
            Ok(IsValidOperationResult::new(value).encode_to_vec())
        },

        EntryPoint::Allow => {
            actions::process_allow(host, AllowArgs::decode(input)?)?;
            Ok(Vec::new())
        },

        EntryPoint::GetAllowances => Ok(actions::process_get_allowances(host)?
            .unwrap_or_default()
            .encode_to_vec()),

        EntryPoint::AddSkipEntryPoint => {
            let args = SkipEntryPointArgs::decode(input)?;
            actions::process_add_skip_entry_point(host, args.entry_point)?;
            Ok(Vec::new())
        },

        EntryPoint::RemoveSkipEntryPoint => {
            let args = SkipEntryPointArgs::decode(input)?;
            actions::process_remove_skip_entry_point(host, args.entry_point)?;
            Ok(Vec::new())
        },

        EntryPoint::GetSkipEntryPoints => {
            Ok(actions::process_get_skip_entry_points(host)?.encode_to_vec())
        },

        EntryPoint::OnInstall => {
            // install payload is reserved, it only has to be well formed
            OnInstallArgs::decode(input)?;
            actions::process_on_install(host)?;
            Ok(Vec::new())
        },

        EntryPoint::GetAccountId => Ok(actions::process_get_account_id(host)?.encode_to_vec()),

        EntryPoint::Manifest => Ok(actions::manifest().encode_to_vec()),
    }
}
