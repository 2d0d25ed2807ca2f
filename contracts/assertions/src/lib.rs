use modvalidation_interface::{AuthorizationType, Host};

macro_rules! host_assert {
  ($func_name:ident, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E>($($param: $type,)* error: E) -> Result<(), E> {
          if $check {
              Ok(())
          } else {
              Err(error)
          }
      }
  };
}

macro_rules! host_assert_return {
  ($func_name:ident, $return_type:ty, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<H: Host + ?Sized, E>(host: &H, $($param: $type,)* error: E) -> Result<$return_type, E> {
          match $check(host) {
              Some(value) => Ok(value),
              None => Err(error),
          }
      }
  };
}

host_assert!(check_bytes_match, left: &[u8], right: &[u8] |
  left == right
);

host_assert_return!(require_transaction_id, Vec<u8>, |
  |host: &H| host.transaction_id().filter(|id| !id.is_empty())
);

host_assert_return!(require_caller, Vec<u8>, |
  |host: &H| Some(host.caller()).filter(|caller| !caller.is_empty())
);

/// Fails with `error` unless the host grants contract-call authority for
/// `account` to the current call.
#[inline(always)]
pub fn check_contract_call_authority<H: Host + ?Sized, E>(
    host: &mut H,
    account: &[u8],
    error: E,
) -> Result<(), E> {
    if host.check_authority(AuthorizationType::ContractCall, account) {
        Ok(())
    } else {
        Err(error)
    }
}
