//! Any-Operation Validator Error Types

use modvalidation_interface::ModuleError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModValidationAnyError {
    #[error("not authorized by the account")]
    Unauthorized,

    #[error("module is not installed on an account")]
    NotInstalled,

    #[error("call has no caller to bind")]
    MissingCaller,

    #[error("call is not part of a transaction")]
    MissingTransactionId,

    #[error("skip entry points not found")]
    SkipEntryPointsNotFound,
}

impl ModValidationAnyError {
    pub fn code(&self) -> u32 {
        3000 + *self as u32
    }
}

impl From<ModValidationAnyError> for ModuleError {
    fn from(e: ModValidationAnyError) -> Self {
        ModuleError::reverted(e.code(), e.to_string())
    }
}
