//! Errors surfaced to the host. Returning any of them aborts the enclosing
//! transaction.

use thiserror::Error;

use prost::DecodeError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    #[error("malformed arguments: {0}")]
    Decode(#[from] DecodeError),

    #[error("unknown entry point {0:#010x}")]
    UnknownEntryPoint(u32),

    #[error("{message}")]
    Reverted { code: u32, message: String },
}

impl ModuleError {
    pub fn reverted(code: u32, message: impl Into<String>) -> Self {
        ModuleError::Reverted {
            code,
            message: message.into(),
        }
    }

    /// Module-defined error code, if the failure came from module logic.
    pub fn code(&self) -> Option<u32> {
        match self {
            ModuleError::Reverted { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type ModuleResult<T = ()> = Result<T, ModuleError>;
