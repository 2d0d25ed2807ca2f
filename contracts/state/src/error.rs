use modvalidation_interface::ModuleError;
use prost::DecodeError;
use thiserror::Error;

/// Error types related to persisted records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A stored record no longer decodes
    #[error("stored {record} record is corrupted: {source}")]
    CorruptedRecord {
        record: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl StateError {
    pub fn code(&self) -> u32 {
        match self {
            StateError::CorruptedRecord { .. } => 2000,
        }
    }
}

impl From<StateError> for ModuleError {
    fn from(e: StateError) -> Self {
        ModuleError::reverted(e.code(), e.to_string())
    }
}
