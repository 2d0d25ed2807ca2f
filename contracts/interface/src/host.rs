//! System calls a module consumes from the chain it runs on.

/// Capability a caller must hold on an account, as understood by the host's
/// authority check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AuthorizationType {
    ContractCall = 0,
    TransactionApplication = 1,
    ContractUpload = 2,
}

/// A storage partition. Contract spaces are zoned by the owning contract id, so
/// a module can only ever address its own records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Space {
    pub system: bool,
    pub zone: Vec<u8>,
    pub id: u32,
}

impl Space {
    pub fn contract(zone: &[u8], id: u32) -> Self {
        Self {
            system: false,
            zone: zone.to_vec(),
            id,
        }
    }
}

/// Execution environment of a module invocation.
///
/// The host serializes every state-mutating call and owns transaction
/// atomicity: when an entry point returns an error the host reverts all writes
/// made during the enclosing transaction.
pub trait Host {
    /// Id of the contract currently executing.
    fn contract_id(&self) -> Vec<u8>;

    /// Id of the account or contract that invoked the current call.
    fn caller(&self) -> Vec<u8>;

    /// Id of the transaction being applied, if the call runs inside one.
    fn transaction_id(&self) -> Option<Vec<u8>>;

    /// Asks the host whether the current call holds `kind` authority for
    /// `account`.
    fn check_authority(&mut self, kind: AuthorizationType, account: &[u8]) -> bool;

    fn get_object(&self, space: &Space, key: &[u8]) -> Option<Vec<u8>>;

    fn put_object(&mut self, space: &Space, key: &[u8], value: &[u8]);

    fn remove_object(&mut self, space: &Space, key: &[u8]);

    /// Appends a line to the transaction receipt.
    fn log(&mut self, message: &str);
}
