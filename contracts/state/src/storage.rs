//! Typed access to the module's storage spaces.

use modvalidation_interface::{Host, Space};
use prost::Message;

use crate::{
    error::StateError, record::Record, AccountId, Allowances, SkipEntryPoints, OBJECT_KEY,
};

/// Loads and stores the module's records in the spaces zoned by its own
/// contract id. The host is passed to every call so each operation reads,
/// mutates and writes back within the invocation that owns it.
#[derive(Debug, Clone)]
pub struct ModuleStorage {
    contract_id: Vec<u8>,
}

impl ModuleStorage {
    pub fn new(contract_id: Vec<u8>) -> Self {
        Self { contract_id }
    }

    /// Storage of the contract currently executing on `host`.
    pub fn of<H: Host + ?Sized>(host: &H) -> Self {
        Self::new(host.contract_id())
    }

    pub fn contract_id(&self) -> &[u8] {
        &self.contract_id
    }

    pub fn space<R: Record>(&self) -> Space {
        Space::contract(&self.contract_id, R::SPACE_ID)
    }

    /// Reads a record, `None` when it was never written.
    pub fn load<R: Record, H: Host + ?Sized>(&self, host: &H) -> Result<Option<R>, StateError> {
        host.get_object(&self.space::<R>(), OBJECT_KEY)
            .map(|bytes| {
                R::decode(bytes.as_slice()).map_err(|source| StateError::CorruptedRecord {
                    record: R::NAME,
                    source,
                })
            })
            .transpose()
    }

    pub fn store<R: Record, H: Host + ?Sized>(&self, host: &mut H, record: &R) {
        host.put_object(&self.space::<R>(), OBJECT_KEY, &record.encode_to_vec());
    }

    pub fn allowances<H: Host + ?Sized>(&self, host: &H) -> Result<Option<Allowances>, StateError> {
        self.load(host)
    }

    pub fn put_allowances<H: Host + ?Sized>(&self, host: &mut H, allowances: &Allowances) {
        self.store(host, allowances)
    }

    pub fn skip_entry_points<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> Result<Option<SkipEntryPoints>, StateError> {
        self.load(host)
    }

    pub fn put_skip_entry_points<H: Host + ?Sized>(&self, host: &mut H, skip: &SkipEntryPoints) {
        self.store(host, skip)
    }

    pub fn account_id<H: Host + ?Sized>(&self, host: &H) -> Result<Option<AccountId>, StateError> {
        self.load(host)
    }

    pub fn put_account_id<H: Host + ?Sized>(&self, host: &mut H, account_id: &AccountId) {
        self.store(host, account_id)
    }
}
