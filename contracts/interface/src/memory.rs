//! In-process [`Host`] used by tests and local tooling.
//!
//! Storage lives in a `BTreeMap`. A transaction snapshots storage when it
//! begins; [`MemoryHost::abort_transaction`] restores the snapshot, which is
//! how a chain reverts every write of a failed transaction.

use std::collections::{BTreeMap, BTreeSet};

use crate::host::{AuthorizationType, Host, Space};

type StorageKey = (Space, Vec<u8>);

#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    contract_id: Vec<u8>,
    caller: Vec<u8>,
    transaction_id: Option<Vec<u8>>,
    authorities: BTreeSet<(AuthorizationType, Vec<u8>)>,
    storage: BTreeMap<StorageKey, Vec<u8>>,
    snapshot: Option<BTreeMap<StorageKey, Vec<u8>>>,
    logs: Vec<String>,
}

impl MemoryHost {
    pub fn new(contract_id: impl Into<Vec<u8>>) -> Self {
        Self {
            contract_id: contract_id.into(),
            ..Self::default()
        }
    }

    pub fn set_contract_id(&mut self, contract_id: impl Into<Vec<u8>>) {
        self.contract_id = contract_id.into();
    }

    pub fn set_caller(&mut self, caller: impl Into<Vec<u8>>) {
        self.caller = caller.into();
    }

    /// Makes the authority check succeed for `account`.
    pub fn grant_authority(&mut self, kind: AuthorizationType, account: impl Into<Vec<u8>>) {
        self.authorities.insert((kind, account.into()));
    }

    pub fn revoke_authority(&mut self, kind: AuthorizationType, account: &[u8]) {
        self.authorities.remove(&(kind, account.to_vec()));
    }

    /// Starts applying transaction `id`. A transaction left open is committed
    /// implicitly.
    pub fn begin_transaction(&mut self, id: impl Into<Vec<u8>>) {
        if self.snapshot.is_some() {
            self.commit_transaction();
        }
        let id = id.into();
        tracing::debug!(target: "host", tx_id = %hex::encode(&id), "begin transaction");
        self.snapshot = Some(self.storage.clone());
        self.transaction_id = Some(id);
    }

    pub fn commit_transaction(&mut self) {
        self.snapshot = None;
        self.transaction_id = None;
    }

    /// Reverts every write made since the transaction began.
    pub fn abort_transaction(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            tracing::warn!(
                target: "host",
                tx_id = %self.transaction_id.as_deref().map(hex::encode).unwrap_or_default(),
                "transaction reverted"
            );
            self.storage = snapshot;
        }
        self.transaction_id = None;
    }

    pub fn in_transaction(&self) -> bool {
        self.transaction_id.is_some()
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }

    pub fn object_count(&self) -> usize {
        self.storage.len()
    }
}

impl Host for MemoryHost {
    fn contract_id(&self) -> Vec<u8> {
        self.contract_id.clone()
    }

    fn caller(&self) -> Vec<u8> {
        self.caller.clone()
    }

    fn transaction_id(&self) -> Option<Vec<u8>> {
        self.transaction_id.clone()
    }

    fn check_authority(&mut self, kind: AuthorizationType, account: &[u8]) -> bool {
        self.authorities.contains(&(kind, account.to_vec()))
    }

    fn get_object(&self, space: &Space, key: &[u8]) -> Option<Vec<u8>> {
        self.storage.get(&(space.clone(), key.to_vec())).cloned()
    }

    fn put_object(&mut self, space: &Space, key: &[u8], value: &[u8]) {
        self.storage
            .insert((space.clone(), key.to_vec()), value.to_vec());
    }

    fn remove_object(&mut self, space: &Space, key: &[u8]) {
        self.storage.remove(&(space.clone(), key.to_vec()));
    }

    fn log(&mut self, message: &str) {
        tracing::debug!(target: "host", "{message}");
        self.logs.push(message.to_string());
    }
}
