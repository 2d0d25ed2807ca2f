//! One-time, transaction-scoped permissions and the ordered list holding them.

use modvalidation_interface::Operation;
use prost::Message;

use crate::record::Record;
use crate::ALLOWANCES_SPACE_ID;

/// Permission to run `operation` once, inside transaction `tx_id`, granted by
/// `caller`.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct Allowance {
    #[prost(bytes = "vec", tag = "1")]
    pub tx_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub caller: Vec<u8>,
    #[prost(message, required, tag = "3")]
    pub operation: Operation,
}

impl Allowance {
    pub fn new(tx_id: Vec<u8>, caller: Vec<u8>, operation: Operation) -> Self {
        Self {
            tx_id,
            caller,
            operation,
        }
    }

    /// True when this allowance was granted in `tx_id` for exactly `operation`.
    pub fn matches(&self, tx_id: &[u8], operation: &Operation) -> bool {
        self.tx_id == tx_id && self.operation == *operation
    }
}

/// Pending allowances in insertion order. Duplicates are allowed and each is
/// consumed on its own.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct Allowances {
    #[prost(message, repeated, tag = "1")]
    pub value: Vec<Allowance>,
}

impl Allowances {
    pub fn new(value: Vec<Allowance>) -> Self {
        Self { value }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allowance> {
        self.value.iter()
    }

    pub fn push(&mut self, allowance: Allowance) {
        self.value.push(allowance);
    }

    /// Index of the first allowance granted in `tx_id` for `operation`.
    pub fn position(&self, tx_id: &[u8], operation: &Operation) -> Option<usize> {
        self.iter()
            .position(|allowance| allowance.matches(tx_id, operation))
    }

    /// Rebuilds the list without the entry at `index`.
    pub fn without(&self, index: usize) -> Allowances {
        let value = self
            .value
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, allowance)| allowance.clone())
            .collect();
        Allowances { value }
    }
}

impl Record for Allowances {
    const SPACE_ID: u32 = ALLOWANCES_SPACE_ID;
    const NAME: &'static str = "allowances";
}
