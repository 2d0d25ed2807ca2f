//! Entry points exempt from allowance checks.

use prost::Message;

use crate::record::Record;
use crate::SKIP_ENTRY_POINTS_SPACE_ID;

/// Encoded as a packed repeated field; unpacked entries are accepted on decode.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct SkipEntryPoints {
    #[prost(uint32, repeated, tag = "1")]
    pub value: Vec<u32>,
}

impl SkipEntryPoints {
    pub fn new(value: Vec<u32>) -> Self {
        Self { value }
    }

    pub fn contains(&self, entry_point: u32) -> bool {
        self.value.contains(&entry_point)
    }

    /// Appends `entry_point`, returning false when it was already present.
    pub fn insert(&mut self, entry_point: u32) -> bool {
        if self.contains(entry_point) {
            return false;
        }
        self.value.push(entry_point);
        true
    }

    pub fn without(&self, entry_point: u32) -> SkipEntryPoints {
        SkipEntryPoints {
            value: self
                .value
                .iter()
                .copied()
                .filter(|value| *value != entry_point)
                .collect(),
        }
    }
}

impl Record for SkipEntryPoints {
    const SPACE_ID: u32 = SKIP_ENTRY_POINTS_SPACE_ID;
    const NAME: &'static str = "skip entry points";
}
