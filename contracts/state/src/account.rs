use prost::Message;

use crate::record::Record;
use crate::ACCOUNT_ID_SPACE_ID;

/// The account a module instance was installed for. Written once by
/// `on_install`.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct AccountId {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

impl AccountId {
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }
}

impl Record for AccountId {
    const SPACE_ID: u32 = ACCOUNT_ID_SPACE_ID;
    const NAME: &'static str = "account id";
}
