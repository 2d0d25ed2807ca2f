//! Any-Operation Validator State
//!
//! Records persisted by the any-operation validation module. Each record is
//! the single object of its own storage space, zoned by the module's contract
//! id:
//!
//! | Space | Record |
//! |---|---|
//! | 0 | [`Allowances`] |
//! | 1 | [`SkipEntryPoints`] |
//! | 2 | [`AccountId`] |

pub mod account;
pub mod allowance;
pub mod error;
pub mod record;
pub mod skip;
pub mod storage;

pub use account::AccountId;
pub use allowance::{Allowance, Allowances};
pub use error::StateError;
pub use record::Record;
pub use skip::SkipEntryPoints;
pub use storage::ModuleStorage;

pub const ALLOWANCES_SPACE_ID: u32 = 0;
pub const SKIP_ENTRY_POINTS_SPACE_ID: u32 = 1;
pub const ACCOUNT_ID_SPACE_ID: u32 = 2;

/// Key of the single object stored in each space.
pub const OBJECT_KEY: &[u8] = &[0];
