/// Prefix of every receipt log line written by this module
pub const LOG_PREFIX: &str = "[mod-validation-any]";

pub const MODULE_NAME: &str = "Any operation validator";
pub const MODULE_DESCRIPTION: &str = "Module to validate any operation";

pub const IS_VALID_OPERATION_ENTRY_POINT: u32 =
    modvalidation_interface::selector::IS_VALID_OPERATION_ENTRY_POINT;
pub const ON_INSTALL_ENTRY_POINT: u32 = modvalidation_interface::selector::ON_INSTALL_ENTRY_POINT;
pub const MANIFEST_ENTRY_POINT: u32 = modvalidation_interface::selector::MANIFEST_ENTRY_POINT;

/// `allow` is exempt from validation so the first allowance can be registered
pub const ALLOW_ENTRY_POINT: u32 = 0x4100_8373;
pub const GET_ALLOWANCES_ENTRY_POINT: u32 = 0x8fa1_6456;
pub const ADD_SKIP_ENTRY_POINT_ENTRY_POINT: u32 = 0xcb29_dfc4;
pub const REMOVE_SKIP_ENTRY_POINT_ENTRY_POINT: u32 = 0x78bf_9aa8;
pub const GET_SKIP_ENTRY_POINTS_ENTRY_POINT: u32 = 0x2622_7439;
pub const GET_ACCOUNT_ID_ENTRY_POINT: u32 = 0xd028_de81;
