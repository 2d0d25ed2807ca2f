pub mod allow;
pub mod is_valid_operation;
pub mod lifecycle;
pub mod skip_entry_points;

pub use allow::*;
pub use is_valid_operation::*;
pub use lifecycle::*;
pub use skip_entry_points::*;
