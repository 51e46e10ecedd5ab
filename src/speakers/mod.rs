pub mod format;
pub mod prefix;

pub use format::*;
pub use prefix::*;
