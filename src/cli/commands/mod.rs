pub mod check_missing;
pub mod clean;
mod command_result;
pub mod helper;
pub mod init;
pub mod prune;
pub mod replace;
pub mod scan;
pub mod sync;

pub use command_result::*;
