pub mod init;
pub mod purge;
pub mod scan;
mod command_result;

pub use command_result::*;
