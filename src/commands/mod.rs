//! Command implementations for the datafun CLI

pub mod completions;
pub mod fetch;
pub mod helpers;
pub mod init;
pub mod list;
pub mod process;
pub mod run;
pub mod version;

pub use helpers::CommandContext;
