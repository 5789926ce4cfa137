//! Library side of the `cip-dose` command.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
