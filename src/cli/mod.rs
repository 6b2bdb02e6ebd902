//! CLI module
//!
//! # Commands
//!
//! - `uasg` - collect the organizational units registry
//! - `orgao` - collect the organization records registry
//! - `pgc` - collect procurement-plan line items per CNPJ
//! - `endpoints` - list the built-in registries

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
