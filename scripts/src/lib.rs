//! Scripts for deploying and configuring updatable rate providers.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
