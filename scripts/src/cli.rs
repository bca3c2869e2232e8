//! Definitions of CLI arguments for the deploy scripts

use clap::Parser;

use crate::types::{BalancerVersion, Chain};

/// Deploy an updatable rate provider wrapping a price feed
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Chain to use
    #[arg(long, value_enum)]
    pub chain: Chain,

    /// Balancer version to use
    #[arg(value_enum)]
    pub bal_version: BalancerVersion,

    /// Connected price feed
    pub feed: String,

    /// Admin. Pass 'deployer' to use the deployer itself, 'default' to use
    /// the default admin for that chain (see constants.rs), or 'none' to
    /// disable the admin. Anything else is used as a literal address.
    #[arg(long)]
    pub admin: String,

    /// Updater. Pass 'deployer' to use the deployer itself or 'none' to not
    /// set up anything at deployment. If 'none', you need to manually
    /// configure an updater later.
    #[arg(long)]
    pub updater: String,

    /// If passed, use 1/(feed value) instead of the feed value itself
    #[arg(long)]
    pub invert: bool,

    /// If passed, use the given value (an unscaled decimal) as the initial
    /// value of the updatable rate provider; otherwise, use the current
    /// feed value (default)
    #[arg(long)]
    pub initial_value: Option<String>,

    /// Broadcast. Otherwise, we just simulate.
    #[arg(long)]
    pub broadcast: bool,
}
