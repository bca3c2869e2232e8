//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::{constants::BAL_V2_DEPLOY_SCRIPT, errors::ScriptError};

/// The chains the updatable rate provider can be deployed to.
///
/// Restricted to the chains with a contract-address entry in
/// [`crate::constants::chain_contracts`], so an unsupported `--chain`
/// fails at argument parsing.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Chain {
    /// Ethereum mainnet
    Mainnet,
    /// Polygon PoS
    Polygon,
    /// Optimism
    Optimism,
    /// Arbitrum One
    Arbitrum,
    /// Base
    Base,
    /// Sei
    Sei,
    /// Avalanche C-chain
    Avalanche,
    /// Sonic
    Sonic,
}

impl Chain {
    /// The lowercase chain name as used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Chain::Mainnet => "mainnet",
            Chain::Polygon => "polygon",
            Chain::Optimism => "optimism",
            Chain::Arbitrum => "arbitrum",
            Chain::Base => "base",
            Chain::Sei => "sei",
            Chain::Avalanche => "avalanche",
            Chain::Sonic => "sonic",
        }
    }

    /// The name of the environment variable holding this chain's RPC URL
    pub fn rpc_url_env_var(self) -> String {
        format!("{}_RPC_URL", self.name().to_uppercase())
    }

    /// All supported chains
    pub const ALL: [Chain; 8] = [
        Chain::Mainnet,
        Chain::Polygon,
        Chain::Optimism,
        Chain::Arbitrum,
        Chain::Base,
        Chain::Sei,
        Chain::Avalanche,
        Chain::Sonic,
    ];
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The Balancer version the rate provider is deployed for
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BalancerVersion {
    /// Balancer v2
    V2,
    /// Balancer v3
    V3,
}

impl BalancerVersion {
    /// The forge script implementing deployment for this version.
    ///
    /// There is no Bal V3 deploy script yet; requesting it is an error.
    pub fn deploy_script(self) -> Result<&'static str, ScriptError> {
        match self {
            BalancerVersion::V2 => Ok(BAL_V2_DEPLOY_SCRIPT),
            BalancerVersion::V3 => {
                Err(ScriptError::Unimplemented(String::from("Bal V3 deployment")))
            }
        }
    }
}

impl Display for BalancerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalancerVersion::V2 => write!(f, "v2"),
            BalancerVersion::V3 => write!(f, "v3"),
        }
    }
}

/// The pool types accepted by the rate provider's `.setPool()` method
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoolType {
    /// An elliptic concentrated liquidity pool
    Eclp,
    /// A 2-asset concentrated liquidity pool
    #[value(name = "2clp")]
    TwoClp,
}

impl PoolType {
    /// The integer code the contract uses for this pool type
    pub const fn code(self) -> u8 {
        match self {
            PoolType::Eclp => 0,
            PoolType::TwoClp => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::{BalancerVersion, Chain, PoolType};
    use crate::errors::ScriptError;

    #[test]
    fn test_pool_type_codes() {
        assert_eq!(PoolType::Eclp.code(), 0);
        assert_eq!(PoolType::TwoClp.code(), 1);
    }

    #[test]
    fn test_pool_type_value_names() {
        assert_eq!(PoolType::from_str("eclp", false), Ok(PoolType::Eclp));
        assert_eq!(PoolType::from_str("2clp", false), Ok(PoolType::TwoClp));
        assert!(PoolType::from_str("3clp", false).is_err());
    }

    #[test]
    fn test_rpc_url_env_var() {
        assert_eq!(Chain::Mainnet.rpc_url_env_var(), "MAINNET_RPC_URL");
        assert_eq!(Chain::Avalanche.rpc_url_env_var(), "AVALANCHE_RPC_URL");
    }

    #[test]
    fn test_v3_deploy_script_unimplemented() {
        assert!(BalancerVersion::V2.deploy_script().is_ok());
        assert!(matches!(
            BalancerVersion::V3.deploy_script(),
            Err(ScriptError::Unimplemented(_))
        ));
    }
}
