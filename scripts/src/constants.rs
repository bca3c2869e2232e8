//! Constants used in the deploy scripts

use crate::types::Chain;

/// The per-chain protocol contracts the rate provider is wired to at deployment
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainContracts {
    /// Address of the Gyro config manager contract
    pub gyro_config_manager: &'static str,
    /// Address of the governance role manager contract
    pub governance_role_manager: &'static str,
}

/// The zero address, used to disable a role at deployment
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// The name of the forge command
pub const FORGE_COMMAND: &str = "forge";

/// The forge subcommand that runs a Solidity script
pub const SCRIPT_COMMAND: &str = "script";

/// The path of the Bal V2 deploy script within the contracts repo
pub const BAL_V2_DEPLOY_SCRIPT: &str = "script/DeployUpdatableRateProviderBalV2.sol";

/// The signature of the Bal V2 deploy script's entrypoint
pub const BAL_V2_RUN_SIGNATURE: &str =
    "run(address,bool,uint256,address,address,address,address)";

/// The forge flag selecting the script entrypoint signature
pub const SIGNATURE_FLAG: &str = "-s";

/// The forge flag naming the RPC endpoint
pub const RPC_URL_FLAG: &str = "--rpc-url";

/// The forge flag that broadcasts the transaction instead of simulating it
pub const BROADCAST_FLAG: &str = "--broadcast";

/// The name of the cast command
pub const CAST_COMMAND: &str = "cast";

/// The cast subcommand for wallet operations
pub const WALLET_COMMAND: &str = "wallet";

/// The cast wallet subcommand deriving an address from a private key
pub const ADDRESS_COMMAND: &str = "address";

/// The name of the environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The number of decimals in the protocol's fixed-point representation
pub const WAD_DECIMALS: usize = 18;

/// The admin selector resolving to the deployer's own address
pub const ROLE_DEPLOYER: &str = "deployer";

/// The admin selector resolving to the chain's default admin multisig
pub const ROLE_DEFAULT: &str = "default";

/// The admin/updater selector that disables the role
pub const ROLE_NONE: &str = "none";

/// Returns the protocol contract addresses for the given chain.
///
/// NB these are static and the same on all chains where the protocol is
/// deployed, with the exception of sonic.
pub const fn chain_contracts(chain: Chain) -> ChainContracts {
    match chain {
        Chain::Sonic => ChainContracts {
            gyro_config_manager: "0xCe276785E78796dcbb4FE07Fd335c89A1F784CA4",
            governance_role_manager: "0xF47998c67D7EBbba8780B37c5d92cb282EB26905",
        },
        _ => ChainContracts {
            gyro_config_manager: "0xCb5830e6dBaD1430D6902a846F1b37d4Cfe49b31",
            governance_role_manager: "0x0B39C433F591f4faBa2a3E5B2d55ba05DBDEa392",
        },
    }
}

/// Returns the parameter-setting multisig used when `--admin default` is
/// passed, if one is configured for the chain
pub const fn default_admin(chain: Chain) -> Option<&'static str> {
    match chain {
        Chain::Polygon => Some("0xEf63C5ceDEc9d53911162BEd5cE8956AE570387B"),
        Chain::Mainnet => Some("0xd096c2eBE242801466e6f1aC2BF5228cE1Fd445C"),
        Chain::Optimism => Some("0x8c1ce9CfD579A26D86Fd7c2fA980c28AC4C7B282"),
        Chain::Arbitrum => Some("0x0a2b93a5e0281557428cbd7ed75aa76dadd6c6ab"),
        Chain::Base => Some("0xf993e9B46782Edb083d0B1C4F4AE026F20dbeb4E"),
        Chain::Sei => Some("0xd81a95F69FA68560653d5c51905FF3BdFd03F0A5"),
        Chain::Avalanche => Some("0x4BC2A6f1E34F951AA763B061bE93979922fA3728"),
        Chain::Sonic => None,
    }
}
