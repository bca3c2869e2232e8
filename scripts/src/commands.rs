//! Implementation of the updatable rate provider deploy command

use std::process::Command;

use alloy_primitives::U256;
use tracing::info;

use crate::{
    cli::Cli,
    constants::{
        chain_contracts, BAL_V2_RUN_SIGNATURE, BROADCAST_FLAG, FORGE_COMMAND, RPC_URL_FLAG,
        SCRIPT_COMMAND, SIGNATURE_FLAG,
    },
    errors::ScriptError,
    types::Chain,
    utils::{
        chain_rpc_url, derive_deployer_address, resolve_admin, resolve_updater,
        run_to_completion, scale_to_wad,
    },
};

/// The fully resolved parameters of one deployment, ready to be rendered
/// into a forge invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeployment {
    /// The target chain
    pub chain: Chain,
    /// The RPC endpoint for the target chain
    pub rpc_url: String,
    /// The price feed the rate provider wraps
    pub feed: String,
    /// Whether the feed value is inverted
    pub invert: bool,
    /// The wad-scaled initial value; zero means "use the live feed value"
    pub initial_value: U256,
    /// The resolved admin address
    pub admin: String,
    /// The resolved updater address
    pub updater: String,
    /// Whether to broadcast the transaction or only simulate it
    pub broadcast: bool,
}

impl ResolvedDeployment {
    /// Resolves the raw CLI arguments against the environment, the static
    /// chain tables, and the given deployer address
    pub fn resolve(args: &Cli, deployer_address: &str) -> Result<Self, ScriptError> {
        let admin = resolve_admin(&args.admin, args.chain, deployer_address)?;
        let updater = resolve_updater(&args.updater, deployer_address);
        let rpc_url = chain_rpc_url(args.chain)?;
        let initial_value = match &args.initial_value {
            Some(value) => scale_to_wad(value)?,
            None => U256::ZERO,
        };

        Ok(ResolvedDeployment {
            chain: args.chain,
            rpc_url,
            feed: args.feed.clone(),
            invert: args.invert,
            initial_value,
            admin,
            updater,
            broadcast: args.broadcast,
        })
    }

    /// Renders the ordered forge argument list for this deployment.
    ///
    /// The argument order matches the deploy script's `run` signature and
    /// must not be reordered.
    pub fn forge_argv(&self, script_path: &str) -> Vec<String> {
        let contracts = chain_contracts(self.chain);
        let mut argv = vec![
            FORGE_COMMAND.to_string(),
            SCRIPT_COMMAND.to_string(),
            script_path.to_string(),
            RPC_URL_FLAG.to_string(),
            self.rpc_url.clone(),
            SIGNATURE_FLAG.to_string(),
            BAL_V2_RUN_SIGNATURE.to_string(),
            self.feed.clone(),
            if self.invert { "true" } else { "false" }.to_string(),
            self.initial_value.to_string(),
            self.admin.clone(),
            self.updater.clone(),
            contracts.gyro_config_manager.to_string(),
            contracts.governance_role_manager.to_string(),
        ];
        if self.broadcast {
            argv.push(BROADCAST_FLAG.to_string());
        }

        argv
    }
}

/// Resolves the deployment parameters and runs the forge deploy script,
/// printing the full invocation before executing it
pub fn deploy_updatable_rate_provider(args: &Cli) -> Result<(), ScriptError> {
    // Bail before touching the wallet; there is no Bal V3 deploy script yet
    let script_path = args.bal_version.deploy_script()?;

    let deployer_address = derive_deployer_address()?;
    info!("deployer address: {}", deployer_address);

    let deployment = ResolvedDeployment::resolve(args, &deployer_address)?;
    if deployment.broadcast {
        info!("broadcasting deployment to {}", deployment.chain);
    } else {
        info!("simulating only; pass --broadcast to deploy");
    }

    let argv = deployment.forge_argv(script_path);
    println!("{}", argv.join(" "));

    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]);
    run_to_completion(cmd)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use clap::Parser;

    use super::{deploy_updatable_rate_provider, ResolvedDeployment};
    use crate::{
        cli::Cli,
        constants::{BAL_V2_DEPLOY_SCRIPT, ZERO_ADDRESS},
        errors::ScriptError,
        types::Chain,
    };

    /// A stand-in for the address `cast wallet address` would derive
    const DEPLOYER: &str = "0x1111111111111111111111111111111111111111";
    /// The feed address used throughout the tests
    const FEED: &str = "0x4444444444444444444444444444444444444444";

    /// Parses a deploy CLI invocation from the given trailing arguments
    fn parse_cli(chain: &str, version: &str, rest: &[&str]) -> Cli {
        let mut argv = vec![
            "deploy-updatable-rate-provider",
            "--chain",
            chain,
            version,
            FEED,
        ];
        argv.extend_from_slice(rest);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_forge_argv_order() {
        let deployment = ResolvedDeployment {
            chain: Chain::Mainnet,
            rpc_url: "http://localhost:8545".to_string(),
            feed: FEED.to_string(),
            invert: false,
            initial_value: U256::ZERO,
            admin: DEPLOYER.to_string(),
            updater: ZERO_ADDRESS.to_string(),
            broadcast: false,
        };

        assert_eq!(
            deployment.forge_argv(BAL_V2_DEPLOY_SCRIPT),
            vec![
                "forge",
                "script",
                "script/DeployUpdatableRateProviderBalV2.sol",
                "--rpc-url",
                "http://localhost:8545",
                "-s",
                "run(address,bool,uint256,address,address,address,address)",
                FEED,
                "false",
                "0",
                DEPLOYER,
                ZERO_ADDRESS,
                "0xCb5830e6dBaD1430D6902a846F1b37d4Cfe49b31",
                "0x0B39C433F591f4faBa2a3E5B2d55ba05DBDEa392",
            ]
        );
    }

    #[test]
    fn test_forge_argv_broadcast_flag_is_last() {
        let deployment = ResolvedDeployment {
            chain: Chain::Sonic,
            rpc_url: "http://localhost:8545".to_string(),
            feed: FEED.to_string(),
            invert: true,
            initial_value: U256::from(1_500_000_000_000_000_000u64),
            admin: DEPLOYER.to_string(),
            updater: DEPLOYER.to_string(),
            broadcast: true,
        };

        let argv = deployment.forge_argv(BAL_V2_DEPLOY_SCRIPT);
        assert_eq!(argv.last().map(String::as_str), Some("--broadcast"));
        // Sonic has its own contract addresses
        assert!(argv.contains(&"0xCe276785E78796dcbb4FE07Fd335c89A1F784CA4".to_string()));
        assert!(argv.contains(&"true".to_string()));
        assert!(argv.contains(&"1500000000000000000".to_string()));
    }

    #[test]
    fn test_resolve_reads_rpc_url_from_env() {
        std::env::set_var("SEI_RPC_URL", "https://sei.example");
        let cli = parse_cli("sei", "v2", &["--admin", "default", "--updater", "none"]);

        let deployment = ResolvedDeployment::resolve(&cli, DEPLOYER).unwrap();
        assert_eq!(deployment.rpc_url, "https://sei.example");
        assert_eq!(deployment.admin, "0xd81a95F69FA68560653d5c51905FF3BdFd03F0A5");
        assert_eq!(deployment.updater, ZERO_ADDRESS);
        assert_eq!(deployment.initial_value, U256::ZERO);
    }

    #[test]
    fn test_resolve_missing_rpc_url_errors() {
        std::env::remove_var("POLYGON_RPC_URL");
        let cli = parse_cli("polygon", "v2", &["--admin", "none", "--updater", "none"]);

        assert!(matches!(
            ResolvedDeployment::resolve(&cli, DEPLOYER),
            Err(ScriptError::EnvVar(var)) if var == "POLYGON_RPC_URL"
        ));
    }

    #[test]
    fn test_v3_fails_before_any_subprocess() {
        // No PRIVATE_KEY in the environment, so reaching the wallet
        // derivation step would surface an `EnvVar` error instead
        std::env::remove_var("PRIVATE_KEY");
        let cli = parse_cli("base", "v3", &["--admin", "none", "--updater", "none"]);

        assert!(matches!(
            deploy_updatable_rate_provider(&cli),
            Err(ScriptError::Unimplemented(_))
        ));
    }
}
