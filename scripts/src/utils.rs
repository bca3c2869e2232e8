//! Utilities for the deploy scripts

use std::{
    env,
    process::{Command, Stdio},
};

use alloy_primitives::U256;

use crate::{
    constants::{
        default_admin, ADDRESS_COMMAND, CAST_COMMAND, PRIVATE_KEY_ENV_VAR, ROLE_DEFAULT,
        ROLE_DEPLOYER, ROLE_NONE, WAD_DECIMALS, WALLET_COMMAND, ZERO_ADDRESS,
    },
    errors::ScriptError,
    types::Chain,
};

/// Derives the deployer's address from the `PRIVATE_KEY` environment
/// variable by shelling out to `cast wallet address`
pub fn derive_deployer_address() -> Result<String, ScriptError> {
    let priv_key = env::var(PRIVATE_KEY_ENV_VAR)
        .map_err(|_| ScriptError::EnvVar(String::from(PRIVATE_KEY_ENV_VAR)))?;

    let output = Command::new(CAST_COMMAND)
        .arg(WALLET_COMMAND)
        .arg(ADDRESS_COMMAND)
        .arg(&priv_key)
        .output()
        .map_err(|e| ScriptError::WalletDerivation(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ScriptError::WalletDerivation(stderr));
    }

    let address = String::from_utf8(output.stdout)
        .map_err(|e| ScriptError::WalletDerivation(e.to_string()))?;

    Ok(address.trim().to_string())
}

/// Reads the RPC URL for the given chain from `<CHAIN>_RPC_URL`
pub fn chain_rpc_url(chain: Chain) -> Result<String, ScriptError> {
    let var = chain.rpc_url_env_var();
    env::var(&var).map_err(|_| ScriptError::EnvVar(var))
}

/// Resolves the `--admin` selector into a concrete address.
///
/// Literal addresses are passed through verbatim; a malformed literal is
/// left for the deployment tool to reject.
pub fn resolve_admin(
    selector: &str,
    chain: Chain,
    deployer_address: &str,
) -> Result<String, ScriptError> {
    match selector {
        ROLE_DEPLOYER => Ok(deployer_address.to_string()),
        ROLE_DEFAULT => default_admin(chain)
            .map(String::from)
            .ok_or(ScriptError::NoDefaultAdmin(chain)),
        ROLE_NONE => Ok(String::from(ZERO_ADDRESS)),
        literal => Ok(literal.to_string()),
    }
}

/// Resolves the `--updater` selector into a concrete address.
///
/// Unlike [`resolve_admin`], there is no `default` case; the string
/// `default` is treated as a literal address.
pub fn resolve_updater(selector: &str, deployer_address: &str) -> String {
    match selector {
        ROLE_DEPLOYER => deployer_address.to_string(),
        ROLE_NONE => String::from(ZERO_ADDRESS),
        literal => literal.to_string(),
    }
}

/// Scales an unscaled decimal string by 10^18, truncating any digits
/// beyond 18 fractional places
pub fn scale_to_wad(value: &str) -> Result<U256, ScriptError> {
    let invalid = || ScriptError::InvalidInitialValue(value.to_string());

    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (value, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let wad = U256::from(10u64).pow(U256::from(WAD_DECIMALS));

    let int = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| invalid())?
    };
    let mut scaled = int.checked_mul(wad).ok_or_else(invalid)?;

    // Sub-wei precision is dropped, matching the protocol's fixed point
    let frac_digits = &frac_part[..frac_part.len().min(WAD_DECIMALS)];
    if !frac_digits.is_empty() {
        let rescale = U256::from(10u64).pow(U256::from(WAD_DECIMALS - frac_digits.len()));
        let frac = U256::from_str_radix(frac_digits, 10).map_err(|_| invalid())?;
        scaled = scaled.checked_add(frac * rescale).ok_or_else(invalid)?;
    }

    Ok(scaled)
}

/// Runs the given command to completion with inherited stdio, mapping a
/// nonzero exit to a [`ScriptError`] carrying the tool's exit code
pub fn run_to_completion(mut cmd: Command) -> Result<(), ScriptError> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ScriptError::DeploymentLaunch(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ScriptError::DeploymentFailure(status.code().unwrap_or(1)))
    }
}
