//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::types::Chain;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// A required environment variable is unset
    EnvVar(String),
    /// Error deriving the deployer address from the private key
    WalletDerivation(String),
    /// No default admin is configured for the requested chain
    NoDefaultAdmin(Chain),
    /// The initial value is not a valid unsigned decimal
    InvalidInitialValue(String),
    /// The requested feature has no implementation yet
    Unimplemented(String),
    /// The deployment tool could not be launched
    DeploymentLaunch(String),
    /// The deployment tool exited with a nonzero status
    DeploymentFailure(i32),
}

impl ScriptError {
    /// The process exit code to surface for this error.
    ///
    /// A deployment-tool failure propagates the tool's own exit code;
    /// everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScriptError::DeploymentFailure(code) => *code,
            _ => 1,
        }
    }
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::EnvVar(var) => {
                write!(f, "environment variable `{}` is not set", var)
            }
            ScriptError::WalletDerivation(s) => {
                write!(f, "error deriving deployer address: {}", s)
            }
            ScriptError::NoDefaultAdmin(chain) => {
                write!(f, "no default admin configured for chain `{}`", chain)
            }
            ScriptError::InvalidInitialValue(s) => {
                write!(f, "invalid initial value `{}`", s)
            }
            ScriptError::Unimplemented(s) => write!(f, "not implemented: {}", s),
            ScriptError::DeploymentLaunch(s) => {
                write!(f, "error launching deployment tool: {}", s)
            }
            ScriptError::DeploymentFailure(code) => {
                write!(f, "deployment tool exited with status {}", code)
            }
        }
    }
}

impl Error for ScriptError {}
