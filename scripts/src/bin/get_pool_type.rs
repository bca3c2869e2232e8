//! Mini CLI to get a PoolType value for `.setPool()`

use clap::Parser;
use rate_provider_scripts::types::PoolType;

/// Get the integer PoolType value for `.setPool()`
#[derive(Parser)]
struct Cli {
    /// The pool type to look up
    #[arg(value_enum)]
    pool_type: PoolType,
}

fn main() {
    let cli = Cli::parse();
    println!("{}", cli.pool_type.code());
}
