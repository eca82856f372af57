//! Fictitious-play solver binary.
//!
//! Options: --matrix, --file, --mode, --weights, --seed, --start, --trials, --json, -v

use clap::Parser;
use fictitious::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    fictitious::log(args.level());
    print!("{}", args.run()?);
    Ok(())
}
