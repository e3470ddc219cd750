use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mfx_crypto::DigestAlgorithm;

#[derive(Parser)]
#[command(
    name = "mfx",
    about = "Deterministic block and Merkle DAG fixtures",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with generator settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Digest for identifiers (overrides the config file)
    #[arg(long, global = true)]
    pub digest: Option<DigestArg>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DigestArg {
    Blake3,
    Sha256,
}

impl From<DigestArg> for DigestAlgorithm {
    fn from(arg: DigestArg) -> Self {
        match arg {
            DigestArg::Blake3 => DigestAlgorithm::Blake3,
            DigestArg::Sha256 => DigestAlgorithm::Sha256,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a run of sequential blocks
    Blocks(BlocksArgs),
    /// Generate a DAG and print its identifiers
    Dag(DagArgs),
    /// Generate a DAG, read it back and check every identifier
    Verify(DagArgs),
}

#[derive(Args)]
pub struct BlocksArgs {
    /// Number of blocks
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Args)]
pub struct DagArgs {
    /// Children per internal node
    #[arg(short, long)]
    pub fanout: Option<u32>,
    /// Levels, counting the leaves as 1
    #[arg(short, long)]
    pub depth: Option<u32>,
    /// List every node identifier, not just the root
    #[arg(long)]
    pub all: bool,
}
