//! Command line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Split a 32-byte secret into shares and recover it from them.
#[derive(Parser, Debug)]
#[command(name = "sss", version = secret_sharing::version())]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a secret into share files.
    Split(SplitArgs),

    /// Recover a secret from share files.
    Recover(RecoverArgs),
}

/// Arguments for secret splitting.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// The file holding the secret, `-` for stdin.
    ///
    /// Up to 32 bytes are consumed; shorter input is zero-padded.
    #[arg(default_value = "-")]
    pub secret_file: String,

    /// The directory the share files are written into, named share1..shareN.
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,

    /// The number of shares required to recover the secret.
    #[arg(short = 'k', long, default_value_t = 2)]
    pub threshold: u32,

    /// The total number of shares to write.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub shares: u32,
}

/// Arguments for secret recovery.
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// The share files to read, defaulting to share1 and share2.
    pub share_files: Vec<PathBuf>,
}
