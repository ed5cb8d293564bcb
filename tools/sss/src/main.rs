use clap::Parser;
use sss::{
    args::{Cli, Command},
    handlers::{error_code, run_recover, run_split},
};

fn main() {
    let cli = Cli::parse();
    env_logger::init();
    let result = match cli.command {
        Command::Split(args) => run_split(args),
        Command::Recover(args) => run_recover(args),
    };
    if let Err(error) = result {
        eprintln!("{error:#}");
        std::process::exit(i32::from(error_code(&error)));
    }
}
