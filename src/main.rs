use clap::Parser;
use investsim::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
