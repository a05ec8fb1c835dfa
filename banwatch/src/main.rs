use banwatch_core::cli::Cli;
use clap::Parser;

fn main() {
    let command = Cli::parse().into_command();

    if let Err(e) = command.dispatch() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
