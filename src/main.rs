use std::io;
use std::process;

use clap::Parser;
use toy_rsa::ui::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = cli.command.run(&mut io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
