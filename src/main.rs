use clap::Parser;
use fl_insurance_processor::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error while processing insurance data: {}", e);
        std::process::exit(1);
    }
}
