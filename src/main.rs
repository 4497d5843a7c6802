use clap::Parser;

fn main() {
    let cli = stagehand::cli::Cli::parse();

    if let Err(e) = stagehand::cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
