// src/bin/cli.rs
use clap::Parser;
use race_scrape::{cli, log, loge};

fn main() {
    let args = cli::Args::parse();
    log::init(args.log_level());
    if let Err(e) = color_eyre::install() {
        loge!("Could not install the error reporter: {e}");
    }

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
