// src/bin/cli.rs
use member_lookup::{cli, log};

fn main() {
    let _ = color_eyre::install();
    log::init();

    if let Err(e) = cli::run() {
        member_lookup::loge!("CLI: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
