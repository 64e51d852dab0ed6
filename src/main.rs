mod app;
mod cli;
mod config;
mod constants;
mod content;
mod error;
mod gallery;
mod logging;
mod page;
mod storage;
mod view;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
