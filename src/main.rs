use std::process::ExitCode;

use clap::Parser;
use pageview_charts::{Config, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(files) => {
            log::info!(
                "Charts written: {}, {}, {}",
                files.line.display(),
                files.bar.display(),
                files.boxes.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
