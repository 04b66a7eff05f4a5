mod app;
mod chart;
mod color;
mod config;
mod data;

use std::process::ExitCode;

use app::RunError;
use config::PlotConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match app::run(&PlotConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        // Already reported by the loader step.
        Err(RunError::Load(_)) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}
