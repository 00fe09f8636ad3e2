use std::path::Path;
use std::process::exit;

use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use hydra::{
    cli::input::CliArgs, error::HydraError, utils, utils::logger::config_logger,
    worker::run_hydra,
};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout).expect("Error configuring the logger");

    let config_file = utils::fs::default_config_file()?;
    if let Err(report) = run_hydra(&cli_args, Path::new("."), &config_file) {
        // Expected user-facing failures carry their own exit code;
        // everything else stays a full color-eyre report
        if let Some(kind) = report.downcast_ref::<HydraError>() {
            log::error!("{kind}");
            exit(kind.exit_code());
        }
        return Err(report);
    }

    Ok(())
}
