use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use istat::{Args, Config, ConfigError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start = Instant::now();

    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => istat::EXIT_SUCCESS,
                _ => istat::EXIT_USAGE,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };
    let config = Config::from(args);

    match istat::run(&config) {
        Ok(stats) => {
            if config.verbose {
                if let Err(err) = istat::write_report(&mut io::stderr(), &stats, start.elapsed()) {
                    log::warn!("Failed to write report: {}", err);
                }
            }
            ExitCode::from(istat::EXIT_SUCCESS)
        }
        Err(err) => {
            if err.is::<ConfigError>() {
                eprintln!("{:#}", err);
                eprintln!("{}", istat::USAGE_HINT);
            } else {
                eprintln!("Error: {:?}", err);
            }
            istat::exit_code(&err)
        }
    }
}
