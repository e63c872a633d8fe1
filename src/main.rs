use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use timer::core::config::{self, LogSettings, Mode};
use timer::tui;

#[derive(Parser)]
#[command(
    name = "timer",
    version,
    about = "Full-screen terminal countdown timer",
    after_help = config::USAGE
)]
struct Args {
    /// Duration such as 30s, 5m or 1h30m, or `tomato` for a pomodoro cycle
    #[arg(value_parser = config::parse_mode)]
    mode: Option<Mode>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let Some(mode) = args.mode else {
        print!("{}", config::USAGE);
        return ExitCode::FAILURE;
    };

    let log_settings = config::log_settings_from_env();
    if let Err(e) = init_logging(&log_settings) {
        eprintln!(
            "Warning: logging disabled, cannot write {}: {e}",
            log_settings.path.display()
        );
    }
    log::info!("Timer starting: {mode:?}");

    match tui::run(mode).await {
        Ok(reason) => {
            if let Some(message) = reason.farewell() {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Timer failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger, only when `TIMER_LOG` asks for one. The screen belongs to the timer.
fn init_logging(settings: &LogSettings) -> Result<(), Box<dyn Error>> {
    let Some(log_file) = open_log_file(settings)? else {
        return Ok(());
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(settings.level, log_config, log_file)?;
    Ok(())
}

/// Create the log file and its directory. `None` when logging is off.
fn open_log_file(settings: &LogSettings) -> io::Result<Option<File>> {
    if !settings.enabled() {
        return Ok(None);
    }
    if let Some(dir) = settings.path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    File::create(&settings.path).map(Some)
}
