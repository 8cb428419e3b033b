//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `commune_core` end to end without a UI.
//! - Keep output deterministic JSON for quick local sanity checks.
//!
//! Usage: `commune_cli [CODE] [DATASET_JSON]`
//! - Without `DATASET_JSON` the bundled dataset is used.
//! - With `CODE` the matching commune is selected and the selection printed.
//! - With `COMMUNE_LOG_DIR` set to an absolute directory, core events are
//!   written there as rolling log files.

use commune_core::{
    default_log_level, init_logging, load_dataset_file, PickerSession, StoreConfig,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "COMMUNE_LOG_DIR";

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("commune_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    start_logging(std::env::var(LOG_DIR_ENV).ok().as_deref())?;

    let code = args.first().map(String::as_str);
    let dataset_path = args.get(1);

    let config = StoreConfig::default();
    let mut session = PickerSession::new(config);
    match dataset_path {
        Some(path) => {
            let records =
                load_dataset_file(path, config.dataset_shape).map_err(|err| err.to_string())?;
            session.reference.initialize_with(records);
        }
        None => session.reference.initialize().map_err(|err| err.to_string())?,
    }

    println!("commune_core version={}", commune_core::core_version());
    let list = session.reference.selectable_list();
    println!(
        "selectable={}",
        serde_json::to_string(&list).map_err(|err| err.to_string())?
    );

    if let Some(code) = code {
        let state = session.select_by_code(code).map_err(|err| err.to_string())?;
        println!(
            "selection={}",
            serde_json::to_string(state).map_err(|err| err.to_string())?
        );
    }
    Ok(())
}

/// Starts core file logging when a log directory is given.
///
/// Returns whether logging was started.
fn start_logging(log_dir: Option<&str>) -> Result<bool, String> {
    match log_dir.map(str::trim).filter(|dir| !dir.is_empty()) {
        Some(dir) => {
            init_logging(default_log_level(), dir)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::start_logging;
    use commune_core::{default_log_level, logging_status};

    #[test]
    fn logging_stays_off_without_a_directory() {
        assert!(!start_logging(None).unwrap());
        assert!(!start_logging(Some("  ")).unwrap());
    }

    #[test]
    fn log_directory_starts_core_logging() {
        let dir = tempfile::tempdir().unwrap();

        assert!(start_logging(dir.path().to_str()).unwrap());

        let (level, active_dir) = logging_status().unwrap();
        assert_eq!(level, default_log_level());
        assert_eq!(active_dir, dir.path());
    }

    #[test]
    fn relative_log_directory_is_rejected() {
        let err = start_logging(Some("logs")).unwrap_err();
        assert!(err.contains("absolute"));
    }
}
