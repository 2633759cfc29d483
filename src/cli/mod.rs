//! Interactive front end: collects backup paths, allocates a job id, and
//! persists the job's metadata record. All validation of user-entered paths
//! happens here; the stores only see already-validated strings.

pub mod output;
pub mod prompts;

use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::{
    errors::CliError,
    idgen::IdGenerator,
    job::BackupRecord,
    store::{BackupRecordStore, IdStore},
    utils,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Runs the interactive backup-job setup flow.
pub fn run_cli() -> Result<(), CliError> {
    output::info(format!(
        "backup_core {} ({}, {} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BACKUP_CORE_BUILD_HASH"),
        env!("BACKUP_CORE_BUILD_TARGET"),
        env!("BACKUP_CORE_BUILD_PROFILE"),
        env!("BACKUP_CORE_BUILD_TIMESTAMP"),
    ));

    let base = utils::app_data_dir();
    let id_store = IdStore::new(&base);
    let record_store = BackupRecordStore::new(&base);
    let generator = IdGenerator::new(id_store);

    let theme = ColorfulTheme::default();
    let destination = prompts::collect_destination(&theme)?;
    let sources = prompts::collect_sources(&theme)?;

    let id = generator.generate()?;
    record_store.ensure_initialized(&id)?;

    let now = Local::now();
    let record = BackupRecord {
        id: Some(id.clone()),
        date: Some(now.format(DATE_FORMAT).to_string()),
        time: Some(now.format(TIME_FORMAT).to_string()),
        temporary_folder: Some(
            std::env::temp_dir()
                .join(format!("backup_core_{id}"))
                .display()
                .to_string(),
        ),
        source: Some(sources),
        destination: Some(destination),
    };
    record_store.save(&id, &record)?;

    output::success(format!(
        "Backup job {} registered ({} source(s) -> {})",
        id,
        record.source.as_ref().map(Vec::len).unwrap_or(0),
        record.destination.as_deref().unwrap_or("?"),
    ));
    Ok(())
}
