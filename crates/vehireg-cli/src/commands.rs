//! Command handlers
//!
//! Each handler returns `Ok(false)` when the action was refused (invalid
//! input, record not found, storage failure) so the process can exit
//! non-zero without treating it as a crash.

use crate::cli::{Cli, Commands, RegisterArgs};
use crate::output::{output_record, output_records, output_validation_errors};
use std::path::PathBuf;
use tracing::debug;
use vehireg_app::app::{RecordListing, RegistrationError, RegistrationService};
use vehireg_app::config::Config;
use vehireg_app::repository::{open_record_store, open_record_store_at};
use vehireg_domain::repository::DeleteOutcome;
use vehireg_domain::validation::{validate_field, RawForm};
use vehireg_store::JsonRecordStore;
use vehireg_types::{Field, OutputFormat, RecordKey, Result};

/// Execute CLI command
///
/// The configuration is only read by commands that open the record store.
pub fn execute(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Register(ref args) => {
            let (store, output_format) = open_store(&cli)?;
            cmd_register(&store, args, output_format)
        }

        Commands::Check { field, ref value } => Ok(cmd_check(field, value)),

        Commands::List => {
            let (store, output_format) = open_store(&cli)?;
            cmd_list(&store, output_format)
        }

        Commands::Delete {
            ref plate,
            ref owner_id,
            ref chassis,
        } => {
            let (store, output_format) = open_store(&cli)?;
            let key = RecordKey::new(
                plate.as_str(),
                owner_id.as_deref().unwrap_or(""),
                chassis.as_deref().unwrap_or(""),
            );
            cmd_delete(&store, &key, output_format)
        }

        Commands::Export { ref output } => {
            let (store, _) = open_store(&cli)?;
            cmd_export(&store, output.clone())
        }

        Commands::Config {
            show,
            ref set_records_file,
            set_output,
            reset,
        } => cmd_config(show, set_records_file.clone(), set_output, reset),
    }
}

/// Open the record store and resolve the output format
///
/// Command-line options override the saved configuration.
fn open_store(cli: &Cli) -> Result<(JsonRecordStore, OutputFormat)> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let store = match cli.records_file {
        Some(ref path) => open_record_store_at(path.clone())?,
        None => open_record_store(&config)?,
    };
    debug!(path = %store.path().display(), "using records file");
    Ok((store, output_format))
}

fn cmd_register(
    store: &JsonRecordStore,
    args: &RegisterArgs,
    output_format: OutputFormat,
) -> Result<bool> {
    let mut form = RawForm::new();
    for field in Field::ALL {
        if let Some(value) = args.value(field) {
            form.set(field, value);
        }
    }

    let service = RegistrationService::new(store);
    match service.submit(&form) {
        Ok(record) => {
            println!("Vehicle registered successfully.");
            output_record(output_format, &record)?;
            Ok(true)
        }
        Err(RegistrationError::Invalid(errors)) => {
            output_validation_errors(&errors);
            Ok(false)
        }
        Err(e @ RegistrationError::StoreError(_)) => {
            eprintln!("{}", e);
            Ok(false)
        }
    }
}

fn cmd_check(field: Field, value: &str) -> bool {
    match validate_field(field, value) {
        Ok(normalized) => {
            println!("{}: ok ({})", field.label(), normalized);
            true
        }
        Err(err) => {
            println!("{}: {}", field.label(), err);
            false
        }
    }
}

fn cmd_list(store: &JsonRecordStore, output_format: OutputFormat) -> Result<bool> {
    let listing = RecordListing::new(store);
    if let Some(reason) = listing.warning() {
        eprintln!("Warning: stored records could not be read ({})", reason);
    }
    output_records(output_format, listing.rows())?;
    Ok(true)
}

fn cmd_delete(
    store: &JsonRecordStore,
    key: &RecordKey,
    output_format: OutputFormat,
) -> Result<bool> {
    let mut listing = RecordListing::new(store);
    match listing.delete(key) {
        Ok(DeleteOutcome::Deleted(record)) => {
            println!("Record deleted.");
            output_record(output_format, &record)?;
            println!("\n{} record(s) remaining.", listing.count());
            Ok(true)
        }
        Ok(DeleteOutcome::NotFound) => {
            eprintln!(
                "No record found for plate {}. Refresh the listing and try again.",
                key.plate
            );
            Ok(false)
        }
        Err(e) => {
            eprintln!("Could not delete the record: {}", e);
            Ok(false)
        }
    }
}

fn cmd_export(store: &JsonRecordStore, output: PathBuf) -> Result<bool> {
    let listing = RecordListing::new(store);
    match listing.export_csv(&output) {
        Ok(count) => {
            println!("Exported {} record(s) to {}", count, output.display());
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(false)
        }
    }
}

fn cmd_config(
    show: bool,
    set_records_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<bool> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(true);
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_records_file {
        config.records_file = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(true)
}
