//! Output formatting module

use vehireg_domain::validation::ValidationErrors;
use vehireg_types::{Field, OutputFormat, Result, VehicleRecord};

/// Print a stored record as label/value lines
pub fn output_record(output_format: OutputFormat, record: &VehicleRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    for field in Field::ALL {
        println!("{:<16} {}", format!("{}:", field.label()), record.get(field));
    }
    Ok(())
}

/// Print every rejected field with its reason
pub fn output_validation_errors(errors: &ValidationErrors) {
    eprintln!("The record was not saved:");
    for (field, err) in errors.iter() {
        eprintln!("  {:<16} {}", format!("{}:", field.label()), err);
    }
}

/// Print the record listing
pub fn output_records(output_format: OutputFormat, records: &[VehicleRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("Registered Vehicles");
    println!("===================");

    if records.is_empty() {
        println!("No records found.");
    } else {
        print!("{}", render_table(records));
    }

    println!();
    println!("Total: {} vehicle(s)", records.len());
    Ok(())
}

/// Render records as an aligned text table, one row per record
fn render_table(records: &[VehicleRecord]) -> String {
    let headers = Field::ALL.map(|field| field.key());
    let mut widths = headers.map(|h| h.chars().count());
    for record in records {
        for (width, value) in widths.iter_mut().zip(record.values()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let line = |cells: [&str; 10]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut table = line(headers);
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    table.push_str(&"-".repeat(total_width));
    table.push('\n');
    for record in records {
        table.push_str(&line(record.values()));
    }
    table
}
