//! CLI definition using clap

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

pub use vehireg_types::{Field, OutputFormat};

#[derive(Parser)]
#[command(name = "vehireg")]
#[command(version)]
#[command(about = "Vehicle registration records: validate, store, list and delete")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Records file to use instead of the configured one
    #[arg(long, global = true)]
    pub records_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Form fields; any field left out counts as empty
#[derive(clap::Args, Debug, Default)]
pub struct RegisterArgs {
    /// License plate (ABC123 or ABC12D)
    #[arg(long)]
    pub plate: Option<String>,

    /// Brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Model year (1900-2026)
    #[arg(long)]
    pub model: Option<String>,

    /// Color
    #[arg(long)]
    pub color: Option<String>,

    /// Chassis number (17 alphanumeric characters)
    #[arg(long)]
    pub chassis: Option<String>,

    /// Engine number
    #[arg(long)]
    pub engine: Option<String>,

    /// Owner ID (7-10 digits)
    #[arg(long)]
    pub owner_id: Option<String>,

    /// Owner full name
    #[arg(long)]
    pub owner_name: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone (10 digits)
    #[arg(long)]
    pub phone: Option<String>,
}

impl RegisterArgs {
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Plate => &self.plate,
            Field::Brand => &self.brand,
            Field::Model => &self.model,
            Field::Color => &self.color,
            Field::Chassis => &self.chassis,
            Field::Engine => &self.engine,
            Field::OwnerId => &self.owner_id,
            Field::OwnerName => &self.owner_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        };
        value.as_deref()
    }
}

/// Accepts canonical names, hyphenated names and the legacy Spanish keys
fn parse_field(s: &str) -> Result<Field, String> {
    s.parse::<Field>().map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a vehicle record and store it
    Register(RegisterArgs),

    /// Check a single field value
    Check {
        /// Field name (plate, brand, model, color, chassis, engine, owner-id, owner-name, email, phone)
        #[arg(value_parser = parse_field)]
        field: Field,

        /// Value to check
        value: String,
    },

    /// List stored records
    List,

    /// Delete the first record matching plate and owner ID or chassis
    #[command(group(
        ArgGroup::new("secondary")
            .required(true)
            .multiple(true)
            .args(["owner_id", "chassis"])
    ))]
    Delete {
        /// License plate of the record
        #[arg(long)]
        plate: String,

        /// Owner ID of the record
        #[arg(long)]
        owner_id: Option<String>,

        /// Chassis number of the record
        #[arg(long)]
        chassis: Option<String>,
    },

    /// Export stored records to CSV
    Export {
        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set records file path
        #[arg(long)]
        set_records_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
