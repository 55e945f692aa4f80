//! CSV export of the record listing

use std::io::Write;
use std::path::Path;
use tracing::info;

use vehireg_types::{Field, Result, VehicleRecord};

/// Header row: one column per field, using the persisted key names
pub fn header() -> [&'static str; 10] {
    Field::ALL.map(|field| field.key())
}

/// Write records as CSV (with header) to any writer
pub fn write_records<W: Write>(writer: W, records: &[VehicleRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header())?;
    for record in records {
        csv_writer.write_record(record.values())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export records to a CSV file, replacing it
pub fn export_records(path: &Path, records: &[VehicleRecord]) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    info!(path = %path.display(), count = records.len(), "records exported");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(plate: &str, owner_name: &str) -> VehicleRecord {
        VehicleRecord {
            plate: plate.to_string(),
            brand: "Kia".to_string(),
            model: "2021".to_string(),
            color: "Verde".to_string(),
            chassis: "KNAB2512AMT123456".to_string(),
            engine: "G4LA987".to_string(),
            owner_id: "52123456".to_string(),
            owner_name: owner_name.to_string(),
            email: "owner@mail.co".to_string(),
            phone: "3004445566".to_string(),
        }
    }

    #[test]
    fn test_write_records_with_header() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[sample("ABC123", "Sofía Díaz")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "plate,brand,model,color,chassis,engine,owner_id,owner_name,email,phone"
        );
        assert_eq!(
            lines.next().unwrap(),
            "ABC123,Kia,2021,Verde,KNAB2512AMT123456,G4LA987,52123456,Sofía Díaz,owner@mail.co,3004445566"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let records = vec![sample("ABC123", "Ana"), sample("XYZ98Q", "Luis")];
        let count = export_records(&path, &records).unwrap();
        assert_eq!(count, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "XYZ98Q");
        assert_eq!(&rows[1][7], "Luis");
    }

    #[test]
    fn test_export_empty_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_records(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
