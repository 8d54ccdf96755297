//! CSV loading for the world-map dataset.
//!
//! The sheet has columns `Location, X, Z, Owner, Type, Path`. Loading is
//! tolerant: rows that fail to parse or lack a name are logged and
//! skipped, never fatal, since unmatched fragments are expected in a
//! hand-maintained dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use super::record::{Dataset, LocationRow};
use super::DatasetError;

/// Load a dataset from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = read_dataset(file)?;
    info!(
        path = %path.display(),
        locations = dataset.locations.len(),
        routes = dataset.routes.len(),
        "loaded world-map dataset"
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize::<LocationRow>() {
        match result {
            Ok(row) if row.name.trim().is_empty() => {
                warn!("skipping dataset row with no location name");
            }
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(error = %err, "skipping malformed dataset row");
            }
        }
    }

    Ok(Dataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use std::io::Write;

    const SHEET: &str = "\
Location,X,Z,Owner,Type,Path
Home,0,0,,Base,R1
Market,30,0,Public Land,Shop,R1
Dock,0,40,Alex,\"Port, Ice Highway\",
";

    #[test]
    fn reads_rows_and_groupings() {
        let dataset = read_dataset(SHEET.as_bytes()).unwrap();

        assert_eq!(dataset.locations.len(), 3);
        assert_eq!(dataset.locations[0].name(), "Home");
        assert_eq!(dataset.locations[0].point(), Point::new(0, 0));
        assert_eq!(dataset.locations[2].owner(), Some("Alex"));
        assert!(dataset.locations[2].is_ice_highway());

        assert_eq!(dataset.routes.len(), 1);
        assert_eq!(dataset.routes[0].name, "R1");
        assert_eq!(dataset.routes[0].members.len(), 2);
    }

    #[test]
    fn skips_rows_with_bad_coordinates() {
        let sheet = "\
Location,X,Z,Owner,Type,Path
Home,0,0,,,
Broken,not-a-number,5,,,
Dock,0,40,,,
";
        let dataset = read_dataset(sheet.as_bytes()).unwrap();
        let names: Vec<&str> = dataset.locations.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Home", "Dock"]);
    }

    #[test]
    fn skips_rows_with_blank_names() {
        let sheet = "\
Location,X,Z,Owner,Type,Path
Home,0,0,,,
  ,5,5,,,
";
        let dataset = read_dataset(sheet.as_bytes()).unwrap();
        assert_eq!(dataset.locations.len(), 1);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SHEET.as_bytes()).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.locations.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_dataset("/nonexistent/world_map.csv");
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
