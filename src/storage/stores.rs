use super::*;

use std::cell::RefCell;
use std::env;
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, warn};

/// Fixed first line of the persisted file. Discarded on load without
/// being validated, a file holding only this line is an empty directory.
pub const CSV_HEADER: [&str; 3] = ["surname", "name", "phone"];

pub struct CsvStorage {
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(
                env::var("CSV_STORAGE_PATH").unwrap_or("./.instance/contacts.csv".to_string()),
            ),
        }
    }

    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CsvStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for CsvStorage {
    fn load(&self) -> Result<Option<ContactDirectory>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(None);
        }

        // flexible(true) lets records with the wrong field count through
        // to `add`, which rejects them the same way a direct add would.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut directory = ContactDirectory::new();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("skipping unreadable record in {}: {e}", self.path.display());
                    continue;
                }
            };

            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            if let Err(e) = directory.add(&fields) {
                warn!("skipping record in {}: {e}", self.path.display());
            }
        }

        Ok(Some(directory))
    }

    fn save(&self, directory: &ContactDirectory) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // from_path truncates, the file is replaced wholesale
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(CSV_HEADER)?;
        for (_, bucket) in directory.iter() {
            for contact in bucket {
                writer.serialize(contact)?;
            }
        }
        writer.flush()?;

        debug!(
            "saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }

    fn medium(&self) -> &str {
        "csv"
    }
}

/// Keeps the directory in process memory, nothing touches disk. Used by
/// unit tests and STORAGE_CHOICE=mem throwaway sessions.
pub struct MemStorage {
    slot: RefCell<Option<ContactDirectory>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Option<ContactDirectory>, AppError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, directory: &ContactDirectory) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(directory.clone());
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fields(surname: &str, name: &str, phone: &str) -> Vec<String> {
        vec![surname.to_string(), name.to_string(), phone.to_string()]
    }

    #[test]
    fn load_without_file_is_none() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = CsvStorage::at(dir.path().join("nonexistent.csv"));

        assert!(storage.load()?.is_none());
        Ok(())
    }

    #[test]
    fn save_writes_header_and_one_line_per_contact() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        let storage = CsvStorage::at(&path);

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Lee", "Kim", "000"))?;
        storage.save(&directory)?;

        assert_eq!(fs::read_to_string(&path)?, "surname,name,phone\nLee,Kim,000\n");
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips_per_bucket_order() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = CsvStorage::at(dir.path().join("contacts.csv"));

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Smith", "Ann", "123-4567"))?;
        directory.add(&fields("Smith", "Bob", "987-6543"))?;
        directory.add(&fields("Adams", "Zoe", "555"))?;
        directory.add(&fields("smART", "Eve", "666"))?;
        storage.save(&directory)?;

        let loaded = storage.load()?.expect("saved file should exist");

        assert_eq!(loaded.len(), directory.len());
        for ((letter_a, bucket_a), (letter_b, bucket_b)) in directory.iter().zip(loaded.iter()) {
            assert_eq!(letter_a, letter_b);
            assert_eq!(bucket_a, bucket_b);
        }
        Ok(())
    }

    #[test]
    fn header_only_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "surname,name,phone\n")?;

        let loaded = CsvStorage::at(&path).load()?.expect("file exists");
        assert!(loaded.is_empty());
        Ok(())
    }

    #[test]
    fn header_is_discarded_not_validated() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "whatever,garbage,here\nLee,Kim,000\n")?;

        let loaded = CsvStorage::at(&path).load()?.expect("file exists");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.search_by_surname("Lee").len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(
            &path,
            "surname,name,phone\nLee,Kim,000\nonly-two,fields\n,NoSurname,123\nDoe,Jane,111\n",
        )?;

        let loaded = CsvStorage::at(&path).load()?.expect("file exists");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.search_by_surname("Lee").len(), 1);
        assert_eq!(loaded.search_by_surname("Doe").len(), 1);
        Ok(())
    }

    #[test]
    fn fields_with_the_delimiter_round_trip_quoted() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        let storage = CsvStorage::at(&path);

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Lee, Jr", "Kim", "000"))?;
        storage.save(&directory)?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "surname,name,phone\n\"Lee, Jr\",Kim,000\n"
        );

        let loaded = storage.load()?.expect("file exists");
        assert_eq!(loaded.search_by_surname("Lee, Jr").len(), 1);
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_content() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        let storage = CsvStorage::at(&path);

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Lee", "Kim", "000"))?;
        directory.add(&fields("Doe", "Jane", "111"))?;
        storage.save(&directory)?;

        directory.remove("Doe", None, None)?;
        storage.save(&directory)?;

        assert_eq!(fs::read_to_string(&path)?, "surname,name,phone\nLee,Kim,000\n");
        Ok(())
    }

    #[test]
    fn save_failure_does_not_panic() -> Result<(), AppError> {
        let dir = tempdir()?;
        // A directory at the target path makes the write fail
        let path = dir.path().join("taken");
        fs::create_dir(&path)?;

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Lee", "Kim", "000"))?;

        assert!(CsvStorage::at(&path).save(&directory).is_err());
        // In-memory state is untouched by the failed save
        assert_eq!(directory.len(), 1);
        Ok(())
    }

    #[test]
    fn mem_storage_round_trips() -> Result<(), AppError> {
        let storage = MemStorage::new();
        assert!(storage.load()?.is_none());

        let mut directory = ContactDirectory::new();
        directory.add(&fields("Lee", "Kim", "000"))?;
        storage.save(&directory)?;

        let loaded = storage.load()?.expect("saved slot");
        assert_eq!(loaded.len(), 1);
        Ok(())
    }
}
