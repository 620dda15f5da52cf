pub mod stores;

use std::fs;
use std::path::Path;

use dotenv::dotenv;

use crate::domain::ContactDirectory;
use crate::errors::AppError;

/// Persistence seam for the contact directory. The directory is always
/// written and read wholesale, there is no incremental update.
pub trait ContactStore {
    /// `Ok(None)` means no saved file exists yet.
    fn load(&self) -> Result<Option<ContactDirectory>, AppError>;

    fn save(&self, directory: &ContactDirectory) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

pub fn parse_storage_type(choice: Option<&str>) -> Result<Box<dyn ContactStore>, AppError> {
    let medium = match choice {
        Some(medium) => medium.to_string(),
        None => {
            dotenv().ok();
            std::env::var("STORAGE_CHOICE").unwrap_or("csv".to_string())
        }
    };

    match medium.as_str() {
        "csv" => Ok(Box::new(stores::CsvStorage::new())),
        "mem" => Ok(Box::new(stores::MemStorage::new())),
        other => Err(AppError::Validation(format!(
            "Not a recognized storage medium: {other}"
        ))),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
