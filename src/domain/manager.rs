use super::*;

use log::info;

/// Session object owning the one in-memory directory and the storage
/// backend it persists through. The interactive menu and the one-shot
/// subcommands both drive the store through this.
pub struct ContactManager {
    pub directory: ContactDirectory,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            directory: ContactDirectory::new(),
            storage: storage::parse_storage_type(None)?,
        })
    }

    pub fn with_storage(storage: Box<dyn ContactStore>) -> Self {
        Self {
            directory: ContactDirectory::new(),
            storage,
        }
    }

    /// Replaces the in-memory directory with the saved one. Returns
    /// `false` when no saved file exists yet, the expected first run
    /// state rather than an error.
    pub fn load(&mut self) -> Result<bool, AppError> {
        match self.storage.load()? {
            Some(directory) => {
                info!(
                    "loaded {} contacts from {} storage",
                    directory.len(),
                    self.storage.medium()
                );
                self.directory = directory;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes the whole directory out. A failure leaves the in-memory
    /// directory untouched, the caller decides how to report it.
    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.directory)
    }

    pub fn add_contact(&mut self, fields: &[String]) -> Result<(), AppError> {
        self.directory.add(fields)
    }

    pub fn remove_contact(
        &mut self,
        surname: &str,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<bool, AppError> {
        self.directory.remove(surname, name, phone)
    }

    /// Modify is remove-then-add, stored records are never mutated in
    /// place. The replacement is validated before the old record is
    /// removed so a malformed edit cannot lose the original.
    pub fn modify_contact(&mut self, old: &Contact, fields: &[String]) -> Result<bool, AppError> {
        let replacement = Contact::from_fields(fields)?;

        if !self
            .directory
            .remove(old.surname(), Some(old.name()), Some(old.phone()))?
        {
            return Ok(false);
        }

        self.directory.insert(replacement)?;
        Ok(true)
    }

    pub fn search_by_surname(&self, surname: &str) -> Vec<&Contact> {
        self.directory.search_by_surname(surname)
    }

    pub fn search_by_name(&self, name: &str) -> Vec<&Contact> {
        self.directory.search_by_name(name)
    }
}
